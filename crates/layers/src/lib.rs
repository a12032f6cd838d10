pub mod columns;
pub mod graticule;
pub mod ocean;
pub mod primitive;
pub mod stack;
pub mod starfield;

pub use primitive::*;
pub use stack::*;
