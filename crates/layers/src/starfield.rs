use foundation::color::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::primitive::Star;

pub const STAR_COUNT: usize = 2000;
pub const STAR_RADIUS_M: f64 = 500.0;
pub const STAR_COLOR: Rgba = Rgba::new(255, 255, 255, 80);

/// Stars sit just below the surface so they render behind the globe.
const STAR_ELEVATION_M: f64 = -1.0;

/// Uniformly distributed decorative points over the full lon/lat
/// domain. Pass a seed for reproducible output (tests, comparable
/// screenshots); `None` draws fresh positions every call.
pub fn starfield(count: usize, seed: Option<u64>) -> Vec<Star> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|_| Star {
            position: [
                rng.gen_range(-180.0..=180.0),
                rng.gen_range(-90.0..=90.0),
                STAR_ELEVATION_M,
            ],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::starfield;

    #[test]
    fn produces_requested_count_inside_the_domain() {
        let stars = starfield(2000, Some(7));
        assert_eq!(stars.len(), 2000);
        for s in &stars {
            assert!((-180.0..=180.0).contains(&s.position[0]));
            assert!((-90.0..=90.0).contains(&s.position[1]));
            assert_eq!(s.position[2], -1.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        assert_eq!(starfield(100, Some(42)), starfield(100, Some(42)));
        assert_ne!(starfield(100, Some(42)), starfield(100, Some(43)));
    }
}
