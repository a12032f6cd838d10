use serde::{Deserialize, Serialize};

/// Mean Earth radius (meters), the sphere the viewer renders against.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A position on the globe in degrees, longitude-first like the rest
/// of the render bundle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}
