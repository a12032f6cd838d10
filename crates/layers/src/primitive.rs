use foundation::color::Rgb;
use foundation::geo::GeoPoint;
use serde::Serialize;

/// One decorative background star: lon, lat, elevation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Star {
    pub position: [f64; 3],
}

/// The full-globe backdrop polygon, one row of lon samples per
/// tessellation step of latitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpherePatch {
    pub rows: Vec<Vec<GeoPoint>>,
}

/// A densely sampled graticule polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridPath {
    pub points: Vec<GeoPoint>,
}

/// One extruded marker per filtered event.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct EventColumn {
    pub position: GeoPoint,
    pub elevation_m: f64,
    pub color: Rgb,
}
