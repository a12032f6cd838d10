use foundation::color::Rgba;
use foundation::geo::GeoPoint;

use crate::primitive::GridPath;

pub const GRID_COLOR: Rgba = Rgba::new(30, 100, 200, 120);
pub const GRID_WIDTH: f64 = 1.0;

/// Ring/meridian spacing in degrees.
const LINE_STEP_DEG: i32 = 20;
/// Sample spacing along each line, for smooth curves on the sphere.
const SAMPLE_STEP_DEG: i32 = 5;

/// Latitude rings every 20 degrees from -80 to 80, then meridians
/// every 20 degrees from -180 to 180, in that order.
pub fn graticule() -> Vec<GridPath> {
    let mut paths = Vec::new();

    for lat in (-80..=80).step_by(LINE_STEP_DEG as usize) {
        let points = (-180..=180)
            .step_by(SAMPLE_STEP_DEG as usize)
            .map(|lon| GeoPoint::new(lon as f64, lat as f64))
            .collect();
        paths.push(GridPath { points });
    }

    for lon in (-180..=180).step_by(LINE_STEP_DEG as usize) {
        let points = (-80..=80)
            .step_by(SAMPLE_STEP_DEG as usize)
            .map(|lat| GeoPoint::new(lon as f64, lat as f64))
            .collect();
        paths.push(GridPath { points });
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::graticule;

    #[test]
    fn nine_rings_then_nineteen_meridians() {
        let paths = graticule();
        assert_eq!(paths.len(), 28);

        // Rings hold latitude constant across 73 lon samples.
        for ring in &paths[..9] {
            assert_eq!(ring.points.len(), 73);
            let lat = ring.points[0].lat_deg;
            assert!(ring.points.iter().all(|p| p.lat_deg == lat));
        }

        // Meridians hold longitude constant across 33 lat samples.
        for meridian in &paths[9..] {
            assert_eq!(meridian.points.len(), 33);
            let lon = meridian.points[0].lon_deg;
            assert!(meridian.points.iter().all(|p| p.lon_deg == lon));
        }

        assert_eq!(paths[0].points[0].lat_deg, -80.0);
        assert_eq!(paths[8].points[0].lat_deg, 80.0);
        assert_eq!(paths[9].points[0].lon_deg, -180.0);
        assert_eq!(paths[27].points[0].lon_deg, 180.0);
    }
}
