use foundation::geo::{EARTH_RADIUS_M, GeoPoint};
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CameraPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub altitude_m: f64,
}

/// Camera over a target point. Altitude starts at Earth radius for
/// zoom 0 and halves per zoom increment; pitch is fixed at 45 degrees.
/// Plain exponential falloff, no projection math.
pub fn camera_position(center: GeoPoint, zoom: f64) -> CameraPosition {
    let altitude_m = EARTH_RADIUS_M * (-zoom * std::f64::consts::LN_2).exp();
    CameraPosition {
        longitude: center.lon_deg,
        latitude: center.lat_deg,
        zoom,
        pitch: 45.0,
        bearing: 0.0,
        altitude_m,
    }
}

#[cfg(test)]
mod tests {
    use super::camera_position;
    use foundation::geo::{EARTH_RADIUS_M, GeoPoint};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn zoom_zero_sits_at_earth_radius() {
        let cam = camera_position(GeoPoint::new(0.0, 0.0), 0.0);
        assert_close(cam.altitude_m, EARTH_RADIUS_M, 1e-6);
        assert_eq!(cam.pitch, 45.0);
        assert_eq!(cam.bearing, 0.0);
    }

    #[test]
    fn altitude_halves_per_zoom_increment() {
        let center = GeoPoint::new(20.0, 10.0);
        for z in 0..8 {
            let here = camera_position(center, z as f64).altitude_m;
            let closer = camera_position(center, (z + 1) as f64).altitude_m;
            assert_close(closer, here / 2.0, 1e-6);
        }
    }

    #[test]
    fn target_passes_through() {
        let cam = camera_position(GeoPoint::new(139.7, 35.7), 3.0);
        assert_eq!(cam.longitude, 139.7);
        assert_eq!(cam.latitude, 35.7);
        assert_eq!(cam.zoom, 3.0);
    }
}
