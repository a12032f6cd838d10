use serde::Serialize;

/// The camera the viewer opens with. A value object: recomputed per
/// render, never mutated in place.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub height_px: u32,
    /// Idle auto-rotation, degrees per second.
    pub rotation_speed_deg_s: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 1.5,
            min_zoom: 1.0,
            max_zoom: 16.0,
            pitch: 50.0,
            bearing: 0.0,
            height_px: 700,
            rotation_speed_deg_s: 0.5,
        }
    }
}
