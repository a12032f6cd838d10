use foundation::color::Rgba;
use foundation::geo::GeoPoint;

use crate::primitive::SpherePatch;

pub const OCEAN_COLOR: Rgba = Rgba::new(0, 20, 40, 200);

/// Tessellation step in degrees, both axes.
const STEP_DEG: i32 = 5;

/// One polygon spanning the whole globe, used as the solid ocean
/// backdrop. Equirectangular on purpose: the renderer warps it onto
/// the sphere, and visual calibration depends on this tessellation.
pub fn ocean_sphere() -> SpherePatch {
    let rows = (-90..=90)
        .step_by(STEP_DEG as usize)
        .map(|lat| {
            (-180..=180)
                .step_by(STEP_DEG as usize)
                .map(|lon| GeoPoint::new(lon as f64, lat as f64))
                .collect()
        })
        .collect();
    SpherePatch { rows }
}
