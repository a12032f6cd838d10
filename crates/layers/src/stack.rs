use foundation::color::Rgba;
use formats::EventRecord;
use serde::Serialize;

use crate::columns::{COLUMN_RADIUS_M, event_columns};
use crate::graticule::{GRID_COLOR, GRID_WIDTH, graticule};
use crate::ocean::{OCEAN_COLOR, ocean_sphere};
use crate::primitive::{EventColumn, GridPath, SpherePatch, Star};
use crate::starfield::{STAR_COLOR, STAR_RADIUS_M, starfield};

/// Starfield generation knobs. `seed: None` gives a fresh sky per
/// render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: crate::starfield::STAR_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarfieldLayer {
    pub radius_m: f64,
    pub color: Rgba,
    pub data: Vec<Star>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OceanLayer {
    pub color: Rgba,
    pub polygon: SpherePatch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayer {
    pub color: Rgba,
    pub width: f64,
    pub paths: Vec<GridPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnLayer {
    pub radius_m: f64,
    pub pickable: bool,
    pub data: Vec<EventColumn>,
}

/// The drawable layers for one frame, back to front. Decorative
/// layers are not pickable; event columns are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStack {
    pub stars: StarfieldLayer,
    pub ocean: OceanLayer,
    pub grid: GridLayer,
    pub events: ColumnLayer,
}

impl LayerStack {
    pub fn build<'a>(
        events: impl IntoIterator<Item = &'a EventRecord>,
        stars: StarfieldConfig,
    ) -> Self {
        Self {
            stars: StarfieldLayer {
                radius_m: STAR_RADIUS_M,
                color: STAR_COLOR,
                data: starfield(stars.count, stars.seed),
            },
            ocean: OceanLayer {
                color: OCEAN_COLOR,
                polygon: ocean_sphere(),
            },
            grid: GridLayer {
                color: GRID_COLOR,
                width: GRID_WIDTH,
                paths: graticule(),
            },
            events: ColumnLayer {
                radius_m: COLUMN_RADIUS_M,
                pickable: true,
                data: event_columns(events),
            },
        }
    }
}
