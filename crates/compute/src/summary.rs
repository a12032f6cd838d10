use formats::EventRecord;
use serde::Serialize;

/// Count and mean magnitude of a filtered subset, shown beside the
/// map. Mean of an empty subset is `None` (serialized as null).
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub count: usize,
    pub mean_magnitude: Option<f64>,
}

impl CatalogSummary {
    pub fn of<'a>(events: impl IntoIterator<Item = &'a EventRecord>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        for e in events {
            count += 1;
            sum += e.magnitude;
        }
        let mean_magnitude = (count > 0).then(|| sum / count as f64);
        Self {
            count,
            mean_magnitude,
        }
    }
}
