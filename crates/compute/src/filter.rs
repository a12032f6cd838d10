use formats::{EventCatalog, EventRecord};

/// Exact-year selection with a closed magnitude interval. Stateless;
/// an empty result is a valid outcome, not an error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MagnitudeFilter {
    pub year: i32,
    pub min_magnitude: f64,
    pub max_magnitude: f64,
}

impl MagnitudeFilter {
    pub fn new(year: i32, min_magnitude: f64, max_magnitude: f64) -> Self {
        Self {
            year,
            min_magnitude,
            max_magnitude,
        }
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        event.year == self.year
            && event.magnitude >= self.min_magnitude
            && event.magnitude <= self.max_magnitude
    }

    pub fn apply<'a>(&self, catalog: &'a EventCatalog) -> Vec<&'a EventRecord> {
        catalog.events.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::MagnitudeFilter;
    use formats::EventCatalog;

    fn catalog() -> EventCatalog {
        EventCatalog::from_csv_reader(
            "Date,Latitude,Longitude,Magnitude\n\
             1965-01-02,1,1,5.1\n\
             1965-06-15,2,2,6.0\n\
             1966-03-03,3,3,5.5\n\
             1965-12-31,4,4,8.2\n"
                .as_bytes(),
        )
        .expect("test catalog")
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let c = catalog();
        let hits = MagnitudeFilter::new(1965, 5.1, 6.0).apply(&c);
        let magnitudes: Vec<f64> = hits.iter().map(|e| e.magnitude).collect();
        assert_eq!(magnitudes, vec![5.1, 6.0]);
    }

    #[test]
    fn year_must_match_exactly() {
        let c = catalog();
        let hits = MagnitudeFilter::new(1966, 0.0, 10.0).apply(&c);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].magnitude, 5.5);
    }

    #[test]
    fn full_range_returns_every_row_of_the_year() {
        let c = catalog();
        let (lo, hi) = c.magnitude_range().unwrap();
        let hits = MagnitudeFilter::new(1965, lo, hi).apply(&c);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let c = catalog();
        assert!(MagnitudeFilter::new(2001, 0.0, 10.0).apply(&c).is_empty());
    }
}
