use foundation::geo::GeoPoint;
use formats::EventRecord;

use crate::primitive::EventColumn;

pub const COLUMN_RADIUS_M: f64 = 25_000.0;

/// One column per filtered event, positioned at (longitude, latitude)
/// with the elevation and fill color derived at load time.
pub fn event_columns<'a>(events: impl IntoIterator<Item = &'a EventRecord>) -> Vec<EventColumn> {
    events
        .into_iter()
        .map(|e| EventColumn {
            position: GeoPoint::new(e.longitude, e.latitude),
            elevation_m: e.height,
            color: e.color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::event_columns;
    use foundation::color::Rgb;
    use formats::EventCatalog;

    #[test]
    fn one_column_per_event_with_derived_styling() {
        let c = EventCatalog::from_csv_reader(
            "Date,Latitude,Longitude,Magnitude\n\
             2020-03-01,10,20,6.5\n\
             2020-04-01,-5,140,3.0\n"
                .as_bytes(),
        )
        .expect("test catalog");

        let columns = event_columns(&c.events);
        assert_eq!(columns.len(), 2);

        assert_eq!(columns[0].position.lon_deg, 20.0);
        assert_eq!(columns[0].position.lat_deg, 10.0);
        assert_eq!(columns[0].color, Rgb::new(230, 126, 34));
        assert!((columns[0].elevation_m - 7.5f64.ln() * 30_000.0).abs() < 1e-9);

        assert_eq!(columns[1].color, Rgb::new(65, 182, 196));
    }
}
