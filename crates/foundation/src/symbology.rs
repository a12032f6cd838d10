use crate::color::Rgb;

/// Meters of column per unit of ln(1 + magnitude).
pub const HEIGHT_SCALE_M: f64 = 30_000.0;

/// Magnitude buckets, left-closed/right-open with boundaries at 4, 5,
/// 6 and 7; the last bucket is open-ended. Anything below 4 lands in
/// the first bucket, so a negative or otherwise absurd magnitude
/// renders as a weak event rather than failing.
pub fn magnitude_color(magnitude: f64) -> Rgb {
    if magnitude < 4.0 {
        Rgb::new(65, 182, 196)
    } else if magnitude < 5.0 {
        Rgb::new(250, 177, 160)
    } else if magnitude < 6.0 {
        Rgb::new(243, 156, 18)
    } else if magnitude < 7.0 {
        Rgb::new(230, 126, 34)
    } else {
        Rgb::new(231, 76, 60)
    }
}

/// Column elevation in meters. Logarithmic so the top of the scale
/// does not dwarf everything below it.
pub fn column_height(magnitude: f64) -> f64 {
    (1.0 + magnitude).ln() * HEIGHT_SCALE_M
}

#[cfg(test)]
mod tests {
    use super::{column_height, magnitude_color};
    use crate::color::Rgb;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn bucket_boundaries_are_exact() {
        assert_eq!(magnitude_color(3.999), Rgb::new(65, 182, 196));
        assert_eq!(magnitude_color(4.0), Rgb::new(250, 177, 160));
        assert_eq!(magnitude_color(4.999), Rgb::new(250, 177, 160));
        assert_eq!(magnitude_color(5.0), Rgb::new(243, 156, 18));
        assert_eq!(magnitude_color(6.0), Rgb::new(230, 126, 34));
        assert_eq!(magnitude_color(6.999), Rgb::new(230, 126, 34));
        assert_eq!(magnitude_color(7.0), Rgb::new(231, 76, 60));
        assert_eq!(magnitude_color(9.5), Rgb::new(231, 76, 60));
    }

    #[test]
    fn negative_magnitude_falls_into_first_bucket() {
        assert_eq!(magnitude_color(-2.0), Rgb::new(65, 182, 196));
    }

    #[test]
    fn height_matches_log_scale() {
        assert_close(column_height(0.0), 0.0, 1e-12);
        assert_close(column_height(6.5), 7.5f64.ln() * 30_000.0, 1e-9);
    }

    #[test]
    fn height_is_monotone() {
        let mut prev = column_height(0.0);
        for i in 1..=100 {
            let h = column_height(i as f64 * 0.1);
            assert!(h > prev);
            prev = h;
        }
    }
}
