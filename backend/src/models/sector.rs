//! Fixed-width ecliptic sectors.

use crate::define_sector_index;

/// Wrap any angle into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r >= 0.0 {
        return r;
    }
    let wrapped = r + 360.0;
    // tiny negative remainders round up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

define_sector_index!(
    /// One of the 12 Raasi (zodiac) sectors of 30°, counted from Mesham at 0°.
    ZodiacIndex,
    12
);

define_sector_index!(
    /// One of the 27 Nakshatra (lunar mansion) sectors of 13°20′, counted from
    /// Ashwini at 0°.
    MansionIndex,
    27
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        assert_eq!(normalize_degrees(-1e-14), 0.0);
    }

    #[test]
    fn test_normalize_keeps_in_range_values_exact() {
        let edge = 360.0 / 27.0;
        assert_eq!(normalize_degrees(edge).to_bits(), edge.to_bits());
        assert_eq!(normalize_degrees(217.288).to_bits(), 217.288f64.to_bits());
        assert_eq!(MansionIndex::from_longitude(edge).value(), 1);
    }

    #[test]
    fn test_largest_value_below_full_turn_is_last_sector() {
        let below = f64::from_bits(360f64.to_bits() - 1);
        assert!(below < 360.0);
        assert_eq!(normalize_degrees(below), below);
        assert_eq!(ZodiacIndex::from_longitude(below).value(), 11);
        assert_eq!(MansionIndex::from_longitude(below).value(), 26);
    }

    #[test]
    fn test_zodiac_boundaries() {
        assert_eq!(ZodiacIndex::from_longitude(0.0).value(), 0);
        assert_eq!(ZodiacIndex::from_longitude(29.999_999).value(), 0);
        assert_eq!(ZodiacIndex::from_longitude(30.0).value(), 1);
        assert_eq!(ZodiacIndex::from_longitude(359.999).value(), 11);
    }

    #[test]
    fn test_mansion_boundaries() {
        assert_eq!(MansionIndex::from_longitude(0.0).value(), 0);
        assert_eq!(MansionIndex::from_longitude(13.3).value(), 0);
        assert_eq!(MansionIndex::from_longitude(13.34).value(), 1);
        assert_eq!(MansionIndex::from_longitude(40.0).value(), 3);
        assert_eq!(MansionIndex::from_longitude(359.999).value(), 26);
    }

    #[test]
    fn test_negative_and_overflowing_longitudes() {
        assert_eq!(
            ZodiacIndex::from_longitude(-10.0),
            ZodiacIndex::from_longitude(350.0)
        );
        assert_eq!(
            ZodiacIndex::from_longitude(370.0),
            ZodiacIndex::from_longitude(10.0)
        );
        assert_eq!(
            MansionIndex::from_longitude(-10.0),
            MansionIndex::from_longitude(350.0)
        );
        assert_eq!(
            MansionIndex::from_longitude(370.0),
            MansionIndex::from_longitude(10.0)
        );
    }

    #[test]
    fn test_non_finite_falls_back_to_zero() {
        assert_eq!(ZodiacIndex::from_longitude(f64::NAN).value(), 0);
        assert_eq!(MansionIndex::from_longitude(f64::INFINITY).value(), 0);
    }

    #[test]
    fn test_checked_new() {
        assert!(ZodiacIndex::new(11).is_some());
        assert!(ZodiacIndex::new(12).is_none());
        assert!(MansionIndex::new(26).is_some());
        assert!(MansionIndex::new(27).is_none());
    }

    #[test]
    fn test_all_and_constants() {
        assert_eq!(ZodiacIndex::all().count(), ZodiacIndex::COUNT);
        assert_eq!(MansionIndex::all().count(), MansionIndex::COUNT);
        assert_eq!(ZodiacIndex::WIDTH_DEG, 30.0);
        assert!((MansionIndex::WIDTH_DEG - 13.333_333_333).abs() < 1e-8);
        let last: usize = MansionIndex::all().last().unwrap().into();
        assert_eq!(last, 26);
    }

    proptest! {
        #[test]
        fn prop_indices_in_range(lon in -1e7..1e7f64) {
            prop_assert!(ZodiacIndex::from_longitude(lon).value() < 12);
            prop_assert!(MansionIndex::from_longitude(lon).value() < 27);
        }

        #[test]
        fn prop_normalized_in_range(lon in -1e7..1e7f64) {
            let n = normalize_degrees(lon);
            prop_assert!((0.0..360.0).contains(&n));
        }

        #[test]
        fn prop_full_turn_is_same_sector(lon in 0.0..360.0f64, turns in -5i32..5) {
            let shifted = lon + 360.0 * turns as f64;
            // skip values that land within rounding of a boundary
            let width = MansionIndex::WIDTH_DEG;
            let gap = lon % width;
            prop_assume!(gap > 1e-6 && width - gap > 1e-6 && lon % 30.0 > 1e-6 && 30.0 - lon % 30.0 > 1e-6);
            prop_assert_eq!(ZodiacIndex::from_longitude(shifted), ZodiacIndex::from_longitude(lon));
            prop_assert_eq!(MansionIndex::from_longitude(shifted), MansionIndex::from_longitude(lon));
        }
    }
}
