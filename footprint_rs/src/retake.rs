//! Demo regeneration of a record after the quiz is retaken.
//!
//! The new values are placeholders drawn from the configured ranges; they
//! are not derived from the category data.

use rand::Rng;

use crate::config::RetakeRanges;
use footprint_report::types::FootprintRecord;

/// Draw a new `earths_required` from `[earths_min, earths_max)` and a new
/// `comparison_percent` from `[comparison_min, comparison_max)`. Other fields
/// are left untouched.
pub fn regenerate<R: Rng>(record: &mut FootprintRecord, ranges: &RetakeRanges, rng: &mut R) {
    record.earths_required = rng.gen_range(ranges.earths_min..ranges.earths_max);
    record.comparison_percent = rng.gen_range(ranges.comparison_min..ranges.comparison_max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn values_stay_in_half_open_ranges() {
        let ranges = RetakeRanges::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut record = FootprintRecord::default();

        for _ in 0..1000 {
            regenerate(&mut record, &ranges, &mut rng);
            assert!((2.5..4.0).contains(&record.earths_required));
            assert!((-20..20).contains(&record.comparison_percent));
        }
    }

    #[test]
    fn other_fields_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut record = FootprintRecord::default();
        regenerate(&mut record, &RetakeRanges::default(), &mut rng);

        let seed = FootprintRecord::default();
        assert_eq!(record.overshoot_date, seed.overshoot_date);
        assert_eq!(record.categories, seed.categories);
        assert_eq!(record.carbon_footprint, seed.carbon_footprint);
    }

    #[test]
    fn same_seed_same_result() {
        let ranges = RetakeRanges::default();
        let mut a = FootprintRecord::default();
        let mut b = FootprintRecord::default();
        regenerate(&mut a, &ranges, &mut StdRng::seed_from_u64(9));
        regenerate(&mut b, &ranges, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
