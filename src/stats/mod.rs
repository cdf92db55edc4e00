//! Per-entity statistics.
//!
//! - `entities` - roster lookup with movement and shot counts
//! - `merge` - joins the roster with the event index into cohort stats

pub mod entities;
pub mod merge;

pub use entities::*;
pub use merge::*;

/// Round to the nearest whole number, clamping below at zero.
///
/// NaN maps to 0 and +inf saturates, matching `as` cast semantics.
pub(crate) fn round_count(value: f64) -> u64 {
    value.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_count() {
        assert_eq!(round_count(4.4999), 4);
        assert_eq!(round_count(4.5), 5);
        assert_eq!(round_count(-3.0), 0);
        assert_eq!(round_count(f64::NAN), 0);
        assert_eq!(round_count(f64::INFINITY), u64::MAX);
    }
}
