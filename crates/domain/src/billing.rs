//! Billing rule — how a stay turns into billable hours.

use chrono::TimeDelta;

/// Number of hours charged for a stay of length `stay`.
///
/// Whole hours are counted (the partial hour is dropped) and every stay is
/// charged at least one hour: 59 minutes and 90 minutes both bill 1 hour,
/// exactly 2 hours bills 2.
#[must_use]
pub fn billable_hours(stay: TimeDelta) -> u64 {
    u64::try_from(stay.num_hours()).unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bill_one_hour_for_an_instant_stay() {
        assert_eq!(billable_hours(TimeDelta::zero()), 1);
    }

    #[test]
    fn should_bill_one_hour_under_an_hour() {
        assert_eq!(billable_hours(TimeDelta::minutes(59)), 1);
    }

    #[test]
    fn should_truncate_partial_hours() {
        assert_eq!(billable_hours(TimeDelta::minutes(90)), 1);
        assert_eq!(billable_hours(TimeDelta::minutes(179)), 2);
    }

    #[test]
    fn should_bill_exact_hours() {
        assert_eq!(billable_hours(TimeDelta::hours(2)), 2);
        assert_eq!(billable_hours(TimeDelta::hours(26)), 26);
    }

    #[test]
    fn should_floor_negative_durations_to_one_hour() {
        assert_eq!(billable_hours(TimeDelta::hours(-3)), 1);
    }
}
