// Date utility functions

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar date of `now` on the wall clock of `time_zone`.
pub fn local_date(now: DateTime<Utc>, time_zone: Tz) -> NaiveDate {
    now.with_timezone(&time_zone).date_naive()
}

/// Time from `now` until `target`, clamped at zero and rounded to the
/// nearest whole second.
pub fn remaining_until(target: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let millis = target.signed_duration_since(now).num_milliseconds().max(0);
    Duration::seconds((millis + 500) / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_date_crosses_midnight_east_of_utc() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 22, 30, 0).unwrap();
        assert_eq!(
            local_date(now, chrono_tz::Asia::Kuwait),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert_eq!(
            local_date(now, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_remaining_is_clamped() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let past = now - Duration::minutes(5);
        assert_eq!(remaining_until(past, now), Duration::zero());
        assert_eq!(remaining_until(now, now), Duration::zero());
    }

    #[test]
    fn test_remaining_rounds_to_nearest_second() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let target = now + Duration::seconds(10);
        assert_eq!(
            remaining_until(target, now + Duration::milliseconds(300)),
            Duration::seconds(10)
        );
        assert_eq!(
            remaining_until(target, now + Duration::milliseconds(700)),
            Duration::seconds(9)
        );
    }
}
