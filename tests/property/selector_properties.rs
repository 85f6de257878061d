// Property-based tests for next-prayer selection
// Random schedules and instants check the selector and countdown invariants

use proptest::prelude::*;

#[path = "../fixtures/mod.rs"]
mod fixtures;

use athan_clock::models::prayer::{DailySchedule, Prayer, SelectedPrayer};
use athan_clock::services::display::{format_countdown, format_display};
use athan_clock::services::refresh::RefreshController;
use athan_clock::services::schedule::{resolve_next, select};
use chrono::{DateTime, Duration, Utc};
use fixtures::{dates, kuwait_geo, kuwait_time, FixedHijri, FixedScheduleProvider};

/// Six strictly increasing instants within the reference day, built from
/// positive gaps in minutes after midnight.
fn schedule_strategy() -> impl Strategy<Value = DailySchedule> {
    (0i64..300, prop::array::uniform5(1i64..200)).prop_map(|(first, gaps)| {
        let midnight = kuwait_time(dates::reference_day(), 0, 0);
        let mut offsets = [first; 6];
        for i in 1..6 {
            offsets[i] = offsets[i - 1] + gaps[i - 1];
        }
        let instants = offsets.map(|minutes| midnight + Duration::minutes(minutes));
        DailySchedule::new(dates::reference_day(), fixtures::KUWAIT, instants).unwrap()
    })
}

fn instant(schedule: &DailySchedule, prayer: Prayer) -> DateTime<Utc> {
    schedule.time(prayer)
}

proptest! {
    /// Property: anything before Fajr selects Fajr
    #[test]
    fn prop_before_fajr_selects_fajr(schedule in schedule_strategy(), before in 1i64..10_000) {
        let now = instant(&schedule, Prayer::Fajr) - Duration::seconds(before);
        prop_assert_eq!(select(&schedule, now), SelectedPrayer::Upcoming(Prayer::Fajr));
    }

    /// Property: anything strictly between two prayers selects the later one
    #[test]
    fn prop_between_prayers_selects_the_later(
        schedule in schedule_strategy(),
        index in 0usize..5,
        fraction in 0.01f64..0.99,
    ) {
        let earlier = instant(&schedule, Prayer::ALL[index]);
        let later = instant(&schedule, Prayer::ALL[index + 1]);
        let span = (later - earlier).num_milliseconds() as f64;
        let now = earlier + Duration::milliseconds((span * fraction) as i64).max(Duration::milliseconds(1));
        prop_assume!(now < later);

        prop_assert_eq!(select(&schedule, now), SelectedPrayer::Upcoming(Prayer::ALL[index + 1]));
    }

    /// Property: at a prayer's exact instant that prayer is still next
    #[test]
    fn prop_boundary_is_inclusive(schedule in schedule_strategy(), index in 0usize..6) {
        let prayer = Prayer::ALL[index];
        prop_assert_eq!(select(&schedule, instant(&schedule, prayer)), SelectedPrayer::Upcoming(prayer));
    }

    /// Property: after Isha nothing is selected and rollover lands on a future Fajr
    #[test]
    fn prop_after_isha_rolls_over(schedule in schedule_strategy(), after in 1i64..20_000) {
        let now = instant(&schedule, Prayer::Isha) + Duration::seconds(after);
        prop_assert_eq!(select(&schedule, now), SelectedPrayer::None);

        let next = resolve_next(&schedule, now, |date| Ok(fixtures::kuwait_day(date))).unwrap();
        prop_assert!(next.is_tomorrow);
        prop_assert_eq!(next.prayer, Prayer::Fajr);
        prop_assert!(next.at >= now);
    }

    /// Property: the controller never publishes a negative countdown
    #[test]
    fn prop_remaining_is_never_negative(minutes in 0i64..(48 * 60), seconds in 0i64..60) {
        let now = kuwait_time(dates::reference_day(), 0, 0)
            + Duration::minutes(minutes)
            + Duration::seconds(seconds);
        let controller = RefreshController::start(
            FixedScheduleProvider::default(),
            FixedHijri::default(),
            kuwait_geo(),
            now,
        )
        .unwrap();

        let state = controller.snapshot();
        prop_assert!(state.remaining >= Duration::zero());
        prop_assert!(!format_countdown(state.remaining).starts_with('-'));
        prop_assert_eq!(format_display(&state), format_display(&state));
    }
}
