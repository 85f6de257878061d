use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ConfigurationError;
use crate::models::display::UpcomingPrayer;
use crate::models::prayer::{DailySchedule, Prayer, SelectedPrayer};

/// First prayer of `schedule` at or after `now`.
///
/// The boundary is inclusive: at the exact instant of a prayer that prayer
/// is still "next", with nothing remaining.
pub fn select(schedule: &DailySchedule, now: DateTime<Utc>) -> SelectedPrayer {
    schedule
        .iter()
        .find(|(_, at)| *at >= now)
        .map_or(SelectedPrayer::None, |(prayer, _)| SelectedPrayer::Upcoming(prayer))
}

/// Resolve the next prayer, falling through to tomorrow's Fajr once Isha
/// has passed. `tomorrow` is asked for the schedule of the following date
/// only in that case.
pub fn resolve_next<F>(
    today: &DailySchedule,
    now: DateTime<Utc>,
    mut tomorrow: F,
) -> Result<UpcomingPrayer, ConfigurationError>
where
    F: FnMut(NaiveDate) -> Result<DailySchedule, ConfigurationError>,
{
    if let Some(prayer) = select(today, now).prayer() {
        return Ok(UpcomingPrayer {
            prayer,
            at: today.time(prayer),
            is_tomorrow: false,
        });
    }

    let next_date = today
        .date()
        .succ_opt()
        .ok_or(ConfigurationError::DateOverflow(today.date()))?;
    let next_day = tomorrow(next_date)?;
    let fajr = next_day.fajr();
    if fajr < now {
        return Err(ConfigurationError::NoUpcomingPrayer(next_date));
    }

    Ok(UpcomingPrayer {
        prayer: Prayer::Fajr,
        at: fajr,
        is_tomorrow: true,
    })
}
