use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::Prayer;
use crate::error::ConfigurationError;

/// The six prayer instants of one calendar day in the configured time zone.
///
/// Instants are stored in UTC so comparisons against "now" never depend on
/// offsets; [`DailySchedule::local_time`] projects them into the zone.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySchedule {
    date: NaiveDate,
    time_zone: Tz,
    instants: [DateTime<Utc>; 6],
}

impl DailySchedule {
    /// Build a schedule, rejecting instants that are not strictly increasing
    /// in Fajr..Isha order.
    pub fn new(
        date: NaiveDate,
        time_zone: Tz,
        instants: [DateTime<Utc>; 6],
    ) -> Result<Self, ConfigurationError> {
        for pair in Prayer::ALL.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if instants[later.index()] <= instants[earlier.index()] {
                return Err(ConfigurationError::NonIncreasingSchedule {
                    date,
                    earlier,
                    later,
                });
            }
        }

        Ok(Self {
            date,
            time_zone,
            instants,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn time(&self, prayer: Prayer) -> DateTime<Utc> {
        self.instants[prayer.index()]
    }

    pub fn local_time(&self, prayer: Prayer) -> DateTime<Tz> {
        self.time(prayer).with_timezone(&self.time_zone)
    }

    pub fn fajr(&self) -> DateTime<Utc> {
        self.time(Prayer::Fajr)
    }

    /// Prayers paired with their instants, Fajr first.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL.iter().map(move |prayer| (*prayer, self.time(*prayer)))
    }
}
