//! Error types shared by the schedule, Hijri and refresh services.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::prayer::Prayer;

/// A permanent misconfiguration. None of these can correct themselves while
/// the process runs, so callers propagate them instead of retrying.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("prayer times could not be computed for {date}: {reason}")]
    Computation { date: NaiveDate, reason: String },

    #[error("schedule for {date} is not increasing: {later:?} does not follow {earlier:?}")]
    NonIncreasingSchedule {
        date: NaiveDate,
        earlier: Prayer,
        later: Prayer,
    },

    #[error("no upcoming prayer: Fajr on {0} has already passed")]
    NoUpcomingPrayer(NaiveDate),

    #[error("{0} is outside the supported Hijri calendar range")]
    HijriOutOfRange(NaiveDate),

    #[error("date arithmetic overflowed at {0}")]
    DateOverflow(NaiveDate),
}
