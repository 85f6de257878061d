// Display model
// Snapshot published by the refresh controller on every tick

use chrono::{DateTime, Duration, Utc};

use super::hijri::HijriDate;
use super::prayer::{DailySchedule, Prayer};

/// The next prayer after rollover has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingPrayer {
    pub prayer: Prayer,
    pub at: DateTime<Utc>,
    /// True when today's prayers have all passed and this is tomorrow's Fajr
    pub is_tomorrow: bool,
}

/// Everything the renderer needs for one frame. Rebuilt wholesale on each
/// tick and handed out behind an `Arc`, so it is never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Today's schedule, listed in the prayer table
    pub schedule: DailySchedule,
    pub next: UpcomingPrayer,
    /// Time left until `next.at`, whole seconds, never negative
    pub remaining: Duration,
    pub hijri: HijriDate,
    pub computed_at: DateTime<Utc>,
}

impl DisplayState {
    pub fn next_prayer_name(&self) -> &'static str {
        self.next.prayer.name()
    }
}
