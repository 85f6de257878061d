//! Presentation strings for a [`DisplayState`].
//!
//! Everything here is a pure projection: the same state always yields the
//! same strings, so the renderer can call it on every frame.

use chrono::{DateTime, Duration, TimeZone};

use crate::models::display::DisplayState;
use crate::models::prayer::Prayer;

/// One line of the prayer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerRow {
    pub prayer: Prayer,
    pub name: &'static str,
    pub time: String,
    /// Highlight flag; false for every row when the next prayer is tomorrow's
    pub is_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDisplay {
    pub hijri_day: String,
    pub hijri_month: &'static str,
    pub hijri_year: String,
    pub rows: Vec<PrayerRow>,
    pub next_label: String,
    pub countdown: String,
}

pub fn format_display(state: &DisplayState) -> FormattedDisplay {
    let schedule = &state.schedule;
    let rows = schedule
        .iter()
        .map(|(prayer, _)| PrayerRow {
            prayer,
            name: prayer.name(),
            time: format_clock(&schedule.local_time(prayer)),
            is_next: !state.next.is_tomorrow && state.next.prayer == prayer,
        })
        .collect();

    let next_label = if state.next.is_tomorrow {
        format!("{} (tomorrow)", state.next_prayer_name())
    } else {
        state.next_prayer_name().to_string()
    };

    FormattedDisplay {
        hijri_day: format!("{:02}", state.hijri.day),
        hijri_month: state.hijri.month.name(),
        hijri_year: format!("{:04}h", state.hijri.year),
        rows,
        next_label,
        countdown: format_countdown(state.remaining),
    }
}

/// 12-hour wall clock, e.g. "07:20 PM".
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%I:%M %p").to_string()
}

/// `HH:MM:SS` with uncapped hours. Negative durations show as zero.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
