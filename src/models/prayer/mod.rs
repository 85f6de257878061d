// Prayer model
// The six daily prayer boundaries and the selector's result type

mod schedule;

pub use schedule::DailySchedule;

use serde::{Deserialize, Serialize};

/// One of the six daily prayer boundaries, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scanning a day's schedule for the next prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedPrayer {
    /// A prayer of the scanned day has not started yet
    Upcoming(Prayer),
    /// Every prayer of the scanned day has passed; tomorrow's Fajr is next
    None,
}

impl SelectedPrayer {
    pub fn prayer(self) -> Option<Prayer> {
        match self {
            SelectedPrayer::Upcoming(prayer) => Some(prayer),
            SelectedPrayer::None => None,
        }
    }
}
