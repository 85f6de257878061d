// Hijri date service
// Gregorian to Umm al-Qura conversion for the header

use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate as UmmAlQuraDate;

use crate::error::ConfigurationError;
use crate::models::hijri::{HijriDate, HijriMonth};

/// Converts a Gregorian calendar date into the Hijri date shown on screen.
#[cfg_attr(test, mockall::automock)]
pub trait HijriProvider {
    fn hijri_date(&self, date: NaiveDate) -> Result<HijriDate, ConfigurationError>;
}

/// [`HijriProvider`] using the Umm al-Qura tables from `hijri_date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UmmAlQuraProvider {
    offset_days: i32,
}

impl UmmAlQuraProvider {
    /// `offset_days` shifts the Gregorian date before conversion (e.g. -1
    /// where the local month starts a day after Saudi Arabia).
    pub fn new(offset_days: i32) -> Self {
        Self { offset_days }
    }
}

impl HijriProvider for UmmAlQuraProvider {
    fn hijri_date(&self, date: NaiveDate) -> Result<HijriDate, ConfigurationError> {
        let adjusted = date
            .checked_add_signed(Duration::days(self.offset_days as i64))
            .ok_or(ConfigurationError::DateOverflow(date))?;

        let converted = UmmAlQuraDate::from_gr(
            adjusted.year() as usize,
            adjusted.month() as usize,
            adjusted.day() as usize,
        )
        .map_err(|_| ConfigurationError::HijriOutOfRange(adjusted))?;

        let month = HijriMonth::from_number(converted.month() as u32)
            .ok_or(ConfigurationError::HijriOutOfRange(adjusted))?;

        Ok(HijriDate {
            day: converted.day() as u32,
            month,
            year: converted.year() as u32,
        })
    }
}
