// Test fixtures - reusable test data
// Provides consistent schedules and providers across all test files

#![allow(dead_code)]

use std::cell::RefCell;

use athan_clock::error::ConfigurationError;
use athan_clock::models::hijri::{HijriDate, HijriMonth};
use athan_clock::models::prayer::DailySchedule;
use athan_clock::models::settings::GeoConfig;
use athan_clock::services::hijri::HijriProvider;
use athan_clock::services::schedule::ScheduleProvider;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

pub const KUWAIT: Tz = chrono_tz::Asia::Kuwait;

/// Local wall-clock times of the reference day, Fajr first.
pub const REFERENCE_TIMES: [(u32, u32); 6] = [
    (4, 30),
    (5, 45),
    (11, 50),
    (15, 10),
    (17, 55),
    (19, 20),
];

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 10, 2024, the reference day
    pub fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// Returns Dec 31, 2024 (year boundary)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// `date` at `hour:minute` on the Kuwait wall clock, as UTC.
pub fn kuwait_time(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    KUWAIT
        .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

/// The reference schedule placed on any date, in Kuwait time.
pub fn kuwait_day(date: NaiveDate) -> DailySchedule {
    let instants = REFERENCE_TIMES.map(|(hour, minute)| kuwait_time(date, hour, minute));
    DailySchedule::new(date, KUWAIT, instants).unwrap()
}

pub fn kuwait_geo() -> GeoConfig {
    GeoConfig::default()
}

/// Serves [`kuwait_day`] for every date and records what was asked for.
#[derive(Default)]
pub struct FixedScheduleProvider {
    pub requested: RefCell<Vec<NaiveDate>>,
}

impl ScheduleProvider for FixedScheduleProvider {
    fn compute_schedule(
        &self,
        date: NaiveDate,
        geo: &GeoConfig,
    ) -> Result<DailySchedule, ConfigurationError> {
        geo.validate()?;
        self.requested.borrow_mut().push(date);
        Ok(kuwait_day(date))
    }
}

/// Returns the same Hijri date for every Gregorian date.
pub struct FixedHijri(pub HijriDate);

impl Default for FixedHijri {
    fn default() -> Self {
        Self(HijriDate {
            day: 29,
            month: HijriMonth::Shaban,
            year: 1445,
        })
    }
}

impl HijriProvider for FixedHijri {
    fn hijri_date(&self, _date: NaiveDate) -> Result<HijriDate, ConfigurationError> {
        Ok(self.0)
    }
}
