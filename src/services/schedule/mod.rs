//! Daily prayer schedules.
//!
//! The astronomy lives behind [`ScheduleProvider`]; this module only wires
//! the configured location into it and picks the next prayer from the
//! result.

mod salah_provider;
mod selector;

pub use salah_provider::SalahScheduleProvider;
pub use selector::{resolve_next, select};

use chrono::NaiveDate;

use crate::error::ConfigurationError;
use crate::models::prayer::DailySchedule;
use crate::models::settings::GeoConfig;

/// Computes the six prayer instants of a given date for a location.
///
/// Implementations must be pure: the same date and configuration always
/// give the same schedule, and any date may be requested (the controller
/// asks for tomorrow when today's prayers are over).
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleProvider {
    fn compute_schedule(
        &self,
        date: NaiveDate,
        geo: &GeoConfig,
    ) -> Result<DailySchedule, ConfigurationError>;
}

impl<T: ScheduleProvider + ?Sized> ScheduleProvider for &T {
    fn compute_schedule(
        &self,
        date: NaiveDate,
        geo: &GeoConfig,
    ) -> Result<DailySchedule, ConfigurationError> {
        (**self).compute_schedule(date, geo)
    }
}
