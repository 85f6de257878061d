use chrono::NaiveDate;

use crate::error::ConfigurationError;
use crate::models::hijri::HijriDate;
use crate::models::prayer::DailySchedule;
use crate::models::settings::GeoConfig;
use crate::services::hijri::HijriProvider;
use crate::services::schedule::ScheduleProvider;

/// Schedules keyed by date, computed on first use. Holds at most today and
/// tomorrow; older days are dropped when the local date moves on.
pub(super) struct ScheduleCache<P> {
    provider: P,
    geo: GeoConfig,
    days: Vec<DailySchedule>,
}

impl<P: ScheduleProvider> ScheduleCache<P> {
    pub(super) fn new(provider: P, geo: GeoConfig) -> Self {
        Self {
            provider,
            geo,
            days: Vec::with_capacity(2),
        }
    }

    pub(super) fn get(&mut self, date: NaiveDate) -> Result<DailySchedule, ConfigurationError> {
        if let Some(day) = self.days.iter().find(|day| day.date() == date) {
            return Ok(day.clone());
        }

        let day = self.provider.compute_schedule(date, &self.geo)?;
        log::debug!("Computed prayer schedule for {}", date);
        self.days.push(day.clone());
        Ok(day)
    }

    /// Forget every day before `today`.
    pub(super) fn discard_before(&mut self, today: NaiveDate) {
        let before = self.days.len();
        self.days.retain(|day| day.date() >= today);
        if self.days.len() != before {
            log::info!("Day rolled over to {}, discarded stale schedules", today);
        }
    }

    #[cfg(test)]
    pub(super) fn cached_dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(DailySchedule::date).collect()
    }
}

/// Hijri date refreshed at most once per local day.
pub(super) struct HijriCache<H> {
    provider: H,
    current: Option<(NaiveDate, HijriDate)>,
}

impl<H: HijriProvider> HijriCache<H> {
    pub(super) fn new(provider: H) -> Self {
        Self {
            provider,
            current: None,
        }
    }

    pub(super) fn get(&mut self, date: NaiveDate) -> Result<HijriDate, ConfigurationError> {
        match self.current {
            Some((cached_for, hijri)) if cached_for == date => Ok(hijri),
            _ => {
                let hijri = self.provider.hijri_date(date)?;
                self.current = Some((date, hijri));
                Ok(hijri)
            }
        }
    }
}
