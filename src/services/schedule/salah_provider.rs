use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::NaiveDate;
use salah::prelude::{
    Configuration, Coordinates, Madhab, Method, Prayer as SalahPrayer, PrayerSchedule,
};

use super::ScheduleProvider;
use crate::error::ConfigurationError;
use crate::models::prayer::{DailySchedule, Prayer};
use crate::models::settings::{CalculationMethod, GeoConfig, Jurisprudence};

/// [`ScheduleProvider`] backed by the `salah` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalahScheduleProvider;

impl SalahScheduleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ScheduleProvider for SalahScheduleProvider {
    fn compute_schedule(
        &self,
        date: NaiveDate,
        geo: &GeoConfig,
    ) -> Result<DailySchedule, ConfigurationError> {
        let time_zone = geo.validate()?;
        let parameters = Configuration::with(
            method_for(geo.calculation_method),
            madhab_for(geo.jurisprudence),
        );

        let coordinates = Coordinates::new(geo.latitude, geo.longitude);

        // salah unwraps internally when the sun never reaches a twilight
        // angle (high latitudes in summer)
        let computed = panic::catch_unwind(AssertUnwindSafe(|| {
            PrayerSchedule::new()
                .on(date)
                .for_location(coordinates)
                .with_configuration(parameters)
                .calculate()
                .map(|times| Prayer::ALL.map(|prayer| times.time(salah_prayer(prayer))))
        }));

        let instants = match computed {
            Ok(Ok(instants)) => instants,
            Ok(Err(reason)) => return Err(ConfigurationError::Computation { date, reason }),
            Err(payload) => {
                let reason = panic_reason(payload.as_ref());
                log::error!("Prayer time computation for {} aborted: {}", date, reason);
                return Err(ConfigurationError::Computation { date, reason });
            }
        };
        DailySchedule::new(date, time_zone, instants)
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown error".to_string());
    format!("sun does not reach the twilight angle at this location ({detail})")
}

fn method_for(method: CalculationMethod) -> Method {
    match method {
        CalculationMethod::MuslimWorldLeague => Method::MuslimWorldLeague,
        CalculationMethod::Egyptian => Method::Egyptian,
        CalculationMethod::Karachi => Method::Karachi,
        CalculationMethod::UmmAlQura => Method::UmmAlQura,
        CalculationMethod::Dubai => Method::Dubai,
        CalculationMethod::MoonsightingCommittee => Method::MoonsightingCommittee,
        CalculationMethod::NorthAmerica => Method::NorthAmerica,
        CalculationMethod::Kuwait => Method::Kuwait,
        CalculationMethod::Qatar => Method::Qatar,
        CalculationMethod::Singapore => Method::Singapore,
        CalculationMethod::Tehran => Method::Tehran,
        CalculationMethod::Turkey => Method::Turkey,
    }
}

fn madhab_for(jurisprudence: Jurisprudence) -> Madhab {
    match jurisprudence {
        Jurisprudence::Shafi => Madhab::Shafi,
        Jurisprudence::Hanafi => Madhab::Hanafi,
    }
}

fn salah_prayer(prayer: Prayer) -> SalahPrayer {
    match prayer {
        Prayer::Fajr => SalahPrayer::Fajr,
        Prayer::Sunrise => SalahPrayer::Sunrise,
        Prayer::Dhuhr => SalahPrayer::Dhuhr,
        Prayer::Asr => SalahPrayer::Asr,
        Prayer::Maghrib => SalahPrayer::Maghrib,
        Prayer::Isha => SalahPrayer::Isha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::GeoConfig;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_kuwait_schedule_is_increasing_and_local() {
        let geo = GeoConfig::default();
        let schedule = SalahScheduleProvider::new()
            .compute_schedule(date(), &geo)
            .unwrap();

        assert_eq!(schedule.date(), date());
        assert_eq!(schedule.time_zone(), chrono_tz::Asia::Kuwait);
        let times: Vec<_> = schedule.iter().map(|(_, at)| at).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_coordinates_fail_before_computing() {
        let geo = GeoConfig {
            latitude: -123.0,
            ..GeoConfig::default()
        };
        let err = SalahScheduleProvider::new()
            .compute_schedule(date(), &geo)
            .unwrap_err();

        assert_eq!(err, ConfigurationError::InvalidLatitude(-123.0));
    }

    #[test]
    fn test_unreachable_twilight_is_a_computation_error() {
        // London in June: the sun stays above -18 degrees all night
        let geo = GeoConfig {
            latitude: 51.5074,
            longitude: -0.1278,
            time_zone: "Europe/London".to_string(),
            ..GeoConfig::default()
        };

        let result = std::panic::catch_unwind(|| {
            SalahScheduleProvider::new().compute_schedule(date(), &geo)
        });

        let err = result.expect("computation must not panic").unwrap_err();
        assert!(matches!(err, ConfigurationError::Computation { date: d, .. } if d == date()));
    }

    #[test]
    fn test_hanafi_asr_is_later() {
        let shafi = GeoConfig::default();
        let hanafi = GeoConfig {
            jurisprudence: Jurisprudence::Hanafi,
            ..GeoConfig::default()
        };
        let provider = SalahScheduleProvider::new();

        let shafi_asr = provider.compute_schedule(date(), &shafi).unwrap().time(Prayer::Asr);
        let hanafi_asr = provider.compute_schedule(date(), &hanafi).unwrap().time(Prayer::Asr);
        assert!(hanafi_asr > shafi_asr);
    }
}
