// Athan Clock
// Main entry point

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;

use athan_clock::services::hijri::UmmAlQuraProvider;
use athan_clock::services::refresh::{event_channel, RefreshController};
use athan_clock::services::schedule::SalahScheduleProvider;
use athan_clock::services::settings::SettingsService;
use athan_clock::ui_egui::{AthanApp, AthanTheme, FatalErrorSlot};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Athan Clock");

    let settings_service = SettingsService::from_environment();
    let config = settings_service.get()?;
    log::info!(
        "Loaded settings from {}: ({}, {}) {:?}/{:?} in {}",
        settings_service.path().display(),
        config.geo.latitude,
        config.geo.longitude,
        config.geo.calculation_method,
        config.geo.jurisprudence,
        config.geo.time_zone
    );

    // Fail before opening a window if the location or method is unusable
    let controller = RefreshController::start(
        SalahScheduleProvider::new(),
        UmmAlQuraProvider::new(config.hijri_offset_days),
        config.geo.clone(),
        Utc::now(),
    )
    .context("Invalid prayer time configuration")?;

    let window = &config.window;
    let size = egui::vec2(window.width, window.height);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_max_inner_size(size)
            .with_resizable(false)
            .with_decorations(window.decorated),
        ..Default::default()
    };

    let fatal_error: FatalErrorSlot = Arc::default();
    let app_fatal_error = Arc::clone(&fatal_error);

    eframe::run_native(
        &window.title,
        options,
        Box::new(move |cc| {
            let app = AthanApp::new(
                cc,
                controller,
                event_channel(),
                AthanTheme::default(),
                app_fatal_error,
            )?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("Window failed: {err}"))?;

    let fatal = fatal_error
        .lock()
        .map_err(|_| anyhow!("Fatal error slot poisoned"))?
        .take();
    if let Some(err) = fatal {
        return Err(anyhow::Error::new(err).context("Prayer schedule refresh failed"));
    }

    log::info!("Athan Clock closed");
    Ok(())
}
