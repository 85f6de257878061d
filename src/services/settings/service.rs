use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "ATHAN_CLOCK_CONFIG";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointed at `$ATHAN_CLOCK_CONFIG`, or `config.toml` in the
    /// platform config directory.
    pub fn from_environment() -> Self {
        Self::new(resolve_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration. A missing file means defaults.
    pub fn get(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!(
                "No config at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config in {}", self.path.display()))?;
        Ok(config)
    }

    /// Write `config` as TOML, creating the parent directory if needed.
    pub fn update(&self, config: &AppConfig) -> Result<()> {
        config
            .geo
            .validate()
            .context("Invalid settings")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&AppConfig::default())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Some(dirs) = ProjectDirs::from("com", "AthanClock", "AthanClock") {
        dirs.config_dir().join("config.toml")
    } else {
        log::warn!("Unable to resolve project directory; using current dir for config");
        PathBuf::from("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{CalculationMethod, Jurisprudence};
    use pretty_assertions::assert_eq;

    fn setup_service() -> (tempfile::TempDir, SettingsService) {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("config.toml"));
        (dir, service)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, service) = setup_service();
        assert_eq!(service.get().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_service();

        let mut config = service.get().unwrap();
        config.geo.latitude = 21.4225;
        config.geo.longitude = 39.8262;
        config.geo.calculation_method = CalculationMethod::UmmAlQura;
        config.geo.jurisprudence = Jurisprudence::Hanafi;
        config.geo.time_zone = "Asia/Riyadh".to_string();
        config.hijri_offset_days = 1;

        service.update(&config).unwrap();

        assert_eq!(service.get().unwrap(), config);
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup_service();

        let mut config = service.get().unwrap();
        config.geo.time_zone = "invalid".to_string();

        assert!(service.update(&config).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_service();

        let mut config = AppConfig::default();
        config.window.title = "Prayer Times".to_string();
        service.update(&config).unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let (dir, service) = setup_service();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(service.path(), "geo = [not toml").unwrap();

        let err = service.get().unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
