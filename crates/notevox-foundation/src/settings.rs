use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Runtime settings for transcription runs.
///
/// Loaded from `config/default.toml` when present, overridden by
/// `NOTEVOX__`-prefixed environment variables, and finally by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Transcription binary to invoke.
    pub whisper_bin: String,
    /// Model size passed via `--model`.
    pub model: String,
    /// Status line refresh interval, in seconds.
    pub status_tick_secs: u64,
    /// Delay before the status line clears after a successful file.
    pub clear_after_success_secs: u64,
    /// Delay before the status line clears after a failed file.
    pub clear_after_failure_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            whisper_bin: "whisper".to_string(),
            model: "medium".to_string(),
            status_tick_secs: 5,
            clear_after_success_secs: 3,
            clear_after_failure_secs: 5,
        }
    }
}

impl Settings {
    /// Load settings from a specific config file path (for tests).
    pub fn from_path(config_path: impl AsRef<Path>) -> Result<Self, AppError> {
        let builder = Self::builder_with_defaults()
            .add_source(File::from(config_path.as_ref()).required(true))
            .add_source(Self::env_source());
        Self::finish(builder)
    }

    pub fn new() -> Result<Self, AppError> {
        let mut builder = Self::builder_with_defaults();

        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            tracing::info!("Loading configuration from: {}", config_path.display());
            builder = builder.add_source(File::from(config_path).required(true));
        } else {
            tracing::debug!(
                "No configuration file at 'config/default.toml'. Using defaults and environment variables."
            );
        }

        // Environment variables override the file's settings.
        builder = builder.add_source(Self::env_source());
        Self::finish(builder)
    }

    fn builder_with_defaults() -> ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
            .set_default("whisper_bin", "whisper")
            .unwrap()
            .set_default("model", "medium")
            .unwrap()
            .set_default("status_tick_secs", 5_u64)
            .unwrap()
            .set_default("clear_after_success_secs", 3_u64)
            .unwrap()
            .set_default("clear_after_failure_secs", 5_u64)
            .unwrap()
    }

    fn env_source() -> Environment {
        Environment::with_prefix("NOTEVOX")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build config: {}", e)))?;

        let mut settings: Settings = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&mut self) -> Result<(), AppError> {
        if self.whisper_bin.trim().is_empty() {
            return Err(AppError::Config("whisper_bin must not be empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::Config("model must not be empty".to_string()));
        }
        if self.status_tick_secs == 0 {
            tracing::warn!("Invalid status_tick_secs 0. Defaulting to 5.");
            self.status_tick_secs = 5;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn defaults_match_the_tool_contract() {
        let s = Settings::default();
        assert_eq!(s.whisper_bin, "whisper");
        assert_eq!(s.model, "medium");
        assert_eq!(s.status_tick_secs, 5);
        assert_eq!(s.clear_after_success_secs, 3);
        assert_eq!(s.clear_after_failure_secs, 5);
    }

    #[test]
    #[serial]
    fn new_without_file_or_env_yields_defaults() {
        std::env::remove_var("NOTEVOX__MODEL");
        std::env::remove_var("NOTEVOX__WHISPER_BIN");

        let s = Settings::new().unwrap();
        assert_eq!(s.model, "medium");
        assert_eq!(s.whisper_bin, "whisper");
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        std::env::set_var("NOTEVOX__MODEL", "large");
        std::env::set_var("NOTEVOX__STATUS_TICK_SECS", "2");

        let s = Settings::new().unwrap();
        assert_eq!(s.model, "large");
        assert_eq!(s.status_tick_secs, 2);

        std::env::remove_var("NOTEVOX__MODEL");
        std::env::remove_var("NOTEVOX__STATUS_TICK_SECS");
    }

    #[test]
    #[serial]
    fn from_path_reads_toml_and_keeps_defaults_for_the_rest() {
        std::env::remove_var("NOTEVOX__MODEL");
        std::env::remove_var("NOTEVOX__WHISPER_BIN");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "whisper_bin = \"whisper-cpp\"").unwrap();
        writeln!(f, "model = \"small\"").unwrap();

        let s = Settings::from_path(&path).unwrap();
        assert_eq!(s.whisper_bin, "whisper-cpp");
        assert_eq!(s.model, "small");
        assert_eq!(s.status_tick_secs, 5);
    }

    #[test]
    fn validate_rejects_an_empty_binary() {
        let mut s = Settings {
            whisper_bin: "".into(),
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_an_empty_model() {
        let mut s = Settings {
            model: "  ".into(),
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_defaults_a_zero_tick_interval() {
        let mut s = Settings {
            status_tick_secs: 0,
            ..Default::default()
        };
        s.validate().unwrap();
        assert_eq!(s.status_tick_secs, 5);
    }
}
