//! Application configuration module
//!
//! Type-safe configuration loading using the `config` and `dotenvy` crates.
//! Sources are layered, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. The file named by `LEADER_IMPACT_CONFIG`, if set
//! 3. Environment variables with the `LEADER_IMPACT` prefix, `__` nesting
//!
//! # Example
//!
//! ```no_run
//! use leader_impact::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Noise floor: {}", config.engine.noise_floor);
//! ```

mod engine;
mod error;
mod logging;
mod provider;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use provider::{ProviderConfig, SamplingConfig};

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::impact::KnobSet;

/// Environment variable prefix for every setting
pub const ENV_PREFIX: &str = "LEADER_IMPACT";

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_VAR: &str = "LEADER_IMPACT_CONFIG";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Noise floor and magnitude thresholds
    #[serde(default)]
    pub engine: EngineConfig,

    /// Generative provider timeout and sampling
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Knob overrides by name; missing knobs keep their defaults
    #[serde(default)]
    pub knobs: HashMap<String, f64>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Environment Variable Format
    ///
    /// - `LEADER_IMPACT__ENGINE__NOISE_FLOOR=0.04` -> `engine.noise_floor = 0.04`
    /// - `LEADER_IMPACT__KNOBS__SPEECH_PERSUASIVENESS_FACTOR=0.7` -> `knobs.speech_persuasiveness_factor = 0.7`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value cannot
    /// be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = std::env::var(CONFIG_FILE_VAR).ok();
        Self::load_from(file.as_deref().map(Path::new))
    }

    /// Load configuration from an explicit file plus the environment
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.provider.validate()?;
        if let Some(name) = self.knobs.iter().find(|(_, v)| !v.is_finite()).map(|(k, _)| k) {
            return Err(ValidationError::InvalidKnob { name: name.clone() });
        }
        self.logging.validate()?;
        Ok(())
    }

    /// The knob set with configured overrides applied
    pub fn knob_set(&self) -> KnobSet {
        KnobSet::with_overrides(&self.knobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::impact::KnobGroup;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("LEADER_IMPACT__ENGINE__NOISE_FLOOR");
        env::remove_var("LEADER_IMPACT__PROVIDER__TIMEOUT_MS");
        env::remove_var("LEADER_IMPACT__KNOBS__SPEECH_PERSUASIVENESS_FACTOR");
        env::remove_var("LEADER_IMPACT__LOGGING__FORMAT");
    }

    #[test]
    fn test_defaults_without_sources() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load_from(None).unwrap();

        assert_eq!(config.engine.noise_floor, 0.05);
        assert_eq!(config.provider.timeout_ms, 30_000);
        assert!(config.knobs.is_empty());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LEADER_IMPACT__ENGINE__NOISE_FLOOR", "0.02");
        env::set_var("LEADER_IMPACT__PROVIDER__TIMEOUT_MS", "500");
        env::set_var("LEADER_IMPACT__LOGGING__FORMAT", "json");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.noise_floor, 0.02);
        assert_eq!(config.provider.timeout_ms, 500);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_file_source_with_env_precedence() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[engine]\nnoise_floor = 0.03\n\n[provider]\ntimeout_ms = 1200\n\n[knobs]\nspeech_persuasiveness_factor = 0.9\n"
        )
        .unwrap();
        env::set_var("LEADER_IMPACT__PROVIDER__TIMEOUT_MS", "800");
        let result = AppConfig::load_from(Some(file.path()));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.noise_floor, 0.03);
        assert_eq!(config.provider.timeout_ms, 800);
        assert_eq!(config.knobs.get("speech_persuasiveness_factor"), Some(&0.9));
        assert_eq!(config.knob_set().get("speech_persuasiveness_factor").unwrap().value.value(), 0.9);
    }

    #[test]
    fn test_knob_overrides_feed_composites() {
        let mut config = AppConfig::default();
        for knob in config.knob_set().iter().filter(|k| k.group == KnobGroup::CrisisResponse) {
            config.knobs.insert(knob.name.clone(), 1.0);
        }
        assert_eq!(config.knob_set().composite(KnobGroup::CrisisResponse).value(), 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let mut config = AppConfig::default();
        config.engine.noise_floor = 0.2;
        assert_eq!(config.validate(), Err(ValidationError::InvalidThresholds));

        let mut config = AppConfig::default();
        config.knobs.insert("speech_persuasiveness_factor".to_string(), f64::NAN);
        assert!(matches!(config.validate(), Err(ValidationError::InvalidKnob { .. })));
    }
}
