use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::PriorityWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_airport_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_airport_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_airport_limit() -> usize { crate::core::ranker::DEFAULT_AIRPORT_LIMIT }
fn default_max_limit() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub priorities: PrioritiesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrioritiesConfig {
    #[serde(default = "default_cost_priority")]
    pub cost: u8,
    #[serde(default = "default_time_priority")]
    pub time: u8,
    #[serde(default = "default_safety_priority")]
    pub safety: u8,
    #[serde(default = "default_comfort_priority")]
    pub comfort: u8,
    #[serde(default = "default_layover_priority")]
    pub layover_sensitivity: u8,
}

impl Default for PrioritiesConfig {
    fn default() -> Self {
        Self {
            cost: default_cost_priority(),
            time: default_time_priority(),
            safety: default_safety_priority(),
            comfort: default_comfort_priority(),
            layover_sensitivity: default_layover_priority(),
        }
    }
}

impl From<&PrioritiesConfig> for PriorityWeights {
    fn from(config: &PrioritiesConfig) -> Self {
        // Values above 100 are capped rather than rejected
        Self {
            cost: config.cost.min(100),
            time: config.time.min(100),
            safety: config.safety.min(100),
            comfort: config.comfort.min(100),
            layover_sensitivity: config.layover_sensitivity.min(100),
        }
    }
}

fn default_cost_priority() -> u8 { 70 }
fn default_time_priority() -> u8 { 60 }
fn default_safety_priority() -> u8 { 90 }
fn default_comfort_priority() -> u8 { 50 }
fn default_layover_priority() -> u8 { 40 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKYPLAN__)
    /// 5. LOG_LEVEL / LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenv::dotenv().ok();

        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKYPLAN__RANKING__DEFAULT_LIMIT -> ranking.default_limit
            .add_source(env_source())
            .build()?;

        settings = apply_logging_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Default priority weights for searches that do not supply their own
    pub fn priority_weights(&self) -> PriorityWeights {
        PriorityWeights::from(&self.scoring.priorities)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SKYPLAN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour the plain LOG_LEVEL and LOG_FORMAT variables on top of the config
fn apply_logging_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
