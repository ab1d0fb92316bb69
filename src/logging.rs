use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Output formats understood by `logging.format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Unknown names fall back to the compact single-line formatter
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
/// Returns `false` if a subscriber was already installed.
pub fn init(settings: &LoggingSettings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = match LogFormat::from_name(&settings.format) {
        LogFormat::Json => subscriber.json().try_init().is_ok(),
        LogFormat::Pretty => subscriber.pretty().try_init().is_ok(),
        LogFormat::Compact => subscriber.compact().try_init().is_ok(),
    };

    if installed {
        tracing::info!("Logging initialized (level: {}, format: {})", settings.level, settings.format);
    }

    installed
}
