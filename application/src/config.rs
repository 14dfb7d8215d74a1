//! [`Config`]-related definitions.

use common::{Money, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Service configuration.
    #[serde(default)]
    pub service: Service,

    /// Sample data configuration.
    #[serde(default)]
    pub seed: Seed,

    /// Console configuration.
    #[serde(default)]
    pub console: Console,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Late fee policy of overdue rent collection.
    pub late_fee: LateFee,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            late_fee: LateFee { base, per_day, cap },
        } = value;
        Self {
            late_fee: service::command::collect_with_late_fee::Config {
                base,
                per_day,
                cap,
            },
        }
    }
}

/// Late fee policy configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct LateFee {
    /// Fixed part of a late fee.
    #[default(Money::from_units(50))]
    pub base: Money,

    /// Part of a late fee accrued for each overdue day.
    #[default(Money::from_units(5))]
    pub per_day: Money,

    /// Maximum late fee as a share of the rent.
    #[default(Percent::whole(25))]
    pub cap: Percent,
}

/// Sample data configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Seed {
    /// Indicator whether the sample data is loaded on startup.
    #[default(true)]
    pub enabled: bool,
}

/// Console configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Console {
    /// Prompt printed before reading each command.
    #[default("Enter: ".to_owned())]
    pub prompt: String,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use super::{Config, LogLevel};

    #[test]
    fn defaults_without_file() {
        let config = Config::new("definitely/missing/config").unwrap();

        assert_eq!(config.log.level, LogLevel::Warn);
        assert!(config.seed.enabled);
        assert_eq!(config.console.prompt, "Enter: ");

        let service = service::Config::from(config.service);
        assert_eq!(service.late_fee.base, Money::from_units(50));
        assert_eq!(service.late_fee.per_day, Money::from_units(5));
        assert_eq!(service.late_fee.cap, Percent::whole(25));
    }

    #[test]
    fn maps_log_level() {
        use tracing::Level;

        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }
}
