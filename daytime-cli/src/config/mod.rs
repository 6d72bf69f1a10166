use std::{path::Path, str::FromStr};

use daytime::{Duration, TimeOfDay};
use log::warn;
use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub loglevel: Option<String>,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// The sample values replayed by the `demo` subcommand
#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct DemoConfig {
    pub times: Vec<TimeOfDay>,
    pub durations: Vec<Duration>,
    pub factor: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            // 12:12:12 and 00:00:00
            times: vec![
                TimeOfDay::MIDNIGHT + Duration::from(12 * 3600 + 12 * 60 + 12u64),
                TimeOfDay::MIDNIGHT,
            ],
            // 1:00:00 and 24:00:00
            durations: vec![Duration::from(3600u64), Duration::from(24 * 3600u64)],
            factor: 2,
        }
    }
}

impl Config {
    /// Parse config from file
    pub fn from_file(file: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(file)?;
        Ok(toml::de::from_str(&contents)?)
    }

    /// The log level requested by the config
    ///
    /// This is read before the logger exists, so an unknown level is
    /// returned as an error for the caller to report once logging is up.
    pub fn loglevel(&self) -> Result<Option<log::LevelFilter>, log::ParseLevelError> {
        self.loglevel
            .as_deref()
            .map(log::LevelFilter::from_str)
            .transpose()
    }

    /// Check that the config is reasonable
    pub fn check(&self) -> bool {
        let mut ok = true;

        if self.demo.times.len() < 2 {
            warn!("Fewer than two demo times configured, skipping comparisons between times.");
            ok = false;
        }

        if self.demo.durations.len() < 2 {
            warn!("Fewer than two demo durations configured, skipping comparisons between durations.");
            ok = false;
        }

        ok
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error while reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("config toml parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::de::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.demo.times[0].to_string(), "12:12:12");
        assert_eq!(config.demo.times[1].to_string(), "00:00:00");
        assert_eq!(config.demo.durations[0].to_string(), "1:00:00");
        assert_eq!(config.demo.durations[1].to_string(), "24:00:00");
        assert_eq!(config.demo.factor, 2);
        assert!(config.check());
    }

    #[test]
    fn full_config() {
        let config: Config = toml::de::from_str(
            r#"
            loglevel = "debug"

            [demo]
            times = ["06:30:00", "23:59:59", "00:00:01"]
            durations = ["148:59:59"]
            factor = -3
            "#,
        )
        .unwrap();

        assert_eq!(config.loglevel(), Ok(Some(log::LevelFilter::Debug)));
        assert_eq!(config.demo.times.len(), 3);
        assert_eq!(config.demo.times[1], TimeOfDay::new(23, 59, 59).unwrap());
        assert_eq!(config.demo.durations, vec![Duration::new(148, 59, 59).unwrap()]);
        assert_eq!(config.demo.factor, -3);
        assert!(!config.check());
    }

    #[test]
    fn partial_demo_table() {
        let config: Config = toml::de::from_str("[demo]\nfactor = 5").unwrap();
        assert_eq!(config.demo.factor, 5);
        assert_eq!(config.demo.times, DemoConfig::default().times);
    }

    #[test]
    fn unknown_loglevel_is_reported() {
        let config: Config = toml::de::from_str(r#"loglevel = "chatty""#).unwrap();
        assert!(config.loglevel().is_err());
        assert_eq!(Config::default().loglevel(), Ok(None));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(toml::de::from_str::<Config>("[demo]\ntimes = [\"24:00:00\"]").is_err());
        assert!(toml::de::from_str::<Config>("[demo]\ndurations = [\"00:00:00\"]").is_err());
        assert!(toml::de::from_str::<Config>("unknown-key = 1").is_err());
    }

    #[test]
    fn shipped_default_config() {
        let config: Config =
            toml::de::from_str(include_str!("../../daytime.toml.default")).unwrap();
        assert_eq!(config.loglevel(), Ok(Some(log::LevelFilter::Info)));
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn missing_file() {
        let err = Config::from_file("/nonexistent/daytime.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
