/// Run configuration.
///
/// Deployment-site tuning lives in an optional TOML file: the plausible
/// height range differs per site (the defaults suit Singapore waters),
/// and batch runs may want a log file. Every field has a default, so a
/// missing config file just means "run with defaults".

use serde::Deserialize;
use std::path::Path;

use crate::logging::LogLevel;
use crate::model::{PlausibleRange, TideError};

/// Location label printed on rendered pages when none is given on the
/// command line.
pub const DEFAULT_LOCATION: &str = "TANJONG PAGAR";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Free-text location label for rendered pages.
    pub location: String,
    /// Lower bound of the plausible tide height range, meters.
    pub plausible_min_m: f64,
    /// Upper bound of the plausible tide height range, meters.
    pub plausible_max_m: f64,
    /// Optional log file appended to alongside console output.
    pub log_file: Option<String>,
    /// Minimum console log level: debug, info, warn, or error.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            plausible_min_m: -0.5,
            plausible_max_m: 4.0,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config file at `path`, or returns defaults when `path`
    /// is `None`. A file that exists but does not parse is an error —
    /// silently ignoring a typo'd config would mask bad plausible bounds.
    pub fn load(path: Option<&Path>) -> Result<Config, TideError> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Config::default()),
        };

        let text = std::fs::read_to_string(path).map_err(|e| TideError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Config = toml::from_str(&text).map_err(|e| TideError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), TideError> {
        if self.plausible_min_m >= self.plausible_max_m {
            return Err(TideError::Config {
                message: format!(
                    "plausible_min_m ({}) must be below plausible_max_m ({})",
                    self.plausible_min_m, self.plausible_max_m
                ),
            });
        }
        if LogLevel::parse(&self.log_level).is_none() {
            return Err(TideError::Config {
                message: format!("unknown log_level '{}'", self.log_level),
            });
        }
        Ok(())
    }

    pub fn plausible_range(&self) -> PlausibleRange {
        PlausibleRange {
            min_m: self.plausible_min_m,
            max_m: self.plausible_max_m,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        // validate() guarantees the name parses.
        LogLevel::parse(&self.log_level).unwrap_or(LogLevel::Info)
    }
}
