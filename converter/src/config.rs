//! Runtime configuration.
//!
//! Options are read from the process environment, after loading an
//! optional `.env` file from the working directory.
//!
//! | Variable            | Values                      | Default |
//! |---------------------|-----------------------------|---------|
//! | `CSV2INI_LOG`       | `quiet`, `info`, `debug`    | `quiet` |
//! | `CSV2INI_KEY_STYLE` | `full`, `legacy`            | `full`  |
//! | `CSV2INI_DELIMITER` | one ASCII character         | `,`     |

use std::env;

use crate::error::ConfigError;
use crate::logs::LogLevel;
use crate::models::KeyStyle;

pub const LOG_VAR: &str = "CSV2INI_LOG";
pub const KEY_STYLE_VAR: &str = "CSV2INI_KEY_STYLE";
pub const DELIMITER_VAR: &str = "CSV2INI_DELIMITER";

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Most verbose level written to stderr, `None` for quiet
    pub log_level: Option<LogLevel>,

    /// How REGION/ENV/LOCATION are normalized
    pub key_style: KeyStyle,

    /// CSV field delimiter
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            key_style: KeyStyle::Full,
            delimiter: b',',
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_VAR) {
            config.log_level = parse_log_level(&value)?;
        }
        if let Some(value) = lookup(KEY_STYLE_VAR) {
            config.key_style = parse_key_style(&value)?;
        }
        if let Some(value) = lookup(DELIMITER_VAR) {
            config.delimiter = parse_delimiter(&value)?;
        }

        Ok(config)
    }
}

fn parse_log_level(value: &str) -> Result<Option<LogLevel>, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "" | "quiet" | "off" => Ok(None),
        "info" => Ok(Some(LogLevel::Info)),
        "debug" => Ok(Some(LogLevel::Debug)),
        _ => Err(ConfigError::InvalidValue {
            var: LOG_VAR,
            value: value.to_string(),
            expected: "quiet, info or debug",
        }),
    }
}

fn parse_key_style(value: &str) -> Result<KeyStyle, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "" | "full" => Ok(KeyStyle::Full),
        "legacy" => Ok(KeyStyle::Legacy),
        _ => Err(ConfigError::InvalidValue {
            var: KEY_STYLE_VAR,
            value: value.to_string(),
            expected: "full or legacy",
        }),
    }
}

fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    // "\t" is accepted as an escape for tab
    if value == "\\t" {
        return Ok(b'\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(ConfigError::InvalidValue {
            var: DELIMITER_VAR,
            value: value.to_string(),
            expected: "a single ASCII character",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.key_style, KeyStyle::Full);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_lookup(lookup(&[
            (LOG_VAR, "Debug"),
            (KEY_STYLE_VAR, "legacy"),
            (DELIMITER_VAR, ";"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, Some(LogLevel::Debug));
        assert_eq!(config.key_style, KeyStyle::Legacy);
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn test_tab_delimiter() {
        let config = Config::from_lookup(lookup(&[(DELIMITER_VAR, "\\t")])).unwrap();
        assert_eq!(config.delimiter, b'\t');
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[(DELIMITER_VAR, ";;")])).unwrap_err();
        assert!(err.to_string().contains(DELIMITER_VAR));

        let err = Config::from_lookup(lookup(&[(KEY_STYLE_VAR, "loose")])).unwrap_err();
        assert!(err.to_string().contains("loose"));

        assert!(Config::from_lookup(lookup(&[(LOG_VAR, "verbose")])).is_err());
    }
}
