//! Runtime configuration of the map viewer server.
//!
//! The server takes no command line flags. Input file locations and the bind
//! address are fixed; the only knob is the `MAP_VIEWER_DEBUG` toggle used during
//! local development, which raises the default log level to `debug`.

use std::path::PathBuf;

/// Environment variable enabling debug mode.
pub const DEBUG_ENV: &str = "MAP_VIEWER_DEBUG";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8050;
const DEFAULT_DATA_PATH: &str = "data/data.csv";
const DEFAULT_METADATA_PATH: &str = "data/metadata.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Semicolon-delimited point table.
    pub data_path: PathBuf,
    /// JSON array of `{ map_id, description }` entries.
    pub metadata_path: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Default configuration with the debug toggle read from `MAP_VIEWER_DEBUG`.
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self {
            debug,
            ..Self::default()
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_common_truthy_spellings() {
        for value in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(parse_flag(value), "{value} should enable debug");
        }
        for value in ["", "0", "false", "off", "debug"] {
            assert!(!parse_flag(value), "{value} should not enable debug");
        }
    }

    #[test]
    fn defaults_point_at_data_directory() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data/data.csv"));
        assert_eq!(config.metadata_path, PathBuf::from("data/metadata.json"));
        assert_eq!(config.url(), "http://127.0.0.1:8050");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn debug_raises_log_level() {
        let config = AppConfig {
            debug: true,
            ..AppConfig::default()
        };
        assert_eq!(config.log_filter(), "debug");
    }
}
