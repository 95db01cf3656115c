//! Environment-backed process configuration plus the scoring tables.
//!
//! Process settings have defaults; override with `WORDHINT_*` environment
//! variables. Scoring tables default to the Korean reference configuration
//! and may be replaced by a JSON file (`WORDHINT_SCORING_CONFIG`).

mod defaults;
pub mod error;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use scoring::ScoringConfig;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_TARGET_LATENCY_MS;

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Sentence-transformer directory. Stub encoder when unset.
    pub encoder_path: Option<PathBuf>,

    /// NLI model directory. Stub classifier when unset.
    pub nli_path: Option<PathBuf>,

    /// JSON file replacing the reference scoring tables.
    pub scoring_config_path: Option<PathBuf>,

    /// Run one throwaway evaluation at startup. Default: `true`.
    pub warmup: bool,

    /// Informational latency target. Default: `150`.
    pub target_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
            encoder_path: None,
            nli_path: None,
            scoring_config_path: None,
            warmup: true,
            target_latency_ms: DEFAULT_TARGET_LATENCY_MS,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "WORDHINT_PORT";
    const ENV_BIND_ADDR: &'static str = "WORDHINT_BIND_ADDR";
    const ENV_ENCODER_PATH: &'static str = "WORDHINT_ENCODER_PATH";
    const ENV_NLI_PATH: &'static str = "WORDHINT_NLI_PATH";
    const ENV_SCORING_CONFIG: &'static str = "WORDHINT_SCORING_CONFIG";
    const ENV_WARMUP: &'static str = "WORDHINT_WARMUP";
    const ENV_TARGET_LATENCY_MS: &'static str = "WORDHINT_TARGET_LATENCY_MS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let encoder_path = Self::parse_optional_path_from_env(Self::ENV_ENCODER_PATH);
        let nli_path = Self::parse_optional_path_from_env(Self::ENV_NLI_PATH);
        let scoring_config_path = Self::parse_optional_path_from_env(Self::ENV_SCORING_CONFIG);
        let warmup = Self::parse_bool_from_env(Self::ENV_WARMUP, defaults.warmup)?;
        let target_latency_ms =
            Self::parse_u64_from_env(Self::ENV_TARGET_LATENCY_MS, defaults.target_latency_ms);

        Ok(Self {
            port,
            bind_addr,
            encoder_path,
            nli_path,
            scoring_config_path,
            warmup,
            target_latency_ms,
        })
    }

    /// Validates configured paths (model paths are directories, the scoring config a file).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.encoder_path, &self.nli_path].into_iter().flatten() {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.scoring_config_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Loads and validates the scoring tables (file if configured, else the reference set).
    pub fn load_scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        let scoring = match self.scoring_config_path {
            Some(ref path) => ScoringConfig::from_json_file(path)?,
            None => ScoringConfig::default(),
        };
        scoring.validate()?;
        Ok(scoring)
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
