//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TRUTHLENS_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::classifier::ClassifierConfig;
use crate::constants::{DEFAULT_DECISION_THRESHOLD, DEFAULT_MAX_SEQ_LEN};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TRUTHLENS_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the fine-tuned classifier (`config.json`, `tokenizer.json`, weights).
    ///
    /// When unset the service runs without the custom model.
    pub model_path: Option<PathBuf>,

    /// Explicit weights file. Default: `<model_path>/model.safetensors`.
    pub weights_path: Option<PathBuf>,

    /// Style probability that must be exceeded for a REAL/FAKE label. Default: `0.7`.
    pub decision_threshold: f64,

    /// Token budget for classifier input. Default: `256`.
    pub max_seq_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            weights_path: None,
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TRUTHLENS_PORT";
    const ENV_BIND_ADDR: &'static str = "TRUTHLENS_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "TRUTHLENS_MODEL_PATH";
    const ENV_WEIGHTS_PATH: &'static str = "TRUTHLENS_WEIGHTS_PATH";
    const ENV_DECISION_THRESHOLD: &'static str = "TRUTHLENS_DECISION_THRESHOLD";
    const ENV_MAX_SEQ_LEN: &'static str = "TRUTHLENS_MAX_SEQ_LEN";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let weights_path = Self::parse_optional_path_from_env(Self::ENV_WEIGHTS_PATH);
        let decision_threshold = Self::parse_threshold_from_env(defaults.decision_threshold)?;
        let max_seq_len = Self::parse_usize_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            weights_path,
            decision_threshold,
            max_seq_len,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.weights_path {
            if self.model_path.is_none() {
                return Err(ConfigError::MissingEnvVar {
                    name: Self::ENV_MODEL_PATH,
                });
            }
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.decision_threshold.to_string(),
            });
        }

        if self.max_seq_len == 0 {
            return Err(ConfigError::InvalidMaxSeqLen);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    /// Builds the classifier configuration (no model path means no custom model).
    pub fn classifier_config(&self) -> Option<ClassifierConfig> {
        self.model_path.as_ref().map(|model_path| ClassifierConfig {
            model_path: model_path.clone(),
            weights_path: self.weights_path.clone(),
            max_seq_len: self.max_seq_len,
            decision_threshold: self.decision_threshold,
        })
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

    fn parse_threshold_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_DECISION_THRESHOLD) {
            Ok(value) => {
                let threshold: f64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::InvalidThreshold { value });
                }

                Ok(threshold)
            }
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

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    }
}
