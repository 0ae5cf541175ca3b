//! Optional `patterns.toml` settings shared by the sample binaries.
//!
//! Every field has a default, so a missing file, a missing section or a
//! missing key all fall back to the built-in narration settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::decorator::Layer;
use crate::proxy::{is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};
use crate::PatternError;

pub const CONFIG_FILE: &str = "patterns.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub output: OutputConfig,
    pub proxy: ProxyConfig,
    pub decorator: DecoratorConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// strftime pattern used when the proxy logs an access.
    pub timestamp_format: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Layer tags, innermost first.
    pub layers: Vec<String>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            layers: vec!["A".to_string(), "B".to_string()],
        }
    }
}

impl DecoratorConfig {
    pub fn parsed_layers(&self) -> Result<Vec<Layer>, PatternError> {
        self.layers.iter().map(|tag| tag.parse()).collect()
    }

    /// Configured layers, or the default chain when a tag is unknown.
    pub fn layers_or_default(&self) -> Vec<Layer> {
        self.parsed_layers().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default decorator layers");
            vec![Layer::A, Layer::B]
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            currency: "¥".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parses TOML settings. An unrenderable `proxy.timestamp_format`
    /// is replaced by the default with a warning.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|err| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: err.to_string(),
        })?;
        if !is_valid_timestamp_format(&config.proxy.timestamp_format) {
            tracing::warn!(
                format = %config.proxy.timestamp_format,
                "invalid proxy.timestamp_format, using default"
            );
            config.proxy = ProxyConfig::default();
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Loads `patterns.toml` from `dir` when it exists, defaults otherwise.
    pub fn discover_in(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_in(Path::new("."))
    }

    /// Like [`discover_in`](Self::discover_in), but a broken file only
    /// costs a warning: the demos always run.
    pub fn discover_in_or_default(dir: &Path) -> Self {
        Self::discover_in(dir).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring config, using defaults");
            Self::default()
        })
    }

    pub fn discover_or_default() -> Self {
        Self::discover_in_or_default(Path::new("."))
    }
}
