use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::validate::Policy;

/// A list of shapes, read from TOML:
///
/// ```toml
/// strict = true
///
/// [[shapes]]
/// kind = "circle"
/// radius = 5
///
/// [[shapes]]
/// kind = "square"
/// sideLength = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reject shapes with negative or non-finite attributes.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed shape config")]
    Toml(#[from] toml::de::Error),
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        log::info!("loaded {}", path.display());
        Self::from_toml(&text)
    }

    pub fn policy(&self) -> Policy {
        if self.strict {
            Policy::Reject
        } else {
            Policy::PassThrough
        }
    }
}
