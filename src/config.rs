//! Named curves loaded from JSON.
//!
//! Applications that let users tune their animations can keep the curves in
//! a file instead of in code.  Each entry under `"curves"` is any form
//! [`CurveSpec`] accepts.
//!
//! # Example
//!
//! ```json
//! {
//!   "curves": {
//!     "snappy": "cubic-bezier(0.2, 0, 0, 1)",
//!     "soft": "ease-out",
//!     "bounce": [0.68, -0.55, 0.265, 1.55],
//!     "lazy": { "x1": 0.6, "y1": 0.0, "x2": 0.9, "y2": 0.4 }
//!   }
//! }
//! ```

use crate::curve::CurveSpec;
use crate::easing::{CubicBezier, EasingError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid.  Unknown
/// top-level keys are ignored so the file can grow new sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Curve definitions by name.
    #[serde(default)]
    pub curves: BTreeMap<String, CurveSpec>,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("failed to parse {}: {}", path.display(), e)))?;
        debug!("loaded {} curve(s) from {}", config.curves.len(), path.display());
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the easing function registered under `name`.
    pub fn curve(&self, name: &str) -> Result<CubicBezier, ConfigError> {
        let spec = self
            .curves
            .get(name)
            .ok_or_else(|| ConfigError::UnknownCurve(name.to_string()))?;
        spec.build().map_err(|source| ConfigError::Invalid {
            name: name.to_string(),
            source,
        })
    }

    /// Build every configured curve, failing on the first invalid one.
    pub fn build_all(&self) -> Result<BTreeMap<String, CubicBezier>, ConfigError> {
        self.curves
            .keys()
            .map(|name| Ok((name.clone(), self.curve(name)?)))
            .collect()
    }
}

/// Error from loading a configuration or building one of its curves.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("no curve named {0:?}")]
    UnknownCurve(String),
    #[error("curve {name:?}: {source}")]
    Invalid {
        name: String,
        #[source]
        source: EasingError,
    },
}
