//! Configuration loaded from TOML. Every field has a default, so an empty
//! file is a valid configuration:
//!
//! ```toml
//! [distance]
//! lightness = 2.0
//! a = 4.0
//! b = 4.0
//! chroma = 3.0
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{distance::DistanceWeights, error::Result};

/// Classification settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Weights of the perceptual distance used to pick the closest category.
    pub distance: DistanceWeights,
}

impl Config {
    /// Parse a configuration from a TOML string. Negative or non-finite
    /// distance weights are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.distance.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading configuration from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
