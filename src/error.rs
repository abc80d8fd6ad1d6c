//! Error types for color conversion and classification.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The value is not a hex string, an RGB sequence or, where accepted, an
    /// Oklch triple.
    #[error("invalid color value for `{argument}`: {value} must be a hexadecimal color string or an RGB sequence")]
    InvalidColorValue {
        /// Name of the argument that held the value.
        argument: &'static str,
        /// The offending value, rendered for display.
        value: String,
    },

    /// A distance weight is negative or not a finite number.
    #[error("invalid distance weight `{name}`: {value} must be a finite, non-negative number")]
    InvalidWeight {
        /// Name of the weight.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A taxonomy failed validation while being built.
    #[error("invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(argument: &'static str, value: impl ToString) -> Self {
        Error::InvalidColorValue {
            argument,
            value: value.to_string(),
        }
    }
}
