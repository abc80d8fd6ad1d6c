//! pigment converts sampled colors between encodings (hex, RGB, CIE-XYZ,
//! CIE-Lab/Lch, Oklab/Oklch, HSL) and classifies them against the ISCC-NBS
//! named color system.
//!
//! ```rust
//! use pigment::{classify::Classifier, Color};
//!
//! let classifier = Classifier::new();
//! let color = Color::from_hex("#d2691e").unwrap();
//! let data = color.classify(&classifier).unwrap();
//! assert_eq!(data.iscc_nbs_category, "Deep Orange");
//! ```

#![deny(missing_docs)]

pub mod classify;
mod color;
pub mod config;
pub mod convert;
mod distance;
mod error;
mod interpolate;
mod math;
pub mod models;
pub mod render;
pub mod swatch;
pub mod taxonomy;
mod value;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components};
pub use distance::{distance, distance_with, oklab_distance, DistanceWeights};
pub use error::{Error, Result};
pub use value::{
    ensure_rgb, is_hex_color, is_hex_or_rgb, is_oklch, is_rgb, is_valid_color, ColorValue,
};
