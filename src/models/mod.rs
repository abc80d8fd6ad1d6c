//! Models are structs that represent a color in one specific encoding. Each
//! model only implements the conversions that are meaningful for it, so a
//! conversion path reads as a chain of method calls:
//!
//! ```rust
//! use pigment::models::Rgb;
//! let lch = Rgb::new(210.0, 105.0, 30.0).to_xyz().to_lab().to_lch();
//! assert_eq!((lch.lightness, lch.chroma, lch.hue), (55.99, 67.77, 56.85));
//! ```

use crate::color::Components;

mod hsl;
mod lab;
mod oklab;
mod rgb;
mod xyz;

pub use hsl::Hsl;
pub use lab::{Lab, Lch};
pub use oklab::{Oklab, Oklch};
pub use rgb::Rgb;
pub use xyz::{Xyz, CIE_EPSILON, CIE_KAPPA, D65};

/// A trait implemented by every color model.
pub trait Model: Copy {
    /// The CSS function name of the model, e.g. `oklch`.
    const NAME: &'static str;

    /// Convert the model into generic components.
    fn to_components(&self) -> Components;
}
