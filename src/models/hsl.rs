//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

pigment_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue angle in degrees, 0 for achromatic colors.
        hue: Component,
        /// The saturation, 0 to 1.
        saturation: Component,
        /// The lightness, 0 to 1.
        lightness: Component,
    }
}
