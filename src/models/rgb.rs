//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{almost_zero, transform, transform_3x3, Transform},
    models::{Hsl, Oklab, Xyz},
};

pigment_macros::gen_model! {
    /// A color in the sRGB color space with channels on the 0 to 255 scale
    /// used by sampled pixels.
    pub struct Rgb {
        /// The red channel.
        red: Component,
        /// The green channel.
        green: Component,
        /// The blue channel.
        blue: Component,
    }
}

/// Largest value of an 8-bit channel.
pub(crate) const CHANNEL_MAX: Component = 255.0;

/// sRGB transfer function from gamma encoded to linear light.
fn to_linear_light(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function from linear light to gamma encoded.
pub(crate) fn to_gamma_encoded(value: Component) -> Component {
    let abs = value.abs();

    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

impl Rgb {
    /// Build a color from linear light components in the 0 to 1 range,
    /// clipping anything outside the sRGB gamut.
    pub(crate) fn from_linear_light(linear: Components) -> Self {
        Rgb::from(linear.map(|v| (to_gamma_encoded(v) * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX)))
    }

    /// Return the channels scaled into the 0 to 1 range.
    pub fn normalized(&self) -> Components {
        self.to_components().map(|v| v / CHANNEL_MAX)
    }

    /// Return the channels with the gamma encoding removed.
    pub fn linear_light(&self) -> Components {
        self.normalized().map(to_linear_light)
    }

    /// Return a new color with each channel clamped into the 0 to 255 range.
    pub fn clamp(&self) -> Self {
        self.map(|v| v.clamp(0.0, CHANNEL_MAX))
    }

    /// Luma of the color in the 0 to 1 range, using the Rec. 709 weights on
    /// the gamma encoded channels.
    pub fn luma(&self) -> Component {
        (0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue) / CHANNEL_MAX
    }

    /// Convert to CIE-XYZ (D65) on the 0 to 100 scale.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const SRGB_TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.3575761, 0.1804375,
            0.2126729, 0.7151522, 0.0721750,
            0.0193339, 0.1191920, 0.9503041,
        );

        let linear = self.linear_light().map(|v| v * 100.0);
        transform(&SRGB_TO_XYZ, linear).into()
    }

    /// Convert to Oklab.
    /// <https://bottosson.github.io/posts/oklab/>
    pub fn to_oklab(&self) -> Oklab {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LINEAR_SRGB_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.5363325363, 0.0514459929,
            0.2119034982, 0.6806995451, 0.1073969566,
            0.0883024619, 0.2817188376, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
            0.2104542553,  0.7936177850, -0.0040720468,
            1.9779984951, -2.4285922050,  0.4505937099,
            0.0259040371,  0.7827717662, -0.8086757660,
        );

        let lms = transform(&LINEAR_SRGB_TO_LMS, self.linear_light());
        let lms = lms.map(|v| if v > 0.0 { v.cbrt() } else { 0.0 });
        transform(&LMS_TO_OKLAB, lms).into()
    }

    /// Convert to the HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn to_hsl(&self) -> Hsl {
        let Components(red, green, blue) = self.normalized();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        let lightness = (min + max) / 2.0;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Hsl::new(hue, saturation, lightness)
    }
}
