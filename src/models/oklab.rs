//! Models for Oklab and its cylindrical polar form Oklch.

use crate::{
    color::Component,
    math::{almost_zero, round_hue, round_to, transform, transform_3x3, Transform},
    models::Rgb,
};

pigment_macros::gen_model! {
    /// A color in the Oklab color space.
    pub struct Oklab {
        /// The perceived lightness, 0 to 1.
        lightness: Component,
        /// The green-red axis.
        a: Component,
        /// The blue-yellow axis.
        b: Component,
    }
}

pigment_macros::gen_model! {
    /// A color in the Oklch color space, the polar form of Oklab.
    pub struct Oklch {
        /// The perceived lightness, 0 to 1.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue angle in degrees, 0 to 360.
        hue: Component,
    }
}

impl Oklab {
    /// The chroma of this color, its distance from the neutral axis.
    pub fn chroma(&self) -> Component {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Convert this color into its polar form. Achromatic colors get a hue of
    /// 0.
    pub fn to_oklch(&self) -> Oklch {
        let chroma = self.chroma();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            (self.b.atan2(self.a).to_degrees() + 360.0) % 360.0
        };

        Oklch::new(self.lightness, chroma, hue)
    }

    /// Convert back to sRGB, clipping anything outside the sRGB gamut.
    pub fn to_rgb(&self) -> Rgb {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,  0.3963377774,  0.2158037573,
            1.0, -0.1055613458, -0.0638541728,
            1.0, -0.0894841775, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_LINEAR_SRGB: Transform = transform_3x3(
             4.0767416621, -3.3077115913,  0.2309699292,
            -1.2684380046,  2.6097574011, -0.3413193965,
            -0.0041960863, -0.7034186147,  1.7076147010,
        );

        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        Rgb::from_linear_light(transform(&LMS_TO_LINEAR_SRGB, lms))
    }
}

impl Oklch {
    /// Convert this color back into its rectangular form.
    pub fn to_oklab(&self) -> Oklab {
        let hue = self.hue.to_radians();
        Oklab::new(
            self.lightness,
            self.chroma * hue.cos(),
            self.chroma * hue.sin(),
        )
    }

    /// Round lightness and chroma to 4 decimal places and hue to 2, the
    /// precision swatches are stored with.
    pub fn rounded(&self) -> Self {
        Oklch::new(
            round_to(self.lightness, 4),
            round_to(self.chroma, 4),
            round_hue(self.hue, 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_rgb_near};

    #[test]
    fn polar_of_chocolate() {
        let oklch = Rgb::new(210.0, 105.0, 30.0).to_oklab().to_oklch();
        assert_component_eq!(oklch.lightness, 0.634398);
        assert_component_eq!(oklch.chroma, 0.154992);
        assert_component_eq!(oklch.hue, 50.266483);
        assert_eq!(oklch.rounded(), Oklch::new(0.6344, 0.155, 50.27));
    }

    #[test]
    fn achromatic_colors_have_zero_hue() {
        for gray in [0.0, 1.0, 128.0, 255.0] {
            let oklch = Rgb::new(gray, gray, gray).to_oklab().to_oklch();
            assert_eq!(oklch.hue, 0.0);
            assert_component_eq!(oklch.chroma, 0.0);
        }
    }

    #[test]
    fn negative_hues_are_normalized() {
        let oklch = Oklab::new(0.5, 0.1, -0.1).to_oklch();
        assert_component_eq!(oklch.hue, 315.0);
    }

    #[test]
    fn rounded_hue_stays_below_a_full_turn() {
        let oklch = Rgb::new(48.0, 1.0, 21.0).to_oklab().to_oklch();
        assert!(oklch.hue > 359.99 && oklch.hue < 360.0);
        assert_eq!(oklch.rounded(), Oklch::new(0.2021, 0.0792, 0.0));
    }

    #[test]
    fn rgb_round_trip() {
        for rgb in [
            Rgb::new(210.0, 105.0, 30.0),
            Rgb::new(255.0, 0.0, 255.0),
            Rgb::new(18.0, 52.0, 86.0),
            Rgb::new(255.0, 255.0, 255.0),
        ] {
            assert_rgb_near!(rgb.to_oklab().to_rgb(), rgb, 0.05);
        }
    }

    #[test]
    fn oklch_round_trip() {
        let oklab = Rgb::new(190.0, 0.0, 50.0).to_oklab();
        let back = oklab.to_oklch().to_oklab();
        assert_component_eq!(back.lightness, oklab.lightness);
        assert_component_eq!(back.a, oklab.a);
        assert_component_eq!(back.b, oklab.b);
    }
}
