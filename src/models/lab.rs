//! Models for CIE-Lab and its cylindrical polar form CIE-Lch.

use std::f64::consts::PI;

use crate::{
    color::Component,
    math::{round_hue, round_to},
    models::xyz::{Xyz, CIE_EPSILON, CIE_KAPPA, D65},
};

pigment_macros::gen_model! {
    /// A color in the CIE-Lab color space.
    pub struct Lab {
        /// The lightness component, 0 to 100.
        lightness: Component,
        /// The green-red axis.
        a: Component,
        /// The blue-yellow axis.
        b: Component,
    }
}

pigment_macros::gen_model! {
    /// A color in the CIE-Lch color space, the polar form of CIE-Lab.
    pub struct Lch {
        /// The lightness component, 0 to 100.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue angle in degrees, 0 to 360.
        hue: Component,
    }
}

impl Lab {
    /// Convert this color into its polar form. Every component is rounded to
    /// 2 decimal places.
    pub fn to_lch(&self) -> Lch {
        let angle = self.b.atan2(self.a);

        let mut hue = if angle > 0.0 {
            angle / PI * 180.0
        } else {
            360.0 - angle.abs() / PI * 180.0
        };
        if hue < 0.0 {
            hue += 360.0;
        } else if hue >= 360.0 {
            hue -= 360.0;
        }

        let chroma = (self.a * self.a + self.b * self.b).sqrt();

        Lch::new(
            round_to(self.lightness, 2),
            round_to(chroma, 2),
            round_hue(hue, 2),
        )
    }

    /// Convert back to CIE-XYZ (D65).
    pub fn to_xyz(&self) -> Xyz {
        fn inverse(v: Component) -> Component {
            let cubed = v * v * v;
            if cubed > CIE_EPSILON {
                cubed
            } else {
                (116.0 * v - 16.0) / CIE_KAPPA
            }
        }

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            inverse(fx) * D65.0,
            inverse(fy) * D65.1,
            inverse(fz) * D65.2,
        )
    }
}

impl Lch {
    /// Convert this color back into its rectangular form.
    ///
    /// A chroma that is not positive is passed through to both `a` and `b`
    /// instead of being projected, which keeps results identical to
    /// previously stored conversions.
    pub fn to_lab(&self) -> Lab {
        if self.chroma <= 0.0 {
            return Lab::new(self.lightness, self.chroma, self.chroma);
        }

        let hue = self.hue / 180.0 * PI;
        Lab::new(
            self.lightness,
            self.chroma * hue.cos(),
            self.chroma * hue.sin(),
        )
    }
}
