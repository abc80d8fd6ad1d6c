//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::{Lab, Rgb},
};

/// D65 reference white on the 0 to 100 scale.
#[allow(clippy::excessive_precision)]
pub const D65: Components = Components(95.047, 100.0, 108.883);

/// CIE ε, the boundary between the cube root and linear segments of Lab.
pub const CIE_EPSILON: Component = 0.008856;

/// CIE κ.
pub const CIE_KAPPA: Component = 903.3;

pigment_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point, on the 0 to
    /// 100 scale.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl Xyz {
    /// Convert to CIE-Lab relative to the D65 white point.
    pub fn to_lab(&self) -> Lab {
        let adapted = Components(self.x / D65.0, self.y / D65.1, self.z / D65.2);

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > CIE_EPSILON {
                v.cbrt()
            } else {
                v * 7.787 + 16.0 / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }

    /// Convert back to sRGB, clipping anything outside the sRGB gamut.
    pub fn to_rgb(&self) -> Rgb {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const XYZ_TO_SRGB: Transform = transform_3x3(
             3.2404542, -1.5371385, -0.4985314,
            -0.9692660,  1.8760108,  0.0415560,
             0.0556434, -0.2040259,  1.0572252,
        );

        let linear = transform(&XYZ_TO_SRGB, self.to_components().map(|v| v / 100.0));
        Rgb::from_linear_light(linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_rgb_near};

    #[test]
    fn white_maps_to_full_lightness() {
        let lab = Xyz::new(D65.0, D65.1, D65.2).to_lab();
        assert_component_eq!(lab.lightness, 100.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn dark_values_use_the_linear_segment() {
        let lab = Xyz::new(0.5, 0.5, 0.5).to_lab();
        // y = 0.005 is below ε: L = 116 * (0.005 * 7.787 + 16 / 116) - 16
        assert_component_eq!(lab.lightness, 116.0 * 0.005 * 7.787);
    }

    #[test]
    fn rgb_round_trip() {
        for rgb in [
            Rgb::new(210.0, 105.0, 30.0),
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(255.0, 255.0, 255.0),
            Rgb::new(18.0, 52.0, 86.0),
        ] {
            assert_rgb_near!(rgb.to_xyz().to_rgb(), rgb, 0.01);
        }
    }
}
