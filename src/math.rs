//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix given in row-major order.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Chroma below this is treated as having no hue.
const ACHROMATIC_EPSILON: Component = 1.0e-6;

pub fn almost_zero(value: Component) -> bool {
    value.abs() < ACHROMATIC_EPSILON
}

/// Round `value` to the given number of decimal places. Negative zero is
/// returned as zero.
pub fn round_to(value: Component, places: i32) -> Component {
    let factor = (10.0 as Component).powi(places);
    (value * factor).round() / factor + 0.0
}

/// Round a hue in degrees to the given number of decimal places, keeping it in
/// `[0, 360)`. Hues just below 360 round up to a full turn and wrap to 0.
pub fn round_hue(hue: Component, places: i32) -> Component {
    let hue = round_to(hue, places);
    if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}
