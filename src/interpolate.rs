use num_traits::Float;

use crate::{
    color::{Color, Component},
    models::Oklab,
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Color {
    /// Linearly interpolate from this color to another in Oklab using `t` as
    /// the progress between them. The result is clipped to sRGB.
    ///
    /// Alpha is interpolated when both colors have one, otherwise the alpha of
    /// whichever color has one is kept.
    pub fn interpolate(&self, other: &Color, t: Component) -> Color {
        let left = self.to_oklab();
        let right = other.to_oklab();

        let mixed = Oklab::new(
            lerp(left.lightness, right.lightness, t),
            lerp(left.a, right.a, t),
            lerp(left.b, right.b, t),
        );

        let alpha = match (self.alpha(), other.alpha()) {
            (Some(a), Some(b)) => Some(lerp(a, b, t)),
            (a, b) => a.or(b),
        };

        Color::from_parts(mixed.to_rgb(), alpha)
    }

    /// Return `steps` colors evenly spaced from this color to `other`, both
    /// included.
    pub fn gradient(&self, other: &Color, steps: usize) -> Vec<Color> {
        match steps {
            0 => vec![],
            1 => vec![*self],
            _ => (0..steps)
                .map(|i| self.interpolate(other, i as Component / (steps - 1) as Component))
                .collect(),
        }
    }
}
