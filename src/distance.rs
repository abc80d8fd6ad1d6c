//! Perceptual color difference measured in Oklab.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::{Error, Result},
    models::Oklab,
    value::ColorValue,
};

/// Weights applied to the squared lightness, `a`, `b` and chroma deltas.
///
/// Plain deltaE OK under-counts lightness and chroma differences between near
/// white and near black colors; the extra chroma term and the larger weights
/// on the opponent axes compensate for that.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceWeights {
    /// Weight of the lightness delta.
    pub lightness: Component,
    /// Weight of the green-red delta.
    pub a: Component,
    /// Weight of the blue-yellow delta.
    pub b: Component,
    /// Weight of the chroma delta.
    pub chroma: Component,
}

impl Default for DistanceWeights {
    fn default() -> Self {
        Self {
            lightness: 2.0,
            a: 4.0,
            b: 4.0,
            chroma: 3.0,
        }
    }
}

impl DistanceWeights {
    /// Check that every weight is finite and non-negative, so distances are
    /// never negative or NaN.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("lightness", self.lightness),
            ("a", self.a),
            ("b", self.b),
            ("chroma", self.chroma),
        ];
        match weights
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((name, value)) => Err(Error::InvalidWeight { name, value }),
            None => Ok(()),
        }
    }

    /// Weighted distance between two Oklab colors.
    pub fn distance(&self, reference: &Oklab, sample: &Oklab) -> Component {
        let dl = reference.lightness - sample.lightness;
        let da = reference.a - sample.a;
        let db = reference.b - sample.b;
        let dc = reference.chroma() - sample.chroma();

        (self.lightness * dl * dl + self.a * da * da + self.b * db * db + self.chroma * dc * dc)
            .sqrt()
    }
}

/// Weighted distance between two Oklab colors using the default weights.
pub fn oklab_distance(reference: &Oklab, sample: &Oklab) -> Component {
    DistanceWeights::default().distance(reference, sample)
}

/// Perceptual distance between two colors given as hex, RGB or Oklch values.
///
/// ```rust
/// let d = pigment::distance("#000000", "#ffffff").unwrap();
/// assert!(d > 1.41 && d < 1.42);
/// ```
pub fn distance(a: impl Into<ColorValue>, b: impl Into<ColorValue>) -> Result<Component> {
    distance_with(&DistanceWeights::default(), a, b)
}

/// Perceptual distance between two colors using explicit weights. Fails with
/// an error naming `a` or `b` when that argument is not a valid color, or
/// when a weight is invalid.
pub fn distance_with(
    weights: &DistanceWeights,
    a: impl Into<ColorValue>,
    b: impl Into<ColorValue>,
) -> Result<Component> {
    weights.validate()?;
    let a = a.into().resolve_oklab("a")?;
    let b = b.into().resolve_oklab("b")?;
    Ok(weights.distance(&a, &b))
}
