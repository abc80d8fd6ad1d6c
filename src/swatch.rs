//! Product swatches: the color encodings stored for a single product and
//! rendered as a small gradient sample.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    classify::{Classifier, IsccNbsData},
    color::Color,
    convert::rgb_to_hex,
    error::{Error, Result},
    models::Oklch,
};

/// A texture drawn over a swatch to hint at the product finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Overlay {
    Crackle,
    Chrome,
    Glossy,
    Glow,
    Grunge,
    Liquid,
    Matte,
    Topographic,
}

impl Overlay {
    /// Every overlay.
    pub const ALL: [Overlay; 8] = [
        Overlay::Crackle,
        Overlay::Chrome,
        Overlay::Glossy,
        Overlay::Glow,
        Overlay::Grunge,
        Overlay::Liquid,
        Overlay::Matte,
        Overlay::Topographic,
    ];

    /// The lowercase name used in serialized swatches.
    pub fn name(&self) -> &'static str {
        match self {
            Overlay::Crackle => "crackle",
            Overlay::Chrome => "chrome",
            Overlay::Glossy => "glossy",
            Overlay::Glow => "glow",
            Overlay::Grunge => "grunge",
            Overlay::Liquid => "liquid",
            Overlay::Matte => "matte",
            Overlay::Topographic => "topographic",
        }
    }
}

impl FromStr for Overlay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Overlay::ALL
            .into_iter()
            .find(|overlay| overlay.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid("overlay", s))
    }
}

/// The color encodings recorded for a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSwatch {
    /// The base color as `#rrggbb`. Alpha is not recorded.
    pub hex_color: String,
    /// The base color as 8-bit channels.
    pub rgb_color: [u8; 3],
    /// The base color in Oklch.
    pub oklch_color: Oklch,
    /// The lightest sample in Oklch.
    pub gradient_start: Oklch,
    /// The darkest sample in Oklch.
    pub gradient_end: Oklch,
    /// Optional finish overlay.
    pub overlay: Option<Overlay>,
}

impl ProductSwatch {
    /// Build a swatch from its base color and gradient end points.
    pub fn new(start: &Color, base: &Color, end: &Color) -> Self {
        let rgb = base.clamp().rgb();

        Self {
            hex_color: rgb_to_hex(&rgb, None),
            rgb_color: [rgb.red, rgb.green, rgb.blue].map(|c| c.round() as u8),
            oklch_color: base.to_oklch(),
            gradient_start: start.to_oklch(),
            gradient_end: end.to_oklch(),
            overlay: None,
        }
    }

    /// Set the finish overlay.
    pub fn with_overlay(self, overlay: Overlay) -> Self {
        Self {
            overlay: Some(overlay),
            ..self
        }
    }
}

/// A classified swatch, serialized flat with the classification fields next
/// to `swatch`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSwatch {
    /// Classification of the base color.
    #[serde(flatten)]
    pub iscc_nbs: IsccNbsData,
    /// The swatch encodings.
    pub swatch: ProductSwatch,
}

/// Sort samples from lightest to darkest. Samples of equal lightness keep
/// their order.
pub fn order_by_lightness<const N: usize>(mut samples: [Color; N]) -> [Color; N] {
    samples.sort_by(|a, b| b.lightness().total_cmp(&a.lightness()));
    samples
}

/// Order three sampled colors from lightest to darkest, classify the middle
/// one and build its swatch.
pub fn resolve_product_swatch(classifier: &Classifier, samples: [Color; 3]) -> Result<ResolvedSwatch> {
    let [start, base, end] = order_by_lightness(samples);

    Ok(ResolvedSwatch {
        iscc_nbs: classifier.classify(&base)?,
        swatch: ProductSwatch::new(&start, &base, &end),
    })
}
