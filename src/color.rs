//! A [`Color`] wraps a single sampled color. RGB channels and an optional
//! alpha are the only state; every other encoding is computed on demand.

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::{
    classify::{Classifier, IsccNbsData, Match},
    convert,
    error::{Error, Result},
    models::{Hsl, Lab, Lch, Oklab, Oklch, Rgb},
    render::{render, Format},
    value::ColorValue,
};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// An immutable color value holding RGB channels on the 0 to 255 scale and an
/// optional alpha in the 0 to 1 range.
///
/// Arithmetic (`+`, `*`, [`Color::scale`]) may push channels outside the 0 to
/// 255 range; use [`Color::clamp`] before classifying such a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    rgb: Rgb,
    alpha: Option<Component>,
}

impl Color {
    /// Create a color from any accepted [`ColorValue`]:
    /// ```rust
    /// use pigment::Color;
    /// let a = Color::new("#f0a").unwrap();
    /// let b = Color::new([255u8, 0, 170]).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn new(value: impl Into<ColorValue>) -> Result<Self> {
        let (rgb, alpha) = value.into().resolve_rgb("color")?;
        Ok(Self { rgb, alpha })
    }

    /// Create a color from a hexadecimal string with 3, 4, 6 or 8 digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let (rgb, alpha) = convert::hex_to_rgb(hex)?;
        Ok(Self { rgb, alpha })
    }

    /// Create an opaque color from 8-bit channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: Rgb::new(red.into(), green.into(), blue.into()),
            alpha: None,
        }
    }

    /// Create a color from 8-bit channels and an alpha, which is clamped into
    /// the 0 to 1 range.
    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            alpha: Some(alpha.clamp(0.0, 1.0)),
            ..Self::from_rgb(red, green, blue)
        }
    }

    pub(crate) fn from_parts(rgb: Rgb, alpha: Option<Component>) -> Self {
        Self { rgb, alpha }
    }

    /// The red channel.
    pub fn red(&self) -> Component {
        self.rgb.red
    }

    /// The green channel.
    pub fn green(&self) -> Component {
        self.rgb.green
    }

    /// The blue channel.
    pub fn blue(&self) -> Component {
        self.rgb.blue
    }

    /// The alpha component, if the color has one.
    pub fn alpha(&self) -> Option<Component> {
        self.alpha
    }

    /// The RGB channels of the color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Relative lightness in the 0 to 1 range, computed with the Rec. 709
    /// luma weights `0.2126 R + 0.7152 G + 0.0722 B` on the gamma encoded
    /// channels. Used to order swatch samples from light to dark.
    pub fn lightness(&self) -> Component {
        self.rgb.luma()
    }

    /// Return true if this color is lighter than `other`.
    pub fn lighter_than(&self, other: &Color) -> bool {
        self.lightness() > other.lightness()
    }

    /// Return a new color with each channel clamped into the 0 to 255 range.
    pub fn clamp(&self) -> Self {
        Self::from_parts(self.rgb.clamp(), self.alpha)
    }

    /// Return a new color with each channel multiplied by `factor`.
    pub fn scale(&self, factor: Component) -> Self {
        Self::from_parts(self.rgb.map(|v| v * factor), self.alpha)
    }

    /// Return the component-wise mean of two colors, each channel rounded to
    /// the nearest integer (ties to even). Alpha is averaged when both colors
    /// have one, otherwise the alpha of `self` is kept.
    pub fn mean(&self, other: &Color) -> Self {
        let rgb = Rgb::new(
            ((self.rgb.red + other.rgb.red) / 2.0).round_ties_even(),
            ((self.rgb.green + other.rgb.green) / 2.0).round_ties_even(),
            ((self.rgb.blue + other.rgb.blue) / 2.0).round_ties_even(),
        );
        let alpha = self
            .alpha
            .zip(other.alpha)
            .map(|(a, b)| (a + b) / 2.0)
            .or(self.alpha);

        Self::from_parts(rgb, alpha)
    }

    /// Return a new color with the square root of each channel.
    pub fn sqrt(&self) -> Self {
        Self::from_parts(self.rgb.map(Component::sqrt), self.alpha)
    }

    /// The color as a lowercase `#rrggbb` or `#rrggbbaa` string.
    pub fn to_hex(&self) -> String {
        convert::rgb_to_hex(&self.rgb, self.alpha)
    }

    /// The color in CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        self.rgb.to_xyz().to_lab()
    }

    /// The color in CIE-Lch, rounded to 2 decimal places.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_lch()
    }

    /// The color in the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.rgb.to_hsl()
    }

    /// The color in Oklab.
    pub fn to_oklab(&self) -> Oklab {
        self.rgb.to_oklab()
    }

    /// The color in Oklch, lightness and chroma rounded to 4 decimal places
    /// and hue to 2.
    pub fn to_oklch(&self) -> Oklch {
        self.to_oklab().to_oklch().rounded()
    }

    /// Render the color as a CSS color string in the given format.
    pub fn render(&self, format: Format) -> String {
        render(self, format)
    }

    /// Classify the color against the classifier's taxonomy, using its cache.
    pub fn classify(&self, classifier: &Classifier) -> Result<IsccNbsData> {
        classifier.classify(self)
    }

    /// Classify the color, recomputing and overwriting any cached result when
    /// `uncache` is set.
    pub fn classify_with(&self, classifier: &Classifier, uncache: bool) -> Result<IsccNbsData> {
        classifier.classify_with(self, uncache)
    }

    /// Find the taxonomy entry closest to this color without consulting the
    /// cache.
    pub fn find_closest_category<'t>(&self, classifier: &Classifier<'t>) -> Result<Match<'t>> {
        classifier.find_closest_category(self)
    }
}

impl TryFrom<ColorValue> for Color {
    type Error = Error;

    fn try_from(value: ColorValue) -> Result<Self> {
        Color::new(value)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::new(s.parse::<ColorValue>()?)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Rgb))
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        let rgb = Rgb::new(
            self.rgb.red + rhs.rgb.red,
            self.rgb.green + rhs.rgb.green,
            self.rgb.blue + rhs.rgb.blue,
        );
        Color::from_parts(rgb, self.alpha)
    }
}

impl Add<Component> for Color {
    type Output = Color;

    fn add(self, rhs: Component) -> Color {
        Color::from_parts(self.rgb.map(|v| v + rhs), self.alpha)
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        let rgb = Rgb::new(
            self.rgb.red * rhs.rgb.red,
            self.rgb.green * rhs.rgb.green,
            self.rgb.blue * rhs.rgb.blue,
        );
        Color::from_parts(rgb, self.alpha)
    }
}

impl Mul<Component> for Color {
    type Output = Color;

    fn mul(self, rhs: Component) -> Color {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn construct_from_values() {
        let c = Color::from_hex("#FF00FF").unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (255.0, 0.0, 255.0));
        assert_eq!(c.alpha(), None);

        let c = Color::new([255.0, 0.0, 255.0, 0.8]).unwrap();
        assert_eq!(c.alpha(), Some(0.8));

        let c = Color::from_hex("#ff00ff80").unwrap();
        assert_eq!(c.alpha(), Some(0.501));

        assert_eq!(
            "rgb(255, 0, 255)".parse::<Color>().unwrap(),
            Color::from_rgb(255, 0, 255)
        );
    }

    #[test]
    fn reject_invalid_values() {
        assert!(matches!(
            Color::new("ff00ff"),
            Err(Error::InvalidColorValue { argument: "color", .. })
        ));
        assert!(Color::new([256.0, 0.0, 0.0]).is_err());
        assert!(Color::new(vec![1.0, 2.0]).is_err());
        assert!(Color::new(Oklch::new(0.5, 0.1, 120.0)).is_err());
    }

    #[test]
    fn conversions() {
        let c = Color::from_rgb(210, 105, 30);
        assert_eq!(c.to_hex(), "#d2691e");
        assert_eq!(c.to_lch(), Lch::new(55.99, 67.77, 56.85));
        assert_eq!(c.to_oklch(), Oklch::new(0.6344, 0.155, 50.27));

        let lab = c.to_lab();
        assert_component_eq!(lab.lightness, 55.990059);
        assert_component_eq!(lab.a, 37.052651);
        assert_component_eq!(lab.b, 56.740710);

        let oklab = c.to_oklab();
        assert_component_eq!(oklab.lightness, 0.634398);
        assert_component_eq!(oklab.a, 0.099074);
        assert_component_eq!(oklab.b, 0.119193);
    }

    #[test]
    fn white_oklch_has_zero_hue() {
        let white = Color::from_hex("#ffffff").unwrap().to_oklch();
        assert_eq!(white, Oklch::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn conversions_do_not_change_the_color() {
        let c = Color::from_rgba(18, 52, 86, 0.5);
        let copy = c;
        let _ = (c.to_lch(), c.to_oklch(), c.to_hex(), c.to_hsl());
        assert_eq!(c, copy);
        assert_eq!(c.to_hex(), "#1234567f");
    }

    #[test]
    fn lightness_uses_luma_weights() {
        assert_component_eq!(Color::from_rgb(255, 255, 255).lightness(), 1.0);
        assert_component_eq!(Color::from_rgb(0, 0, 255).lightness(), 0.0722);
        assert!(Color::from_rgb(0, 255, 0).lighter_than(&Color::from_rgb(255, 0, 0)));
    }

    #[test]
    fn arithmetic_keeps_left_alpha() {
        let left = Color::from_rgba(10, 20, 30, 0.25);
        let right = Color::from_rgba(1, 2, 3, 0.75);

        let sum = left + right;
        assert_eq!(sum.rgb(), Rgb::new(11.0, 22.0, 33.0));
        assert_eq!(sum.alpha(), Some(0.25));

        let product = left * right;
        assert_eq!(product.rgb(), Rgb::new(10.0, 40.0, 90.0));
        assert_eq!(product.alpha(), Some(0.25));

        let scaled = left * 2.0;
        assert_eq!(scaled, left.scale(2.0));
        assert_eq!(scaled.rgb(), Rgb::new(20.0, 40.0, 60.0));

        let shifted = right + 1.0;
        assert_eq!(shifted.rgb(), Rgb::new(2.0, 3.0, 4.0));
        assert_eq!(shifted.alpha(), Some(0.75));
    }

    #[test]
    fn clamp_and_mean() {
        let bright = Color::from_rgb(200, 100, 50) * 2.0;
        assert_eq!(bright.clamp().rgb(), Rgb::new(255.0, 200.0, 100.0));

        let mean = Color::from_rgb(0, 0, 0).mean(&Color::from_rgb(255, 1, 3));
        // 127.5 and 0.5 round to even, 1.5 rounds up to 2.
        assert_eq!(mean.rgb(), Rgb::new(128.0, 0.0, 2.0));

        let mean = Color::from_rgba(0, 0, 0, 0.2).mean(&Color::from_rgba(0, 0, 0, 0.6));
        assert_component_eq!(mean.alpha().unwrap(), 0.4);
    }

    #[test]
    fn sqrt_of_channels() {
        let c = Color::from_rgb(16, 81, 144).sqrt();
        assert_eq!(c.rgb(), Rgb::new(4.0, 9.0, 12.0));
    }

    #[test]
    fn display_renders_rgb() {
        assert_eq!(Color::from_rgb(1, 2, 3).to_string(), "rgb(1 2 3)");
        assert_eq!(Color::from_rgba(1, 2, 3, 0.5).to_string(), "rgb(1 2 3 / 0.5)");
    }
}
