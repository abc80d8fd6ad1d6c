//! Loosely typed color values accepted at the public entry points, and the
//! guards that validate them.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Color, Component},
    convert::{decimalize, hex_to_rgb},
    error::{Error, Result},
    models::{Oklab, Oklch, Rgb},
};

/// A color value in one of the encodings colors arrive in.
///
/// Nothing is validated on construction; every operation that takes a
/// `ColorValue` validates it and fails with [`Error::InvalidColorValue`].
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// A hexadecimal string, `#` followed by 3, 4, 6 or 8 digits.
    Hex(String),
    /// RGB channels in the 0 to 255 range with an optional fourth alpha.
    Rgb(Vec<Component>),
    /// Oklch lightness (0 to 1), chroma (0 to 1) and hue (0 to 360).
    Oklch([Component; 3]),
}

/// Return the hex digits of `value` if it is a hex color with or without the
/// leading `#`.
pub(crate) fn hex_digits(value: &str) -> Option<&str> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    (matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .then_some(digits)
}

/// Return true if `value` is `#` followed by 3, 4, 6 or 8 hexadecimal digits.
pub fn is_hex_color(value: &str) -> bool {
    value.starts_with('#') && hex_digits(value).is_some()
}

/// Return true if `channels` holds 3 or 4 values, all in the 0 to 255 range.
pub fn is_rgb(channels: &[Component]) -> bool {
    matches!(channels.len(), 3 | 4) && channels.iter().all(|c| (0.0..=255.0).contains(c))
}

/// Return true if `components` is a lightness in 0 to 1, a chroma in 0 to 1
/// and a hue in 0 to 360.
pub fn is_oklch(components: &[Component]) -> bool {
    let [lightness, chroma, hue] = components else {
        return false;
    };

    (0.0..=1.0).contains(lightness)
        && (0.0..=1.0).contains(chroma)
        && (0.0..=360.0).contains(hue)
}

/// Return true if `value` is a valid hex string or RGB sequence.
pub fn is_hex_or_rgb(value: &ColorValue) -> bool {
    match value {
        ColorValue::Hex(hex) => is_hex_color(hex),
        ColorValue::Rgb(channels) => is_rgb(channels),
        ColorValue::Oklch(_) => false,
    }
}

/// Return true if `value` is a valid hex string, RGB sequence or Oklch triple.
pub fn is_valid_color(value: &ColorValue) -> bool {
    match value {
        ColorValue::Oklch(components) => is_oklch(components),
        _ => is_hex_or_rgb(value),
    }
}

/// Resolve a hex or RGB value to its RGB channels and optional alpha.
pub fn ensure_rgb(value: impl Into<ColorValue>) -> Result<(Rgb, Option<Component>)> {
    value.into().resolve_rgb("value")
}

impl ColorValue {
    /// Resolve a hex or RGB value, naming `argument` in the error when the
    /// value is anything else.
    pub(crate) fn resolve_rgb(&self, argument: &'static str) -> Result<(Rgb, Option<Component>)> {
        match self {
            ColorValue::Hex(hex) if is_hex_color(hex) => hex_to_rgb(hex),
            ColorValue::Rgb(channels) if is_rgb(channels) => Ok((
                Rgb::new(channels[0], channels[1], channels[2]),
                channels.get(3).copied().map(decimalize),
            )),
            _ => Err(Error::invalid(argument, self)),
        }
    }

    /// Resolve a hex, RGB or Oklch value to Oklab.
    pub(crate) fn resolve_oklab(&self, argument: &'static str) -> Result<Oklab> {
        match self {
            ColorValue::Oklch(components) if is_oklch(components) => {
                Ok(Oklch::from(*components).to_oklab())
            }
            _ => self
                .resolve_rgb(argument)
                .map(|(rgb, _)| rgb.to_oklab()),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(hex) => write!(f, "{hex:?}"),
            ColorValue::Rgb(channels) => write!(f, "{channels:?}"),
            ColorValue::Oklch([l, c, h]) => write!(f, "oklch({l} {c} {h})"),
        }
    }
}

/// Parse a hex string or a CSS `rgb()`/`rgba()` function with comma or
/// space separated channels and an optional alpha.
impl FromStr for ColorValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if is_hex_color(s) {
            return Ok(ColorValue::Hex(s.to_string()));
        }

        let arguments = s
            .strip_prefix("rgba")
            .or_else(|| s.strip_prefix("rgb"))
            .and_then(|rest| rest.trim_start().strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::invalid("value", s))?;

        let channels = arguments
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<Component>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::invalid("value", s))?;

        if !is_rgb(&channels) {
            return Err(Error::invalid("value", s));
        }

        Ok(ColorValue::Rgb(channels))
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Hex(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::Hex(value)
    }
}

impl From<&String> for ColorValue {
    fn from(value: &String) -> Self {
        ColorValue::Hex(value.clone())
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from(value: [u8; 3]) -> Self {
        ColorValue::Rgb(value.iter().map(|&c| c.into()).collect())
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        ColorValue::from([red, green, blue])
    }
}

impl From<[Component; 3]> for ColorValue {
    fn from(value: [Component; 3]) -> Self {
        ColorValue::Rgb(value.to_vec())
    }
}

impl From<[Component; 4]> for ColorValue {
    fn from(value: [Component; 4]) -> Self {
        ColorValue::Rgb(value.to_vec())
    }
}

impl From<&[Component]> for ColorValue {
    fn from(value: &[Component]) -> Self {
        ColorValue::Rgb(value.to_vec())
    }
}

impl From<Vec<Component>> for ColorValue {
    fn from(value: Vec<Component>) -> Self {
        ColorValue::Rgb(value)
    }
}

impl From<Rgb> for ColorValue {
    fn from(value: Rgb) -> Self {
        ColorValue::Rgb(vec![value.red, value.green, value.blue])
    }
}

impl From<Oklch> for ColorValue {
    fn from(value: Oklch) -> Self {
        ColorValue::Oklch(value.into())
    }
}

impl From<&Color> for ColorValue {
    fn from(value: &Color) -> Self {
        let mut channels = vec![value.red(), value.green(), value.blue()];
        channels.extend(value.alpha());
        ColorValue::Rgb(channels)
    }
}

impl From<Color> for ColorValue {
    fn from(value: Color) -> Self {
        ColorValue::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_guard() {
        for valid in ["#fff", "#FFFF", "#be0032", "#Be003280"] {
            assert!(is_hex_color(valid), "{valid}");
        }
        for invalid in ["fff", "#ff", "#fffff", "#ggg", "#", "", "#ff00ff0"] {
            assert!(!is_hex_color(invalid), "{invalid}");
        }
    }

    #[test]
    fn rgb_guard() {
        assert!(is_rgb(&[0.0, 128.0, 255.0]));
        assert!(is_rgb(&[0.0, 128.0, 255.0, 0.5]));
        assert!(!is_rgb(&[0.0, 128.0]));
        assert!(!is_rgb(&[0.0, 128.0, 256.0]));
        assert!(!is_rgb(&[-1.0, 128.0, 255.0]));
        assert!(!is_rgb(&[0.0, 0.0, 0.0, 0.0, 0.0]));
        assert!(!is_rgb(&[Component::NAN, 0.0, 0.0]));
    }

    #[test]
    fn oklch_guard() {
        assert!(is_oklch(&[0.5, 0.2, 120.0]));
        assert!(is_oklch(&[1.0, 0.0, 360.0]));
        assert!(!is_oklch(&[1.5, 0.2, 120.0]));
        assert!(!is_oklch(&[0.5, 1.2, 120.0]));
        assert!(!is_oklch(&[0.5, 0.2, 361.0]));
        assert!(!is_oklch(&[0.5, 0.2]));
    }

    #[test]
    fn combined_guards() {
        let oklch = ColorValue::from(Oklch::new(0.5, 0.2, 120.0));
        assert!(!is_hex_or_rgb(&oklch));
        assert!(is_valid_color(&oklch));
        assert!(is_hex_or_rgb(&"#fff".into()));
        assert!(is_hex_or_rgb(&[1u8, 2, 3].into()));
        assert!(!is_valid_color(&"white".into()));
    }

    #[test]
    fn ensure_rgb_resolves_values() {
        assert_eq!(ensure_rgb("#fff").unwrap(), (Rgb::new(255.0, 255.0, 255.0), None));
        assert_eq!(
            ensure_rgb([1.0, 2.0, 3.0, 0.5]).unwrap(),
            (Rgb::new(1.0, 2.0, 3.0), Some(0.5))
        );
        assert!(matches!(
            ensure_rgb("#ff00zz"),
            Err(Error::InvalidColorValue { argument: "value", .. })
        ));
        assert!(ensure_rgb(Oklch::new(0.5, 0.2, 120.0)).is_err());
    }

    #[test]
    fn parse_css_strings() {
        assert_eq!(
            "rgb(255, 0, 170)".parse::<ColorValue>().unwrap(),
            ColorValue::Rgb(vec![255.0, 0.0, 170.0])
        );
        assert_eq!(
            "rgb(255 0 170 / 0.5)".parse::<ColorValue>().unwrap(),
            ColorValue::Rgb(vec![255.0, 0.0, 170.0, 0.5])
        );
        assert_eq!(
            "rgba(1,2,3,1)".parse::<ColorValue>().unwrap(),
            ColorValue::Rgb(vec![1.0, 2.0, 3.0, 1.0])
        );
        assert_eq!(
            " #F0A ".parse::<ColorValue>().unwrap(),
            ColorValue::Hex("#F0A".to_string())
        );

        assert!("rgb(1, 2)".parse::<ColorValue>().is_err());
        assert!("rgb(1, 2, 300)".parse::<ColorValue>().is_err());
        assert!("hsl(1, 2, 3)".parse::<ColorValue>().is_err());
        assert!("rgb(a, b, c)".parse::<ColorValue>().is_err());
    }

    #[test]
    fn color_values_carry_alpha() {
        let color = Color::from_rgba(1, 2, 3, 0.25);
        assert_eq!(
            ColorValue::from(&color),
            ColorValue::Rgb(vec![1.0, 2.0, 3.0, 0.25])
        );
    }
}
