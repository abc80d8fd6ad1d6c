//! Conversions for loosely typed color values. Every function accepts anything
//! that converts into a [`ColorValue`], validates it and then walks the typed
//! model chain:
//!
//! ```rust
//! use pigment::convert;
//! let lch = convert::to_lch("#d2691e").unwrap();
//! assert_eq!((lch.lightness, lch.chroma, lch.hue), (55.99, 67.77, 56.85));
//! ```
//!
//! Functions that also take Oklch triples say so; all others fail with
//! [`Error::InvalidColorValue`] for them.

use crate::{
    color::Component,
    error::{Error, Result},
    models::{Lab, Lch, Oklab, Oklch, Rgb},
    value::{hex_digits, ColorValue},
};

/// Convert a channel value into an alpha in the 0 to 1 range. Values up to 1
/// are already fractions. Larger values are 8-bit bytes and are truncated
/// (not rounded) to 3 decimal places.
pub fn decimalize(value: Component) -> Component {
    if value < 0.0 {
        0.0
    } else if value <= 1.0 {
        value
    } else {
        (value / 255.0 * 1000.0).floor() / 1000.0
    }
}

/// Parse a hexadecimal color with 3, 4, 6 or 8 digits and an optional leading
/// `#`. Short forms duplicate each digit. A fourth channel is the alpha.
pub fn hex_to_rgb(hex: &str) -> Result<(Rgb, Option<Component>)> {
    let digits = hex_digits(hex).ok_or_else(|| Error::invalid("hex", hex))?;

    let digits = if digits.len() <= 4 {
        digits.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        digits.to_string()
    };

    let channels = (0..digits.len() / 2)
        .map(|i| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map(Component::from))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| Error::invalid("hex", hex))?;

    Ok((
        Rgb::new(channels[0], channels[1], channels[2]),
        channels.get(3).copied().map(decimalize),
    ))
}

/// Format RGB channels and an optional alpha as a lowercase `#rrggbb` or
/// `#rrggbbaa` string. Channels are clamped and truncated to bytes.
pub fn rgb_to_hex(rgb: &Rgb, alpha: Option<Component>) -> String {
    fn byte(value: Component) -> u8 {
        value.clamp(0.0, 255.0) as u8
    }

    let mut hex = String::with_capacity(9);
    hex.push('#');
    let alpha = alpha.map(|a| a.clamp(0.0, 1.0) * 255.0);
    for channel in [rgb.red, rgb.green, rgb.blue].into_iter().chain(alpha) {
        hex.push_str(&format!("{:02x}", byte(channel)));
    }
    hex
}

/// Resolve a hex or RGB value to a lowercase hex string.
pub fn to_hex(value: impl Into<ColorValue>) -> Result<String> {
    let (rgb, alpha) = value.into().resolve_rgb("color")?;
    Ok(rgb_to_hex(&rgb, alpha))
}

/// Convert a hex or RGB value to CIE-Lab.
pub fn to_lab(value: impl Into<ColorValue>) -> Result<Lab> {
    let (rgb, _) = value.into().resolve_rgb("color")?;
    Ok(rgb.to_xyz().to_lab())
}

/// Convert a hex or RGB value to CIE-Lch, rounded to 2 decimal places.
pub fn to_lch(value: impl Into<ColorValue>) -> Result<Lch> {
    to_lab(value).map(|lab| lab.to_lch())
}

/// Convert a hex, RGB or Oklch value to Oklab.
pub fn to_oklab(value: impl Into<ColorValue>) -> Result<Oklab> {
    value.into().resolve_oklab("color")
}

/// Convert a hex, RGB or Oklch value to Oklch, with lightness and chroma
/// rounded to 4 decimal places and hue to 2.
pub fn to_oklch(value: impl Into<ColorValue>) -> Result<Oklch> {
    to_oklab(value).map(|oklab| oklab.to_oklch().rounded())
}

/// Luma of a hex or RGB value in the 0 to 1 range.
pub fn lightness(value: impl Into<ColorValue>) -> Result<Component> {
    let (rgb, _) = value.into().resolve_rgb("color")?;
    Ok(rgb.luma())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        #[rustfmt::skip]
        let colors = [
            ("#000000", [  0,   0,   0]),
            ("#ffffff", [255, 255, 255]),
            ("#ff00ff", [255,   0, 255]),
            ("#be0032", [190,   0,  50]),
            ("#d2691e", [210, 105,  30]),
            ("#123456", [ 18,  52,  86]),
        ];

        for (hex, [r, g, b]) in colors {
            let rgb = Rgb::new(r.into(), g.into(), b.into());
            assert_eq!(rgb_to_hex(&rgb, None), hex);
            assert_eq!(hex_to_rgb(hex).unwrap(), (rgb, None));
        }
    }

    #[test]
    fn short_hex_forms_expand() {
        assert_eq!(
            hex_to_rgb("#fff").unwrap(),
            (Rgb::new(255.0, 255.0, 255.0), None)
        );
        assert_eq!(
            hex_to_rgb("f0a").unwrap(),
            (Rgb::new(255.0, 0.0, 170.0), None)
        );
        assert_eq!(
            hex_to_rgb("#f0a8").unwrap(),
            (Rgb::new(255.0, 0.0, 170.0), Some(0.533))
        );
    }

    #[test]
    fn alpha_is_truncated() {
        // 128 / 255 = 0.50196...
        let (_, alpha) = hex_to_rgb("#00000080").unwrap();
        assert_eq!(alpha, Some(0.501));
        let (_, alpha) = hex_to_rgb("#000000ff").unwrap();
        assert_eq!(alpha, Some(1.0));
        let (_, alpha) = hex_to_rgb("#00000000").unwrap();
        assert_eq!(alpha, Some(0.0));
    }

    #[test]
    fn decimalize_values() {
        assert_eq!(decimalize(-3.0), 0.0);
        assert_eq!(decimalize(0.25), 0.25);
        assert_eq!(decimalize(1.0), 1.0);
        assert_eq!(decimalize(254.0), 0.996);
    }

    #[test]
    fn hex_with_alpha() {
        let rgb = Rgb::new(255.0, 0.0, 255.0);
        assert_eq!(rgb_to_hex(&rgb, Some(1.0)), "#ff00ffff");
        assert_eq!(rgb_to_hex(&rgb, Some(2.0)), "#ff00ffff");
        assert_eq!(rgb_to_hex(&rgb, Some(-1.0)), "#ff00ff00");
        assert_eq!(rgb_to_hex(&rgb, Some(0.5)), "#ff00ff7f");
    }

    #[test]
    fn invalid_hex() {
        assert!(matches!(
            hex_to_rgb("#12345"),
            Err(Error::InvalidColorValue { argument: "hex", .. })
        ));
        assert!(hex_to_rgb("#zzz").is_err());
    }

    #[test]
    fn value_conversions() {
        #[rustfmt::skip]
        let colors = [
            ("#d2691e", (0.6344, 0.155,  50.27)),
            ("#ff00ff", (0.7017, 0.3225, 328.36)),
            ("#be0032", (0.5074, 0.2036, 19.31)),
            ("#123456", (0.3192, 0.0725, 251.17)),
            ("#ffffff", (1.0,    0.0,    0.0)),
        ];

        for (hex, (l, c, h)) in colors {
            assert_eq!(to_oklch(hex).unwrap(), Oklch::new(l, c, h), "{hex}");
        }

        assert_eq!(to_lch([255.0, 0.0, 255.0]).unwrap(), Lch::new(60.32, 115.54, 328.23));
        assert_eq!(to_hex([255u8, 0, 255]).unwrap(), "#ff00ff");
        assert_eq!(to_hex([255.0, 0.0, 255.0, 0.5]).unwrap(), "#ff00ff7f");
    }

    #[test]
    fn oklch_is_accepted_only_where_documented() {
        let oklch = Oklch::new(0.6344, 0.155, 50.27);
        assert_eq!(to_oklch(oklch).unwrap(), oklch);
        assert!(to_oklab(oklch).is_ok());
        assert!(to_lab(oklch).is_err());
        assert!(to_hex(oklch).is_err());
        assert!(lightness(oklch).is_err());
    }
}
