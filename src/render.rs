//! Render colors as CSS color strings.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Color, Component, Components},
    error::{Error, Result},
    math::round_to,
    models::{Hsl, Lab, Lch, Model, Oklab, Oklch, Rgb},
};

/// The notation a color is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `rgb(r g b)`
    #[default]
    Rgb,
    /// `#rrggbb`
    Hex,
    /// `lab(L% a b)`
    Lab,
    /// `lch(L% C H)`
    Lch,
    /// `hsl(H S% L%)`
    Hsl,
    /// `oklab(L% a b)`
    Oklab,
    /// `oklch(L% C H)`
    Oklch,
}

impl Format {
    /// Every format.
    pub const ALL: [Format; 7] = [
        Format::Rgb,
        Format::Hex,
        Format::Lab,
        Format::Lch,
        Format::Hsl,
        Format::Oklab,
        Format::Oklch,
    ];

    /// The name of the format, which is also the CSS function name.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Rgb => Rgb::NAME,
            Format::Hex => "hex",
            Format::Lab => Lab::NAME,
            Format::Lch => Lch::NAME,
            Format::Hsl => Hsl::NAME,
            Format::Oklab => Oklab::NAME,
            Format::Oklch => Oklch::NAME,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid("format", s))
    }
}

fn function(name: &str, components: [String; 3], alpha: Option<Component>) -> String {
    let [c0, c1, c2] = components;
    match alpha {
        Some(alpha) => format!("{name}({c0} {c1} {c2} / {alpha})"),
        None => format!("{name}({c0} {c1} {c2})"),
    }
}

fn model<M: Model>(model: M, percent: Component, places: [i32; 3]) -> [String; 3] {
    let Components(c0, c1, c2) = model.to_components();
    [
        format!("{}%", round_to(c0 * percent, places[0])),
        round_to(c1, places[1]).to_string(),
        round_to(c2, places[2]).to_string(),
    ]
}

/// Render `color` in `format`. Alpha, when present, is appended after a `/`
/// except in hex, which carries it as a fourth byte.
///
/// ```rust
/// use pigment::{render::{render, Format}, Color};
/// let color = Color::from_rgb(210, 105, 30);
/// assert_eq!(render(&color, Format::Hex), "#d2691e");
/// assert_eq!(render(&color, Format::Oklch), "oklch(63.44% 0.155 50.27)");
/// ```
pub fn render(color: &Color, format: Format) -> String {
    let alpha = color.alpha();

    match format {
        Format::Hex => color.to_hex(),
        Format::Rgb => {
            let rgb = color.rgb();
            let channels = [rgb.red, rgb.green, rgb.blue].map(|c| round_to(c, 2).to_string());
            function(Rgb::NAME, channels, alpha)
        }
        Format::Lab => function(Lab::NAME, model(color.to_lab(), 1.0, [2, 2, 2]), alpha),
        Format::Lch => function(Lch::NAME, model(color.to_lch(), 1.0, [2, 2, 2]), alpha),
        Format::Hsl => {
            let hsl = color.to_hsl();
            let components = [
                round_to(hsl.hue, 2).to_string(),
                format!("{}%", round_to(hsl.saturation * 100.0, 2)),
                format!("{}%", round_to(hsl.lightness * 100.0, 2)),
            ];
            function(Hsl::NAME, components, alpha)
        }
        Format::Oklab => function(Oklab::NAME, model(color.to_oklab(), 100.0, [2, 4, 4]), alpha),
        Format::Oklch => function(Oklch::NAME, model(color.to_oklch(), 100.0, [2, 4, 2]), alpha),
    }
}
