//! The named color taxonomy colors are classified against.
//!
//! Each [`TaxonomyEntry`] pairs a category name with an anchor color, the
//! coarse [`BasicHue`] buckets it is filed under and a list of analogous
//! common names. The bundled table is the 267 category ISCC-NBS system, see
//! [`Taxonomy::iscc_nbs`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use bitflags::bitflags;
use log::info;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    convert::hex_to_rgb,
    error::{Error, Result},
    models::Oklab,
    value::is_hex_color,
};

mod iscc_nbs;

/// Lightness and saturation modifiers used in ISCC-NBS category names.
pub const LIGHTNESS_DESCRIPTORS: &[&str] = &[
    "Brilliant", "Dark", "Deep", "Light", "Medium", "Moderate", "Pale", "Strong", "Very", "Vivid",
];

/// Hue modifiers used in ISCC-NBS category names.
pub const HUE_DESCRIPTORS: &[&str] = &[
    "Blackish", "Bluish", "Brownish", "Grayish", "Greenish", "Pinkish", "Purplish", "Reddish",
    "Yellowish",
];

/// A coarse hue bucket: 13 basic hues and 5 metallics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum BasicHue {
    Black,
    White,
    /// Also accepted as `Gray`.
    #[serde(alias = "Gray")]
    Grey,
    Red,
    Orange,
    Yellow,
    Olive,
    Green,
    Turquoise,
    Blue,
    Purple,
    Pink,
    Brown,
    Brass,
    Bronze,
    Copper,
    Gold,
    Silver,
}

impl BasicHue {
    /// Every hue in declaration order.
    pub const ALL: [BasicHue; 18] = [
        BasicHue::Black,
        BasicHue::White,
        BasicHue::Grey,
        BasicHue::Red,
        BasicHue::Orange,
        BasicHue::Yellow,
        BasicHue::Olive,
        BasicHue::Green,
        BasicHue::Turquoise,
        BasicHue::Blue,
        BasicHue::Purple,
        BasicHue::Pink,
        BasicHue::Brown,
        BasicHue::Brass,
        BasicHue::Bronze,
        BasicHue::Copper,
        BasicHue::Gold,
        BasicHue::Silver,
    ];

    /// The display name of the hue.
    pub fn name(&self) -> &'static str {
        match self {
            BasicHue::Black => "Black",
            BasicHue::White => "White",
            BasicHue::Grey => "Grey",
            BasicHue::Red => "Red",
            BasicHue::Orange => "Orange",
            BasicHue::Yellow => "Yellow",
            BasicHue::Olive => "Olive",
            BasicHue::Green => "Green",
            BasicHue::Turquoise => "Turquoise",
            BasicHue::Blue => "Blue",
            BasicHue::Purple => "Purple",
            BasicHue::Pink => "Pink",
            BasicHue::Brown => "Brown",
            BasicHue::Brass => "Brass",
            BasicHue::Bronze => "Bronze",
            BasicHue::Copper => "Copper",
            BasicHue::Gold => "Gold",
            BasicHue::Silver => "Silver",
        }
    }

    /// Return true for the metallic buckets.
    pub fn is_metallic(&self) -> bool {
        matches!(
            self,
            BasicHue::Brass | BasicHue::Bronze | BasicHue::Copper | BasicHue::Gold | BasicHue::Silver
        )
    }
}

impl fmt::Display for BasicHue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BasicHue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("gray") {
            return Ok(BasicHue::Grey);
        }

        BasicHue::ALL
            .into_iter()
            .find(|hue| hue.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidTaxonomy(format!("unknown basic hue \"{s}\"")))
    }
}

bitflags! {
    /// A set of [`BasicHue`]s. Iterating with [`ColorRange::hues`] yields
    /// the hues in declaration order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ColorRange : u32 {
        #[allow(missing_docs)]
        const BLACK = 1 << 0;
        #[allow(missing_docs)]
        const WHITE = 1 << 1;
        #[allow(missing_docs)]
        const GREY = 1 << 2;
        #[allow(missing_docs)]
        const RED = 1 << 3;
        #[allow(missing_docs)]
        const ORANGE = 1 << 4;
        #[allow(missing_docs)]
        const YELLOW = 1 << 5;
        #[allow(missing_docs)]
        const OLIVE = 1 << 6;
        #[allow(missing_docs)]
        const GREEN = 1 << 7;
        #[allow(missing_docs)]
        const TURQUOISE = 1 << 8;
        #[allow(missing_docs)]
        const BLUE = 1 << 9;
        #[allow(missing_docs)]
        const PURPLE = 1 << 10;
        #[allow(missing_docs)]
        const PINK = 1 << 11;
        #[allow(missing_docs)]
        const BROWN = 1 << 12;
        #[allow(missing_docs)]
        const BRASS = 1 << 13;
        #[allow(missing_docs)]
        const BRONZE = 1 << 14;
        #[allow(missing_docs)]
        const COPPER = 1 << 15;
        #[allow(missing_docs)]
        const GOLD = 1 << 16;
        #[allow(missing_docs)]
        const SILVER = 1 << 17;
    }
}

impl ColorRange {
    /// Return true if the range holds `hue`.
    pub fn has(&self, hue: BasicHue) -> bool {
        self.contains(ColorRange::from(hue))
    }

    /// The hues in this range, in declaration order.
    pub fn hues(&self) -> impl Iterator<Item = BasicHue> + '_ {
        BasicHue::ALL.into_iter().filter(move |&hue| self.has(hue))
    }
}

impl From<BasicHue> for ColorRange {
    fn from(hue: BasicHue) -> Self {
        ColorRange::from_bits_retain(1 << hue as u32)
    }
}

impl FromIterator<BasicHue> for ColorRange {
    fn from_iter<T: IntoIterator<Item = BasicHue>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ColorRange::empty(), |range, hue| range | hue.into())
    }
}

impl Serialize for ColorRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.hues())
    }
}

impl<'de> Deserialize<'de> for ColorRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Vec::<BasicHue>::deserialize(deserializer)?
            .into_iter()
            .collect())
    }
}

/// A named category with its anchor color.
#[derive(Clone, Debug, PartialEq)]
pub struct TaxonomyEntry {
    name: String,
    reference_hex: String,
    color_range: ColorRange,
    analogous: Vec<String>,
    anchor: Oklab,
}

impl TaxonomyEntry {
    /// Create an entry, failing if the reference is not a hex color or the
    /// color range is empty.
    pub fn new(
        name: impl Into<String>,
        reference_hex: impl Into<String>,
        color_range: ColorRange,
        analogous: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        let reference_hex = reference_hex.into();

        if !is_hex_color(&reference_hex) {
            return Err(Error::InvalidTaxonomy(format!(
                "\"{name}\" has an invalid reference color \"{reference_hex}\""
            )));
        }
        if color_range.is_empty() {
            return Err(Error::InvalidTaxonomy(format!(
                "\"{name}\" has an empty color range"
            )));
        }

        let (rgb, _) = hex_to_rgb(&reference_hex)?;

        Ok(Self {
            name,
            reference_hex,
            color_range,
            analogous,
            anchor: rgb.to_oklab(),
        })
    }

    /// The unique category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The anchor color as it appears in the table.
    pub fn reference_hex(&self) -> &str {
        &self.reference_hex
    }

    /// The basic hues the category is filed under.
    pub fn color_range(&self) -> ColorRange {
        self.color_range
    }

    /// Common names for the category, in table order.
    pub fn analogous(&self) -> &[String] {
        &self.analogous
    }

    /// The anchor color in Oklab.
    pub fn anchor(&self) -> &Oklab {
        &self.anchor
    }

    /// The hue term of the name with leading lightness and hue modifiers
    /// removed, e.g. `Orange Yellow` for `Brilliant Orange Yellow`.
    pub fn hue_name(&self) -> &str {
        let mut rest = self.name.as_str();
        while let Some((word, tail)) = rest.split_once(' ') {
            if !LIGHTNESS_DESCRIPTORS.contains(&word) && !HUE_DESCRIPTORS.contains(&word) {
                break;
            }
            rest = tail;
        }
        rest
    }
}

/// An immutable, validated list of taxonomy entries. Lookups scan entries in
/// table order.
#[derive(Clone, Debug)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Build a taxonomy, failing if there are no entries or a name is used
    /// more than once.
    pub fn new(entries: Vec<TaxonomyEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidTaxonomy("no entries".to_string()));
        }

        let mut names = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !names.insert(entry.name.as_str()) {
                return Err(Error::InvalidTaxonomy(format!(
                    "duplicate category \"{}\"",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    fn from_records(records: &[iscc_nbs::Record]) -> Result<Self> {
        let entries = records
            .iter()
            .map(|&(name, hex, hues, analogous)| {
                TaxonomyEntry::new(
                    name,
                    hex,
                    hues.iter().copied().collect(),
                    analogous.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(entries)
    }

    /// The bundled ISCC-NBS taxonomy, validated on first use.
    ///
    /// # Panics
    ///
    /// Panics if the bundled table fails validation; classifying against a
    /// partial table is never valid.
    pub fn iscc_nbs() -> &'static Taxonomy {
        static ISCC_NBS: OnceLock<Taxonomy> = OnceLock::new();

        ISCC_NBS.get_or_init(|| match Taxonomy::from_records(iscc_nbs::ISCC_NBS) {
            Ok(taxonomy) => {
                info!("loaded ISCC-NBS taxonomy with {} categories", taxonomy.len());
                taxonomy
            }
            Err(err) => panic!("bundled ISCC-NBS taxonomy is malformed: {err}"),
        })
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated taxonomy.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its exact category name.
    pub fn get(&self, name: &str) -> Option<&TaxonomyEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Iterate over the entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaxonomyEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Taxonomy {
    type Item = &'a TaxonomyEntry;
    type IntoIter = std::slice::Iter<'a, TaxonomyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
