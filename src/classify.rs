//! Nearest category search over a [`Taxonomy`] with a memoizing cache.
//!
//! ```rust
//! use pigment::{classify::Classifier, taxonomy::BasicHue};
//!
//! let classifier = Classifier::new();
//! let data = classifier.classify("#BE0032").unwrap();
//! assert_eq!(data.iscc_nbs_category, "Vivid Red");
//! assert!(data.color_range.has(BasicHue::Red));
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    config::Config,
    convert::rgb_to_hex,
    distance::DistanceWeights,
    error::{Error, Result},
    models::Oklab,
    taxonomy::{ColorRange, Taxonomy, TaxonomyEntry},
    value::ColorValue,
};

/// The classification of a color: its category, the basic hues the category
/// is filed under and common names for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsccNbsData {
    /// Name of the closest category.
    pub iscc_nbs_category: String,
    /// Basic hues of the category.
    pub color_range: ColorRange,
    /// Common names of the category.
    pub analogous: Vec<String>,
}

impl From<&TaxonomyEntry> for IsccNbsData {
    fn from(entry: &TaxonomyEntry) -> Self {
        Self {
            iscc_nbs_category: entry.name().to_string(),
            color_range: entry.color_range(),
            analogous: entry.analogous().to_vec(),
        }
    }
}

/// The closest entry found by a scan and its distance to the sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match<'t> {
    /// The winning entry.
    pub entry: &'t TaxonomyEntry,
    /// Weighted Oklab distance between the sample and the entry's anchor.
    pub distance: Component,
}

/// Counters describing how a [`ClassificationCache`] has been used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to compute a result.
    pub misses: usize,
    /// Full taxonomy scans, including forced ones.
    pub scans: usize,
}

/// Classification results keyed by the canonical hex of a color (lowercase,
/// no leading `#`, alpha included when present).
///
/// Lookups compute missing entries while holding the lock, so concurrent
/// lookups for the same new color scan the taxonomy once. Entries are never
/// evicted.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: Mutex<HashMap<String, IsccNbsData>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    scans: AtomicUsize,
}

impl ClassificationCache {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, IsccNbsData>> {
        // Entries are plain values, a panic in another thread can not leave
        // the map half written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached result for `key` or compute and store it.
    pub fn get_or_compute(
        &self,
        key: String,
        compute: impl FnOnce() -> Result<IsccNbsData>,
    ) -> Result<IsccNbsData> {
        let mut entries = self.lock();

        if let Some(data) = entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("cache hit for {key}: {}", data.iscc_nbs_category);
            return Ok(data.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("cache miss for {key}");

        let data = compute()?;
        entries.insert(key, data.clone());
        Ok(data)
    }

    /// Store a result, overwriting any previous one.
    pub fn insert(&self, key: String, data: IsccNbsData) {
        self.lock().insert(key, data);
    }

    /// Return the cached result for `key` without touching the counters.
    pub fn get(&self, key: &str) -> Option<IsccNbsData> {
        self.lock().get(key).cloned()
    }

    /// Number of cached colors.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Return true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.scans.store(0, Ordering::Relaxed);
    }

    /// A snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
        }
    }
}

/// Classifies colors against a taxonomy. Create one per process (or per test)
/// and share it by reference; it is `Sync`.
#[derive(Debug)]
pub struct Classifier<'t> {
    taxonomy: &'t Taxonomy,
    weights: DistanceWeights,
    cache: ClassificationCache,
}

impl Classifier<'static> {
    /// A classifier over the bundled ISCC-NBS taxonomy with default weights.
    pub fn new() -> Self {
        Self::with_taxonomy(Taxonomy::iscc_nbs())
    }

    /// A classifier over the bundled taxonomy with the configured weights.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new().with_weights(config.distance)
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Classifier<'t> {
    /// A classifier over `taxonomy` with default weights and an empty cache.
    pub fn with_taxonomy(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            weights: DistanceWeights::default(),
            cache: ClassificationCache::default(),
        }
    }

    /// Replace the distance weights. Cached results computed with the old
    /// weights are dropped. Fails when a weight is negative or not finite.
    pub fn with_weights(self, weights: DistanceWeights) -> Result<Self> {
        weights.validate()?;
        self.cache.clear();
        Ok(Self { weights, ..self })
    }

    /// The taxonomy colors are classified against.
    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// The distance weights used by scans.
    pub fn weights(&self) -> &DistanceWeights {
        &self.weights
    }

    /// The result cache.
    pub fn cache(&self) -> &ClassificationCache {
        &self.cache
    }

    /// Classify a hex or RGB value, answering from the cache when possible.
    pub fn classify(&self, value: impl Into<ColorValue>) -> Result<IsccNbsData> {
        self.classify_with(value, false)
    }

    /// Classify a hex or RGB value. With `uncache` set the cache is not
    /// consulted; the result is recomputed and overwrites the cached one.
    pub fn classify_with(&self, value: impl Into<ColorValue>, uncache: bool) -> Result<IsccNbsData> {
        let (rgb, alpha) = value.into().resolve_rgb("color")?;
        let key = rgb_to_hex(&rgb, alpha).trim_start_matches('#').to_string();
        let sample = rgb.to_oklab();

        if uncache {
            let data = IsccNbsData::from(self.closest(&sample)?.entry);
            self.cache.insert(key, data.clone());
            return Ok(data);
        }

        self.cache
            .get_or_compute(key, || Ok(self.closest(&sample)?.entry.into()))
    }

    /// Scan the taxonomy for the entry closest to a hex or RGB value. The
    /// cache is neither read nor written.
    pub fn find_closest_category(&self, value: impl Into<ColorValue>) -> Result<Match<'t>> {
        let (rgb, _) = value.into().resolve_rgb("color")?;
        self.closest(&rgb.to_oklab())
    }

    /// Linear scan in table order. Ties keep the entry seen first.
    fn closest(&self, sample: &Oklab) -> Result<Match<'t>> {
        self.cache.scans.fetch_add(1, Ordering::Relaxed);

        let mut best: Option<Match<'t>> = None;
        for entry in self.taxonomy {
            let distance = self.weights.distance(sample, entry.anchor());
            trace!("{} at {distance:.6}", entry.name());

            if best.map_or(true, |best| distance < best.distance) {
                best = Some(Match { entry, distance });
            }
        }

        let best = best.ok_or_else(|| Error::InvalidTaxonomy("no entries".to_string()))?;
        debug!(
            "closest category {} at {:.6}",
            best.entry.name(),
            best.distance
        );
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::BasicHue;

    fn small_taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            TaxonomyEntry::new("Red", "#ff0000", BasicHue::Red.into(), vec![]).unwrap(),
            TaxonomyEntry::new("Also Red", "#ff0000", BasicHue::Red.into(), vec![]).unwrap(),
            TaxonomyEntry::new("Blue", "#0000ff", BasicHue::Blue.into(), vec!["Azure".into()])
                .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn ties_keep_the_first_entry() {
        let taxonomy = small_taxonomy();
        let classifier = Classifier::with_taxonomy(&taxonomy);

        let closest = classifier.find_closest_category("#ff0000").unwrap();
        assert_eq!(closest.entry.name(), "Red");
        assert_eq!(closest.distance, 0.0);

        let data = classifier.classify("#0000fe").unwrap();
        assert_eq!(data.iscc_nbs_category, "Blue");
        assert_eq!(data.analogous, ["Azure"]);
    }

    #[test]
    fn cache_keys_are_canonical() {
        let taxonomy = small_taxonomy();
        let classifier = Classifier::with_taxonomy(&taxonomy);

        classifier.classify("#FF0000").unwrap();
        classifier.classify("#f00").unwrap();
        classifier.classify([255u8, 0, 0]).unwrap();

        let stats = classifier.cache().stats();
        assert_eq!((stats.hits, stats.misses, stats.scans), (2, 1, 1));
        assert_eq!(classifier.cache().len(), 1);
        assert!(classifier.cache().get("ff0000").is_some());
    }

    #[test]
    fn alpha_is_part_of_the_key() {
        let taxonomy = small_taxonomy();
        let classifier = Classifier::with_taxonomy(&taxonomy);

        classifier.classify("#ff0000").unwrap();
        classifier.classify([255.0, 0.0, 0.0, 0.5]).unwrap();
        assert_eq!(classifier.cache().len(), 2);
        assert!(classifier.cache().get("ff00007f").is_some());
    }

    #[test]
    fn uncache_overwrites() {
        let taxonomy = small_taxonomy();
        let classifier = Classifier::with_taxonomy(&taxonomy);

        classifier.cache().insert(
            "0000ff".to_string(),
            IsccNbsData {
                iscc_nbs_category: "Stale".to_string(),
                color_range: ColorRange::empty(),
                analogous: vec![],
            },
        );

        assert_eq!(classifier.classify("#0000ff").unwrap().iscc_nbs_category, "Stale");
        assert_eq!(
            classifier.classify_with("#0000ff", true).unwrap().iscc_nbs_category,
            "Blue"
        );
        assert_eq!(classifier.classify("#0000ff").unwrap().iscc_nbs_category, "Blue");
    }

    #[test]
    fn rejects_oklch() {
        let classifier = Classifier::new();
        let oklch = crate::models::Oklch::new(0.5, 0.1, 20.0);
        assert!(matches!(
            classifier.classify(oklch),
            Err(Error::InvalidColorValue { argument: "color", .. })
        ));
        assert!(classifier.find_closest_category(oklch).is_err());
        assert!(classifier.cache().is_empty());
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let negative = DistanceWeights {
            lightness: -5.0,
            ..DistanceWeights::default()
        };
        assert!(matches!(
            Classifier::new().with_weights(negative),
            Err(Error::InvalidWeight { name: "lightness", .. })
        ));

        let nan = DistanceWeights {
            lightness: Component::NAN,
            a: Component::NAN,
            b: Component::NAN,
            chroma: Component::NAN,
        };
        assert!(Classifier::new().with_weights(nan).is_err());

        let config = Config {
            distance: DistanceWeights::default(),
        };
        let white = Classifier::from_config(&config)
            .unwrap()
            .find_closest_category("#ffffff")
            .unwrap();
        assert_eq!(white.entry.name(), "White");
    }

    #[test]
    fn weights_change_the_result() {
        let taxonomy = Taxonomy::new(vec![
            TaxonomyEntry::new("Dark", "#404040", BasicHue::Grey.into(), vec![]).unwrap(),
            TaxonomyEntry::new("Blue", "#0000ff", BasicHue::Blue.into(), vec![]).unwrap(),
        ])
        .unwrap();

        let sample = "#2020a0";
        let default = Classifier::with_taxonomy(&taxonomy);
        let lightness_only = Classifier::with_taxonomy(&taxonomy).with_weights(DistanceWeights {
            lightness: 1.0,
            a: 0.0,
            b: 0.0,
            chroma: 0.0,
        })
        .unwrap();

        assert_eq!(default.find_closest_category(sample).unwrap().entry.name(), "Blue");
        assert_eq!(lightness_only.find_closest_category(sample).unwrap().entry.name(), "Dark");
    }

    #[test]
    fn concurrent_lookups_scan_once() {
        let classifier = Classifier::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| classifier.classify("#d2691e").unwrap());
            }
        });

        let stats = classifier.cache().stats();
        assert_eq!(stats.scans, 1);
        assert_eq!(stats.hits + stats.misses, 8);
    }

    #[test]
    fn serializes_like_the_swatch_api() {
        let classifier = Classifier::new();
        let data = classifier.classify("#ff00ff").unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "iscc_nbs_category": "Vivid Purple",
                "color_range": ["Purple", "Pink"],
                "analogous": ["Magenta"],
            })
        );
    }
}
