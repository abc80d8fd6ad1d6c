use pigment::{
    classify::Classifier,
    convert::{hex_to_rgb, rgb_to_hex, to_oklch},
    distance,
    models::{Oklch, Rgb},
    taxonomy::{BasicHue, Taxonomy},
    Color, Error,
};

#[test]
fn anchor_classifies_as_itself() {
    let classifier = Classifier::new();

    let closest = classifier.find_closest_category("#BE0032").unwrap();
    assert_eq!(closest.entry.name(), "Vivid Red");
    assert_eq!(closest.distance, 0.0);

    let data = classifier.classify("#BE0032").unwrap();
    assert_eq!(data.iscc_nbs_category, "Vivid Red");
    assert!(data.color_range.has(BasicHue::Red));
    assert_eq!(data.analogous, ["Fire Engine Red"]);
}

#[test]
fn every_anchor_is_its_own_closest_category() {
    let classifier = Classifier::new();

    for entry in Taxonomy::iscc_nbs() {
        let closest = classifier.find_closest_category(entry.reference_hex()).unwrap();
        assert_eq!(closest.distance, 0.0, "{}", entry.name());
    }
}

#[test]
fn known_colors() {
    let classifier = Classifier::new();

    #[rustfmt::skip]
    let expected = [
        ("#ffffff", "White"),
        ("#000000", "Black"),
        ("#111111", "Black"),
        ("#808080", "Medium Gray"),
        ("#d2691e", "Deep Orange"),
        ("#ff00ff", "Vivid Purple"),
        ("#00ff00", "Brilliant Yellow Green"),
        ("#0000ff", "Vivid Purplish Blue"),
        ("#ffff00", "Brilliant Greenish Yellow"),
        ("#f0a",    "Vivid Purplish Red"),
        ("#fab57f", "Light Orange"),
    ];

    for (hex, category) in expected {
        let data = classifier.classify(hex).unwrap();
        assert_eq!(data.iscc_nbs_category, category, "{hex}");
    }

    let chocolate = classifier.classify("#d2691e").unwrap();
    assert!(chocolate.color_range.has(BasicHue::Orange));
    assert!(chocolate.color_range.has(BasicHue::Brown));

    let black = classifier.classify([0u8, 0, 0]).unwrap();
    assert_eq!(black.analogous, ["Ebony"]);
}

#[test]
fn classification_is_deterministic() {
    let classifier = Classifier::new();

    let first = classifier.classify_with("#3e8ede", true).unwrap();
    let second = classifier.classify_with("#3e8ede", true).unwrap();
    assert_eq!(first, second);
    assert_eq!(classifier.cache().stats().scans, 2);
}

#[test]
fn cached_results_skip_the_scan() {
    let classifier = Classifier::new();

    let forced = classifier.classify_with("#7b3f00", true).unwrap();
    let before = classifier.cache().stats();

    let cached = classifier.classify_with("#7b3f00", false).unwrap();
    let after = classifier.cache().stats();

    assert_eq!(forced, cached);
    assert_eq!(after.scans, before.scans);
    assert_eq!(after.hits, before.hits + 1);
}

#[test]
fn color_facade_uses_the_classifier() {
    let classifier = Classifier::new();
    let color = Color::from_rgb(190, 0, 50);

    assert_eq!(
        color.classify(&classifier).unwrap(),
        classifier.classify("#be0032").unwrap()
    );
    assert_eq!(
        color.find_closest_category(&classifier).unwrap().entry.name(),
        "Vivid Red"
    );

    // Arithmetic can leave the sRGB range; such colors must be clamped first.
    let bright = color * 2.0;
    assert!(matches!(
        bright.classify(&classifier),
        Err(Error::InvalidColorValue { .. })
    ));
    assert!(bright.clamp().classify(&classifier).is_ok());
}

#[test]
fn hex_boundaries() {
    assert_eq!(hex_to_rgb("#fff").unwrap().0, Rgb::new(255.0, 255.0, 255.0));
    assert_eq!(hex_to_rgb("#000000").unwrap().0, Rgb::new(0.0, 0.0, 0.0));
    assert_eq!(rgb_to_hex(&Rgb::new(255.0, 0.0, 255.0), None), "#ff00ff");

    for value in [0u8, 1, 15, 16, 127, 128, 254, 255] {
        let rgb = Rgb::new(value.into(), (255 - value).into(), (value / 2).into());
        assert_eq!(hex_to_rgb(&rgb_to_hex(&rgb, None)).unwrap(), (rgb, None));
    }
}

#[test]
fn white_has_zero_hue() {
    assert_eq!(to_oklch("#ffffff").unwrap(), Oklch::new(1.0, 0.0, 0.0));
}

#[test]
fn hues_stay_below_a_full_turn() {
    assert_eq!(to_oklch([48u8, 1, 21]).unwrap(), Oklch::new(0.2021, 0.0792, 0.0));
    assert_eq!(Color::from_rgb(48, 1, 21).to_oklch().hue, 0.0);
    assert_eq!(Color::from_rgb(74, 15, 39).to_lch().hue, 0.0);
}

#[test]
fn black_and_white_are_furthest_apart() {
    let extreme = distance("#000000", "#ffffff").unwrap();

    let anchors = Taxonomy::iscc_nbs()
        .iter()
        .map(|entry| entry.reference_hex())
        .collect::<Vec<_>>();

    let mut furthest = 0.0_f64;
    for (i, a) in anchors.iter().enumerate() {
        for b in &anchors[i + 1..] {
            furthest = furthest.max(distance(*a, *b).unwrap());
        }
    }

    assert!(extreme >= furthest, "{extreme} < {furthest}");
}
