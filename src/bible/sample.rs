//! Built-in sample dataset

use indexmap::IndexMap;

use super::SampleTextStore;

const ESV: &[(&str, &str)] = &[
    (
        "John 3:16",
        "For God so loved the world, that he gave his only Son, that whoever believes in him should not perish but have eternal life.",
    ),
    ("Psalm 23:1", "The Lord is my shepherd; I shall not want."),
];

const NIV: &[(&str, &str)] = &[
    (
        "John 3:16",
        "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
    ),
    ("Psalm 23:1", "The Lord is my shepherd, I lack nothing."),
];

/// Word start offsets in seconds
const JOHN_3_16_TIMINGS: &[f64] = &[
    0.0, 0.5, 0.8, 1.1, 1.6, 2.1, 2.5, 2.9, 3.4, 3.8, 4.3, 4.8, 5.2, 5.7, 6.3,
];

pub(super) fn build() -> SampleTextStore {
    let mut texts = IndexMap::new();
    for (translation, verses) in [("ESV", ESV), ("NIV", NIV)] {
        let verses: IndexMap<String, String> = verses
            .iter()
            .map(|(reference, text)| (reference.to_string(), text.to_string()))
            .collect();
        texts.insert(translation.to_string(), verses);
    }

    let mut timings = IndexMap::new();
    timings.insert("John 3:16".to_string(), JOHN_3_16_TIMINGS.to_vec());

    SampleTextStore {
        texts,
        timings,
        languages: vec!["en".to_string()],
    }
}
