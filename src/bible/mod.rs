//! Read-only verse text and audio timing tables
//!
//! The dataset is built once on first access and never mutated, so it can be
//! shared between request handlers without synchronization.

mod sample;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::models::verse::{ParallelItem, SearchHit};

/// Maximum number of characters returned in a search snippet
pub const SNIPPET_CHARS: usize = 160;

static SAMPLE: Lazy<SampleTextStore> = Lazy::new(sample::build);

/// Shared handle to the built-in sample dataset
pub fn sample() -> &'static SampleTextStore {
    &SAMPLE
}

/// In-memory verse store keyed by translation, then reference.
///
/// Both levels keep insertion order, which is also the search scan order.
#[derive(Debug)]
pub struct SampleTextStore {
    texts: IndexMap<String, IndexMap<String, String>>,
    timings: IndexMap<String, Vec<f64>>,
    languages: Vec<String>,
}

impl SampleTextStore {
    /// Translations available in the dataset
    pub fn translations(&self) -> Vec<String> {
        self.texts.keys().cloned().collect()
    }

    pub fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    /// Verse text for a translation and reference
    pub fn lookup(&self, translation: &str, reference: &str) -> Option<&str> {
        self.texts
            .get(translation)
            .and_then(|verses| verses.get(reference))
            .map(String::as_str)
    }

    /// Look up one reference across several translations, skipping the ones
    /// that do not contain it.
    pub fn lookup_parallel<'a, I>(&self, reference: &str, translations: I) -> Vec<ParallelItem>
    where
        I: IntoIterator<Item = &'a str>,
    {
        translations
            .into_iter()
            .filter_map(|translation| {
                self.lookup(translation, reference).map(|text| ParallelItem {
                    translation: translation.to_string(),
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Word timings for a reference, empty when none are recorded
    pub fn timings(&self, reference: &str) -> Vec<f64> {
        self.timings.get(reference).cloned().unwrap_or_default()
    }

    /// Case-insensitive substring scan over verse text.
    ///
    /// Restricted to `translation` when given; an unknown translation yields
    /// no hits. Results keep scan order and are cut at `limit`.
    pub fn search(&self, query: &str, translation: Option<&str>, limit: usize) -> Vec<SearchHit> {
        let needle = query.to_lowercase();

        let scanned: Vec<(&String, &IndexMap<String, String>)> = match translation {
            Some(name) => self.texts.get_key_value(name).into_iter().collect(),
            None => self.texts.iter().collect(),
        };

        scanned
            .into_iter()
            .flat_map(|(translation, verses)| {
                verses
                    .iter()
                    .map(move |(reference, text)| (translation, reference, text))
            })
            .filter(|(_, _, text)| text.to_lowercase().contains(&needle))
            .take(limit)
            .map(|(translation, reference, text)| SearchHit {
                reference: reference.clone(),
                translation: translation.clone(),
                snippet: snippet(text),
            })
            .collect()
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
