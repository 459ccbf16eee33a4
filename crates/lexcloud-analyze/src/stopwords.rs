//! Stopword sets and order-preserving filtering.

use rustc_hash::FxHashSet;

/// A set of lowercase stopwords.
///
/// Built per run as the union of the built-in English baseline and any
/// user-supplied additions; immutable once built. Membership is
/// case-insensitive (the probe is lowercased before lookup).
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Build a stopword set for one run.
    ///
    /// `additional` is a comma-separated list: entries are trimmed,
    /// lowercased, and empties dropped. When `use_standard` is false only
    /// the additional words are used.
    #[must_use]
    pub fn build(use_standard: bool, additional: &str) -> Self {
        let mut words: FxHashSet<String> = if use_standard {
            Self::baseline()
        } else {
            FxHashSet::default()
        };
        words.extend(parse_additional(additional));
        Self { words }
    }

    /// An empty set (no filtering).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// The built-in baseline list (English).
    fn baseline() -> FxHashSet<String> {
        stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect()
    }

    /// Check whether a word's lowercase form is in the set.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parse a comma-separated stopword list into lowercase entries.
fn parse_additional(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Remove stopwords from text.
///
/// Splits on whitespace, drops tokens whose lowercase form is in the set,
/// and rejoins the survivors with single spaces, preserving their order.
/// Empty input yields empty output.
#[must_use]
pub fn filter(text: &str, stopwords: &StopwordSet) -> String {
    text.split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
