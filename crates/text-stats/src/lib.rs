//! Descriptive statistics for a piece of text: counts, reading time, syllables,
//! Flesch reading ease, word-length distribution and length-based highlighting.
//!
//! Analysis is a pure function of the text, the options and the static language
//! tables. It never fails; empty or whitespace-only input yields a zeroed result.

pub mod language;
pub mod options;
pub mod readability;
pub mod sentences;
pub mod stopwords;
pub mod syllables;
pub mod tokens;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use language::{FixedLanguage, LanguageDetector, WhatlangDetector};
pub use options::{AnalysisOptions, RawAnalysisOptions};
pub use readability::readability_description;

/// Words per minute used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// One bar of the word-length chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub length: usize,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub word_count: usize,
    pub char_count: usize,
    /// Minutes, rounded up.
    pub reading_time: usize,
    pub syllable_count: usize,
    pub readability_score: f64,
    /// Ascending by length, one bucket per distinct length.
    pub word_length_distribution: Vec<LengthBucket>,
    pub highlighted_words: BTreeSet<String>,
    pub sentence_count: usize,
    /// 2-letter code whose stopword table was consulted.
    pub language: String,
}

impl AnalysisResult {
    pub fn readability_description(&self) -> &'static str {
        readability_description(self.readability_score)
    }
}

/// Text analyzer with a pluggable language detector.
pub struct Analyzer<D = WhatlangDetector> {
    detector: D,
}

impl Default for Analyzer<WhatlangDetector> {
    fn default() -> Self {
        Self { detector: WhatlangDetector::new() }
    }
}

impl<D: LanguageDetector> Analyzer<D> {
    pub fn with_detector(detector: D) -> Self {
        Self { detector }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str, options: &AnalysisOptions) -> AnalysisResult {
        let processed = if options.ignore_punctuation {
            tokens::strip_punctuation(text)
        } else {
            text.to_owned()
        };

        let language = self.detector.detect(text);
        let stop_set = stopwords::for_language(language);
        tracing::debug!(language, stopwords = stop_set.len(), "language detected");

        let mut words = tokens::words(&processed);
        if options.ignore_stopwords {
            words.retain(|w| !stopwords::is_stopword(stop_set, w));
        }

        let word_count = words.len();
        let sentence_count = sentences::count(text);
        let syllable_count: usize = words.iter().map(|w| syllables::count(w)).sum();

        AnalysisResult {
            word_count,
            char_count: char_count(text, options.include_spaces),
            reading_time: word_count.div_ceil(WORDS_PER_MINUTE),
            syllable_count,
            readability_score: readability::flesch_reading_ease(
                word_count,
                sentence_count,
                syllable_count,
            ),
            word_length_distribution: length_distribution(&words),
            highlighted_words: highlighted(&words, options),
            sentence_count,
            language: language.to_owned(),
        }
    }
}

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::default);

/// Analyzes `text` with the default detector and built-in stopword tables.
pub fn analyze(text: &str, options: &AnalysisOptions) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text, options)
}

fn char_count(text: &str, include_spaces: bool) -> usize {
    if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|c| !c.is_whitespace()).count()
    }
}

fn length_distribution(words: &[&str]) -> Vec<LengthBucket> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for w in words {
        let len = tokens::word_len(w);
        if len > 0 {
            *counts.entry(len).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(length, count)| LengthBucket { length, count })
        .collect()
}

fn highlighted(words: &[&str], options: &AnalysisOptions) -> BTreeSet<String> {
    if !options.highlights() {
        return BTreeSet::new();
    }
    words
        .iter()
        .filter(|w| options.length_in_bounds(tokens::word_len(w)))
        .map(|w| (*w).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Analyzer<FixedLanguage> {
        Analyzer::with_detector(FixedLanguage("en"))
    }

    #[test]
    fn distribution_is_sorted_and_complete() {
        let dist = length_distribution(&["aa", "b", "cc", "dddd", "e"]);
        assert_eq!(
            dist,
            vec![
                LengthBucket { length: 1, count: 2 },
                LengthBucket { length: 2, count: 2 },
                LengthBucket { length: 4, count: 1 },
            ]
        );
    }

    #[test]
    fn highlighting_is_disabled_without_bounds() {
        let r = english().analyze("cat dog elephant", &AnalysisOptions::default());
        assert!(r.highlighted_words.is_empty());
    }

    #[test]
    fn highlighting_deduplicates_case_sensitively() {
        let opts = AnalysisOptions { max_word_length: Some(3), ..Default::default() };
        let r = english().analyze("cat Cat cat horse", &opts);
        let expected: BTreeSet<String> = ["Cat", "cat"].into_iter().map(String::from).collect();
        assert_eq!(r.highlighted_words, expected);
    }

    #[test]
    fn char_count_without_spaces() {
        assert_eq!(char_count("a b\tc\n", true), 6);
        assert_eq!(char_count("a b\tc\n", false), 3);
    }

    #[test]
    fn reports_detected_language() {
        let r = Analyzer::with_detector(FixedLanguage("nl")).analyze("de kat", &AnalysisOptions::default());
        assert_eq!(r.language, "nl");
    }

    #[test]
    fn result_serializes_camel_case() {
        let r = english().analyze("Hi.", &AnalysisOptions::default());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["wordCount"], 1);
        assert_eq!(v["readingTime"], 1);
        assert!(v["wordLengthDistribution"].is_array());
        assert!(v["highlightedWords"].is_array());
    }
}
