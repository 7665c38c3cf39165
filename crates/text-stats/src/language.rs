//! Language detection used to pick a stopword table.
//!
//! Detection only ever answers with one of a small closed set of languages and
//! falls back to English when the sample is too short or nothing matches.

use whatlang::{Detector, Lang};

/// Code used when detection is inconclusive.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Samples shorter than this many chars are not worth detecting.
pub const MIN_SAMPLE_CHARS: usize = 3;

/// Upper bound on the chars handed to the detector.
pub const MAX_SAMPLE_CHARS: usize = 4096;

/// Languages the detector may answer with.
pub const CANDIDATES: [Lang; 8] = [
    Lang::Eng,
    Lang::Spa,
    Lang::Fra,
    Lang::Deu,
    Lang::Rus,
    Lang::Ita,
    Lang::Por,
    Lang::Nld,
];

/// Maps a text sample to a 2-letter language code.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> &'static str;
}

/// Trigram detector restricted to [`CANDIDATES`].
pub struct WhatlangDetector {
    inner: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self { inner: Detector::with_allowlist(CANDIDATES.to_vec()) }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> &'static str {
        let sample = sample(text);
        if sample.chars().count() < MIN_SAMPLE_CHARS {
            return DEFAULT_LANGUAGE;
        }
        match self.inner.detect_lang(sample) {
            Some(lang) => short_code(lang.code()),
            None => DEFAULT_LANGUAGE,
        }
    }
}

/// Always answers with the same code. Handy when the language is known up front.
#[derive(Clone, Copy, Debug)]
pub struct FixedLanguage(pub &'static str);

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> &'static str {
        self.0
    }
}

/// Truncates a 3-letter code to its first two letters (`eng` -> `en`, `spa` -> `sp`).
pub fn short_code(code: &'static str) -> &'static str {
    code.get(..2).unwrap_or(DEFAULT_LANGUAGE)
}

fn sample(text: &str) -> &str {
    match text.char_indices().nth(MAX_SAMPLE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_samples_default_to_english() {
        let d = WhatlangDetector::new();
        assert_eq!(d.detect(""), "en");
        assert_eq!(d.detect("ab"), "en");
    }

    #[test]
    fn truncates_three_letter_codes() {
        assert_eq!(short_code("eng"), "en");
        assert_eq!(short_code("spa"), "sp");
        assert_eq!(short_code("nld"), "nl");
        assert_eq!(short_code("x"), "en");
    }

    #[test]
    fn detects_long_english_prose() {
        let text = "The quick brown fox jumps over the lazy dog while the children \
                    watch from the window and their parents prepare dinner in the kitchen.";
        assert_eq!(WhatlangDetector::new().detect(text), "en");
    }

    #[test]
    fn detects_long_german_prose() {
        let text = "Der schnelle braune Fuchs springt über den faulen Hund, während die \
                    Kinder aus dem Fenster schauen und ihre Eltern das Abendessen in der Küche vorbereiten.";
        assert_eq!(WhatlangDetector::new().detect(text), "de");
    }

    #[test]
    fn sample_respects_char_boundaries() {
        let text = "é".repeat(MAX_SAMPLE_CHARS + 10);
        assert_eq!(sample(&text).chars().count(), MAX_SAMPLE_CHARS);
    }

    #[test]
    fn fixed_detector_ignores_input() {
        assert_eq!(FixedLanguage("fr").detect("hello there"), "fr");
    }
}
