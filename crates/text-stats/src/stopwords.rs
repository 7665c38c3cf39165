//! Per-language stopword tables keyed by 2-letter code.
//!
//! Tables are built once on first use and never change afterwards. Codes without
//! a table resolve to an empty set so filtering becomes a no-op.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::LANGUAGE;

pub type StopwordSet = HashSet<&'static str>;

static ENGLISH_SET: LazyLock<StopwordSet> = LazyLock::new(|| build(LANGUAGE::English));
static FRENCH_SET: LazyLock<StopwordSet> = LazyLock::new(|| build(LANGUAGE::French));
static GERMAN_SET: LazyLock<StopwordSet> = LazyLock::new(|| build(LANGUAGE::German));
static RUSSIAN_SET: LazyLock<StopwordSet> = LazyLock::new(|| build(LANGUAGE::Russian));
static ITALIAN_SET: LazyLock<StopwordSet> = LazyLock::new(|| build(LANGUAGE::Italian));
static DUTCH_SET: LazyLock<StopwordSet> = LazyLock::new(|| build(LANGUAGE::Dutch));
static EMPTY_SET: LazyLock<StopwordSet> = LazyLock::new(HashSet::new);

/// Loads the ISO list for `language`.
fn build(language: LANGUAGE) -> StopwordSet {
    stop_words::get(language).iter().copied().collect()
}

/// Stopwords for a 2-letter language code, or the empty set.
pub fn for_language(code: &str) -> &'static StopwordSet {
    match code {
        "en" => &*ENGLISH_SET,
        "fr" => &*FRENCH_SET,
        "de" => &*GERMAN_SET,
        "ru" => &*RUSSIAN_SET,
        "it" => &*ITALIAN_SET,
        "nl" => &*DUTCH_SET,
        _ => &*EMPTY_SET,
    }
}

/// Case-insensitive membership test for a token.
pub fn is_stopword(set: &StopwordSet, token: &str) -> bool {
    set.contains(token.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_table_has_common_words() {
        let set = for_language("en");
        for w in ["the", "is", "a", "there", "and", "hello", "world"] {
            assert!(set.contains(w), "{w} should be a stopword");
        }
        assert!(!set.contains("elephant"));
        assert!(set.len() > 1000);
    }

    #[test]
    fn every_supported_language_has_a_table() {
        for (code, word) in [("fr", "le"), ("de", "und"), ("ru", "и"), ("it", "il"), ("nl", "het")] {
            assert!(for_language(code).contains(word), "{code}: {word}");
        }
    }

    #[test]
    fn unknown_codes_are_empty() {
        assert!(for_language("sp").is_empty());
        assert!(for_language("po").is_empty());
        assert!(for_language("").is_empty());
    }

    #[test]
    fn membership_ignores_case() {
        let set = for_language("en");
        assert!(is_stopword(set, "The"));
        assert!(is_stopword(set, "THERE"));
        assert!(!is_stopword(set, "there!"));
    }

    #[test]
    fn tables_are_lowercase() {
        for code in ["en", "fr", "de", "ru", "it", "nl"] {
            for w in for_language(code) {
                assert_eq!(w.to_lowercase(), *w, "{code}: {w}");
            }
        }
    }
}
