use serde::{Deserialize, Serialize};

/// Options as they arrive from a form or a JSON body: length bounds are free text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnalysisOptions {
    pub include_spaces: bool,
    pub ignore_punctuation: bool,
    pub ignore_stopwords: bool,
    pub min_word_length: String,
    pub max_word_length: String,
}

impl Default for RawAnalysisOptions {
    fn default() -> Self {
        Self {
            include_spaces: true,
            ignore_punctuation: false,
            ignore_stopwords: false,
            min_word_length: String::new(),
            max_word_length: String::new(),
        }
    }
}

/// Parsed analysis options. Bounds that failed to parse are simply absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    pub include_spaces: bool,
    pub ignore_punctuation: bool,
    pub ignore_stopwords: bool,
    pub min_word_length: Option<i64>,
    pub max_word_length: Option<i64>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_spaces: true,
            ignore_punctuation: false,
            ignore_stopwords: false,
            min_word_length: None,
            max_word_length: None,
        }
    }
}

impl AnalysisOptions {
    /// True when at least one length bound is set.
    pub fn highlights(&self) -> bool {
        self.min_word_length.is_some() || self.max_word_length.is_some()
    }

    /// Whether a word of `len` chars falls inside the configured bounds.
    /// A negative max matches nothing and a negative min matches everything.
    pub fn length_in_bounds(&self, len: usize) -> bool {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        self.min_word_length.map_or(true, |min| len >= min)
            && self.max_word_length.map_or(true, |max| len <= max)
    }
}

impl From<&RawAnalysisOptions> for AnalysisOptions {
    fn from(raw: &RawAnalysisOptions) -> Self {
        Self {
            include_spaces: raw.include_spaces,
            ignore_punctuation: raw.ignore_punctuation,
            ignore_stopwords: raw.ignore_stopwords,
            min_word_length: parse_bound(&raw.min_word_length),
            max_word_length: parse_bound(&raw.max_word_length),
        }
    }
}

impl From<RawAnalysisOptions> for AnalysisOptions {
    fn from(raw: RawAnalysisOptions) -> Self {
        Self::from(&raw)
    }
}

/// Leading-integer parse: `" 12px"` is 12, `"+3"` is 3, `"-2"` is -2, `""` and `"abc"` are unset.
pub fn parse_bound(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Out-of-range values saturate.
    let magnitude: i64 = digits[..end].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_parsing() {
        assert_eq!(parse_bound("5"), Some(5));
        assert_eq!(parse_bound("  7 "), Some(7));
        assert_eq!(parse_bound("+3"), Some(3));
        assert_eq!(parse_bound("12px"), Some(12));
        assert_eq!(parse_bound("2.5"), Some(2));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("-4"), Some(-4));
        assert_eq!(parse_bound(" -1px"), Some(-1));
        assert_eq!(parse_bound("+"), None);
        assert_eq!(parse_bound("-"), None);
        assert_eq!(parse_bound("+-3"), None);
        assert_eq!(parse_bound("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_bound("-99999999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn raw_defaults_match_parsed_defaults() {
        let parsed = AnalysisOptions::from(RawAnalysisOptions::default());
        assert_eq!(parsed, AnalysisOptions::default());
        assert!(!parsed.highlights());
    }

    #[test]
    fn raw_options_deserialize_camel_case() {
        let raw: RawAnalysisOptions = serde_json::from_str(
            r#"{"includeSpaces":false,"ignoreStopwords":true,"minWordLength":"4","maxWordLength":"x"}"#,
        )
        .unwrap();
        let opts = AnalysisOptions::from(raw);
        assert!(!opts.include_spaces);
        assert!(!opts.ignore_punctuation);
        assert!(opts.ignore_stopwords);
        assert_eq!(opts.min_word_length, Some(4));
        assert_eq!(opts.max_word_length, None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let opts = AnalysisOptions {
            min_word_length: Some(3),
            max_word_length: Some(5),
            ..Default::default()
        };
        assert!(!opts.length_in_bounds(2));
        assert!(opts.length_in_bounds(3));
        assert!(opts.length_in_bounds(5));
        assert!(!opts.length_in_bounds(6));
    }

    #[test]
    fn negative_bounds_are_real_bounds() {
        let no_max = AnalysisOptions { max_word_length: Some(-1), ..Default::default() };
        assert!(no_max.highlights());
        assert!(!no_max.length_in_bounds(0));
        assert!(!no_max.length_in_bounds(8));

        let any_min = AnalysisOptions { min_word_length: Some(-3), ..Default::default() };
        assert!(any_min.length_in_bounds(1));
        assert!(any_min.length_in_bounds(40));
    }
}
