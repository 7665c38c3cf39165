use regex::Regex;
use std::sync::LazyLock;

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    // A run of non-terminators closed by one or more of `.`, `!`, `?`.
    Regex::new(r"[^.!?]+[.!?]+").unwrap()
});

/// Heuristic sentence count. Text with no terminated sentence counts as one
/// sentence unless it is empty.
pub fn count(text: &str) -> usize {
    match SENTENCE.find_iter(text).count() {
        0 if text.is_empty() => 0,
        0 => 1,
        n => n,
    }
}
