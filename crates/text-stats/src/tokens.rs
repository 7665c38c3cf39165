/// Characters removed when punctuation is ignored. Deliberately a fixed list, not a Unicode class.
pub const PUNCTUATION: [char; 21] = [
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Splits on runs of whitespace, never yielding empty tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Length of a word as the user sees it, in chars.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
