/// Flesch Reading Ease, clamped to `[0, 100]`. Zero words or sentences score 0.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Human-readable band for a reading-ease score.
pub fn readability_description(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very easy to read. Easily understood by an average 11-year-old student."
    } else if score >= 80.0 {
        "Easy to read. Conversational English for consumers."
    } else if score >= 70.0 {
        "Fairly easy to read."
    } else if score >= 60.0 {
        "Plain English. Easily understood by 13- to 15-year-old students."
    } else if score >= 50.0 {
        "Fairly difficult to read."
    } else if score >= 30.0 {
        "Difficult to read."
    } else {
        "Very difficult to read. Best understood by university graduates."
    }
}
