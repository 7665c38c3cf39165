use std::fmt::Write;

use text_modify::QualityReport;
use text_stats::AnalysisResult;

const BAR_WIDTH: usize = 40;

/// Plain-text summary of an analysis, with a bar chart of word lengths.
pub fn summary(title: &str, a: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "  Words:         {}", a.word_count);
    let _ = writeln!(out, "  Characters:    {}", a.char_count);
    let _ = writeln!(out, "  Reading time:  {} min", a.reading_time);
    let _ = writeln!(out, "  Syllables:     {}", a.syllable_count);
    let _ = writeln!(out, "  Sentences:     {}", a.sentence_count);
    let _ = writeln!(
        out,
        "  Readability:   {:.1} ({})",
        a.readability_score,
        a.readability_description()
    );
    let _ = writeln!(out, "  Language:      {}", a.language);
    if !a.highlighted_words.is_empty() {
        let words: Vec<&str> = a.highlighted_words.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  Highlighted:   {}", words.join(", "));
    }
    if let Some(max) = a.word_length_distribution.iter().map(|b| b.count).max() {
        let _ = writeln!(out, "  Word lengths:");
        for b in &a.word_length_distribution {
            let bar = (b.count * BAR_WIDTH).div_ceil(max);
            let _ = writeln!(out, "    {:>3} | {} {}", b.length, "#".repeat(bar), b.count);
        }
    }
    out
}

pub fn quality(report: &QualityReport) -> String {
    let mut out = String::new();
    for t in &report.tests {
        let mark = if t.passed { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "[{mark}] {}: {}", t.name, t.feedback);
    }
    let _ = writeln!(out, "{}/{} tests passed", report.passed(), report.tests.len());
    out
}
