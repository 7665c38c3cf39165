use anyhow::{anyhow, Result};
use csv::{QuoteStyle, WriterBuilder};
use text_stats::AnalysisResult;

use crate::report::ComparisonReport;

pub const HEADER: [&str; 3] = ["Metric", "Original", "Modified"];

type Metric = (&'static str, fn(&AnalysisResult) -> String);

const METRICS: [Metric; 9] = [
    ("Word Count", |a| a.word_count.to_string()),
    ("Character Count", |a| a.char_count.to_string()),
    ("Reading Time (min)", |a| a.reading_time.to_string()),
    ("Syllable Count", |a| a.syllable_count.to_string()),
    ("Sentence Count", |a| a.sentence_count.to_string()),
    ("Readability Score", |a| format!("{:.2}", a.readability_score)),
    ("Readability", |a| a.readability_description().to_owned()),
    ("Language", |a| a.language.clone()),
    ("Highlighted Words", |a| join_words(a)),
];

fn join_words(a: &AnalysisResult) -> String {
    a.highlighted_words
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row per metric, original and modified values side by side. Text cells are quoted.
pub fn to_csv(report: &ComparisonReport) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for (name, value) in METRICS {
        let original = value(&report.original_analysis);
        let modified = report.modified_analysis.as_ref().map(value).unwrap_or_default();
        wtr.write_record([name, original.as_str(), modified.as_str()])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_stats::{AnalysisOptions, Analyzer, FixedLanguage};

    fn report() -> ComparisonReport {
        let analyzer = Analyzer::with_detector(FixedLanguage("en"));
        let opts = AnalysisOptions { min_word_length: Some(5), ..Default::default() };
        let original = analyzer.analyze("cat dog elephant giraffe", &opts);
        let modified = analyzer.analyze("cat", &AnalysisOptions::default());
        ComparisonReport::new("cat dog elephant giraffe", original).with_modified("cat", modified)
    }

    #[test]
    fn one_row_per_metric() {
        let csv = to_csv(&report()).unwrap();
        let mut rdr = csv::Reader::from_reader(csv.as_bytes());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), METRICS.len());
        assert_eq!(&rows[0][0], "Word Count");
        assert_eq!(&rows[0][1], "4");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[8][1], "elephant, giraffe");
        assert_eq!(&rows[8][2], "");
    }

    #[test]
    fn word_lists_are_quoted_and_numbers_are_not() {
        let csv = to_csv(&report()).unwrap();
        assert!(csv.contains("\"Highlighted Words\",\"elephant, giraffe\","));
        assert!(csv.contains("\"Word Count\",4,1"));
    }

    #[test]
    fn missing_modified_side_leaves_empty_cells() {
        let analyzer = Analyzer::with_detector(FixedLanguage("en"));
        let r = ComparisonReport::new("hi", analyzer.analyze("hi", &AnalysisOptions::default()));
        let csv = to_csv(&r).unwrap();
        let mut rdr = csv::Reader::from_reader(csv.as_bytes());
        for row in rdr.records() {
            assert_eq!(&row.unwrap()[2], "");
        }
    }
}
