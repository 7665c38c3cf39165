//! Export of analyses: a comparison report of original and modified text,
//! rendered as JSON or CSV artifacts.

pub mod report;
pub mod table;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use text_stats::{analyze, AnalysisOptions, RawAnalysisOptions};

pub use report::ComparisonReport;
pub use table::to_csv;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub formats: Vec<ExportFormat>,
    pub original_text: String,
    #[serde(default)]
    pub original_options: RawAnalysisOptions,
    #[serde(default)]
    pub modified_text: Option<String>,
    #[serde(default)]
    pub modified_options: RawAnalysisOptions,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum OutputArtifact {
    Json { data: serde_json::Value },
    Csv { data: String },
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ExportResponse {
    pub artifacts: Vec<OutputArtifact>,
}

/// Analyzes both sides with their own options and builds the report.
pub fn build_report(req: &ExportRequest) -> ComparisonReport {
    let original = analyze(&req.original_text, &AnalysisOptions::from(&req.original_options));
    let report = ComparisonReport::new(req.original_text.clone(), original);
    match &req.modified_text {
        Some(text) => {
            let modified = analyze(text, &AnalysisOptions::from(&req.modified_options));
            report.with_modified(text.clone(), modified)
        }
        None => report,
    }
}

/// Renders a report in each requested format, in request order.
pub fn render(report: &ComparisonReport, formats: &[ExportFormat]) -> Result<Vec<OutputArtifact>> {
    formats
        .iter()
        .map(|format| -> Result<OutputArtifact> {
            Ok(match format {
                ExportFormat::Json => OutputArtifact::Json { data: report.to_json_value()? },
                ExportFormat::Csv => OutputArtifact::Csv { data: to_csv(report)? },
            })
        })
        .collect()
}

/// Public entry helper: analyze, build the report and render every requested format.
pub fn handle_export(req: ExportRequest) -> Result<ExportResponse> {
    tracing::debug!(formats = ?req.formats, has_modified = req.modified_text.is_some(), "export");
    let report = build_report(&req);
    let artifacts = render(&report, &req.formats)?;
    Ok(ExportResponse { artifacts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(formats: Vec<ExportFormat>) -> ExportRequest {
        ExportRequest {
            formats,
            original_text: "cat dog elephant".into(),
            original_options: RawAnalysisOptions {
                min_word_length: "5".into(),
                ..Default::default()
            },
            modified_text: Some("a cat".into()),
            modified_options: RawAnalysisOptions::default(),
        }
    }

    #[test]
    fn sides_use_their_own_options() {
        let report = build_report(&request(vec![]));
        assert_eq!(report.original_analysis.highlighted_words.len(), 1);
        let modified = report.modified_analysis.unwrap();
        assert_eq!(modified.word_count, 2);
        assert!(modified.highlighted_words.is_empty());
    }

    #[test]
    fn artifacts_follow_requested_order() {
        let resp = handle_export(request(vec![ExportFormat::Csv, ExportFormat::Json])).unwrap();
        assert_eq!(resp.artifacts.len(), 2);
        assert!(matches!(resp.artifacts[0], OutputArtifact::Csv { .. }));
        match &resp.artifacts[1] {
            OutputArtifact::Json { data } => {
                assert_eq!(data["originalAnalysis"]["wordCount"], 3);
                assert_eq!(data["modifiedText"], "a cat");
            }
            other => panic!("expected JSON artifact, got {other:?}"),
        }
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let req: ExportRequest =
            serde_json::from_str(r#"{"formats":["json"],"originalText":"hello"}"#).unwrap();
        assert_eq!(req.formats, vec![ExportFormat::Json]);
        assert!(req.modified_text.is_none());
        assert!(req.original_options.include_spaces);
    }
}
