use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use text_stats::AnalysisResult;

/// Original text and, optionally, its modified version with their analyses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub original_text: String,
    pub original_analysis: AnalysisResult,
    pub original_readability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_analysis: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_readability: Option<String>,
}

impl ComparisonReport {
    pub fn new(original_text: impl Into<String>, original_analysis: AnalysisResult) -> Self {
        Self {
            original_text: original_text.into(),
            original_readability: original_analysis.readability_description().to_owned(),
            original_analysis,
            modified_text: None,
            modified_analysis: None,
            modified_readability: None,
        }
    }

    pub fn with_modified(mut self, text: impl Into<String>, analysis: AnalysisResult) -> Self {
        self.modified_text = Some(text.into());
        self.modified_readability = Some(analysis.readability_description().to_owned());
        self.modified_analysis = Some(analysis);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing report")
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("serializing report")
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing report JSON")
    }
}
