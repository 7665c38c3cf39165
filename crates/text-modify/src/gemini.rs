//! `generateContent` client for Google's Gemini API.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;
use crate::Generator;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Reads `GEMINI_API_KEY` (or `GOOGLE_API_KEY`), `WORDWISE_MODEL` and `WORDWISE_API_BASE`.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")),
            model: non_empty("WORDWISE_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("WORDWISE_API_BASE").unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ServiceError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, its parts concatenated.
    pub(crate) fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Decodes a candidate's text as JSON, tolerating a surrounding Markdown code fence.
pub(crate) fn decode_json(text: &str) -> Result<Value, ServiceError> {
    let trimmed = text.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);
    Ok(serde_json::from_str(unfenced.trim())?)
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Value, ServiceError> {
        let key = self.config.api_key.as_deref().ok_or(ServiceError::MissingApiKey)?;
        let body = GenerateRequest {
            contents: [Content { role: "user", parts: [Part { text: prompt }] }],
            generation_config: GenerationConfig { response_mime_type: "application/json" },
        };

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "calling generateContent");
        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status: status.as_u16(), body });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed.into_text().ok_or(ServiceError::EmptyResponse)?;
        decode_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let config = GeminiConfig {
            base_url: "http://localhost:9000/v1/".into(),
            model: "m1".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:9000/v1/models/m1:generateContent");
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content { role: "user", parts: [Part { text: "hi" }] }],
            generation_config: GenerationConfig { response_mime_type: "application/json" },
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn extracts_first_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"text\":"},{"text":"\"ok\"}"}]}},
                     {"content":{"parts":[{"text":"ignored"}]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_text().as_deref(), Some(r#"{"text":"ok"}"#));
    }

    #[test]
    fn missing_candidates_yield_nothing() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(resp.into_text().is_none());
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates":[{}]}"#).unwrap();
        assert!(resp.into_text().is_none());
    }

    #[test]
    fn decodes_fenced_json() {
        let v = decode_json("```json\n{\"summary\": \"short\"}\n```").unwrap();
        assert_eq!(v["summary"], "short");
        let v = decode_json(" {\"text\": \"plain\"} ").unwrap();
        assert_eq!(v["text"], "plain");
        assert!(decode_json("not json").is_err());
    }

    #[tokio::test]
    async fn refuses_to_call_without_key() {
        let client = GeminiClient::new(GeminiConfig::default()).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingApiKey));
    }
}
