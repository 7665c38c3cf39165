use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use text_modify::{
    Generator, Modification, ModifyError, ModifyRequest, Modifier, QualityReport, Summary,
};
use text_report::{handle_export, ExportRequest, ExportResponse};
use text_stats::{analyze, AnalysisOptions, AnalysisResult, RawAnalysisOptions};

#[derive(Clone)]
pub struct AppState {
    modifier: Arc<Modifier<Box<dyn Generator>>>,
}

impl AppState {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self { modifier: Arc::new(Modifier::new(generator)) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze_text))
        .route("/modify", post(modify))
        .route("/summarize", post(summarize))
        .route("/check", post(check))
        .route("/export", post(export))
        .with_state(state)
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<ModifyError> for ApiError {
    fn from(err: ModifyError) -> Self {
        let status = match err {
            ModifyError::EmptyText(_) => StatusCode::BAD_REQUEST,
            ModifyError::Failed(_) => StatusCode::BAD_GATEWAY,
        };
        Self { status, message: err.to_string() }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %format!("{err:#}"), "request failed");
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "internal error".into() }
    }
}

/// An analysis together with its readability band.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    #[serde(flatten)]
    analysis: AnalysisResult,
    readability_description: &'static str,
}

impl From<AnalysisResult> for AnalysisView {
    fn from(analysis: AnalysisResult) -> Self {
        let readability_description = analysis.readability_description();
        Self { analysis, readability_description }
    }
}

fn analyze_view(text: &str, raw: &RawAnalysisOptions) -> AnalysisView {
    analyze(text, &AnalysisOptions::from(raw)).into()
}

#[derive(Deserialize)]
pub struct AnalyzeBody {
    text: String,
    #[serde(default)]
    options: RawAnalysisOptions,
}

async fn analyze_text(Json(body): Json<AnalyzeBody>) -> Json<AnalysisView> {
    Json(analyze_view(&body.text, &body.options))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyBody {
    text: String,
    modifications: Vec<Modification>,
    #[serde(default)]
    original_options: RawAnalysisOptions,
    #[serde(default)]
    modified_options: RawAnalysisOptions,
}

#[derive(Serialize)]
pub struct ModifiedView {
    text: String,
    analysis: AnalysisView,
}

#[derive(Serialize)]
pub struct ModifyReply {
    original: AnalysisView,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<ModifiedView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Rewrites the text and analyzes both versions. The original analysis is
/// returned even when the rewrite fails.
async fn modify(
    State(state): State<AppState>,
    Json(body): Json<ModifyBody>,
) -> (StatusCode, Json<ModifyReply>) {
    let original = analyze_view(&body.text, &body.original_options);
    let req = ModifyRequest { text: body.text, modifications: body.modifications };
    match state.modifier.modify(&req).await {
        Ok(out) => {
            let analysis = analyze_view(&out.text, &body.modified_options);
            let reply = ModifyReply {
                original,
                modified: Some(ModifiedView { text: out.text, analysis }),
                error: None,
            };
            (StatusCode::OK, Json(reply))
        }
        Err(err) => {
            let ApiError { status, message } = ApiError::from(err);
            let reply = ModifyReply { original, modified: None, error: Some(message) };
            (status, Json(reply))
        }
    }
}

#[derive(Deserialize)]
pub struct TextBody {
    text: String,
}

async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<TextBody>,
) -> Result<Json<Summary>, ApiError> {
    Ok(Json(state.modifier.summarize(&body.text).await?))
}

async fn check(
    State(state): State<AppState>,
    Json(body): Json<TextBody>,
) -> Result<Json<QualityReport>, ApiError> {
    Ok(Json(state.modifier.check_quality(&body.text).await?))
}

async fn export(Json(req): Json<ExportRequest>) -> Result<Json<ExportResponse>, ApiError> {
    Ok(Json(handle_export(req)?))
}
