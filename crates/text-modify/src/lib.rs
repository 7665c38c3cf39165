//! Client side of the generative text service: chained rewrites, summaries and
//! writing-quality checks.
//!
//! The service is an opaque prompt-to-JSON function behind [`Generator`]. Callers
//! get typed responses or a single generic failure per operation; the detailed
//! cause is logged and otherwise dropped.

pub mod error;
pub mod gemini;
pub mod modification;
pub mod prompt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{ModifyError, Operation, Result, ServiceError};
pub use gemini::{GeminiClient, GeminiConfig};
pub use modification::{
    Modification, ModificationKind, ModifyRequest, ModifyResponse, QualityCheck, QualityReport,
    Summary,
};

/// Sends a prompt and returns the JSON object the model answered with.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<Value, ServiceError>;
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Box<G> {
    async fn generate(&self, prompt: &str) -> std::result::Result<Value, ServiceError> {
        (**self).generate(prompt).await
    }
}

pub struct Modifier<G> {
    generator: G,
}

impl<G: Generator> Modifier<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Applies every step in order, feeding each output into the next step.
    /// Either all steps succeed or nothing is returned.
    #[tracing::instrument(skip_all, fields(text_len = req.text.len(), steps = req.modifications.len()))]
    pub async fn modify(&self, req: &ModifyRequest) -> Result<ModifyResponse> {
        if req.text.trim().is_empty() {
            return Err(ModifyError::EmptyText(Operation::Modify));
        }
        let mut text = req.text.clone();
        for (i, step) in req.modifications.iter().enumerate() {
            let out: ModifyResponse = self
                .call(Operation::Modify, &prompt::modify(&text, step))
                .await?;
            tracing::debug!(step = i, kind = %step.kind, out_len = out.text.len(), "step applied");
            text = out.text;
        }
        Ok(ModifyResponse { text })
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub async fn summarize(&self, text: &str) -> Result<Summary> {
        if text.trim().is_empty() {
            return Err(ModifyError::EmptyText(Operation::Summarize));
        }
        self.call(Operation::Summarize, &prompt::summarize(text)).await
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub async fn check_quality(&self, text: &str) -> Result<QualityReport> {
        if text.trim().is_empty() {
            return Err(ModifyError::EmptyText(Operation::Check));
        }
        self.call(Operation::Check, &prompt::check(text)).await
    }

    async fn call<T: DeserializeOwned>(&self, op: Operation, prompt: &str) -> Result<T> {
        let value = self.generator.generate(prompt).await.map_err(|e| {
            tracing::error!(operation = %op, error = %e, "text service call failed");
            ModifyError::Failed(op)
        })?;
        serde_json::from_value(value).map_err(|e| {
            tracing::error!(operation = %op, error = %e, "unexpected response shape");
            ModifyError::Failed(op)
        })
    }
}
