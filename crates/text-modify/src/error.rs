use std::fmt;

use thiserror::Error;

/// What went wrong talking to the generative service. Logged, never shown to end users.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("no API key configured (set GEMINI_API_KEY or GOOGLE_API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response had no candidate text")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Which service operation a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Modify,
    Summarize,
    Check,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Modify => "modify",
            Operation::Summarize => "summarize",
            Operation::Check => "check",
        })
    }
}

/// Failure as seen by callers. Service detail is collapsed into [`ModifyError::Failed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModifyError {
    #[error("Please enter some text to {0}.")]
    EmptyText(Operation),

    #[error("Failed to {0} text. Please try again.")]
    Failed(Operation),
}

pub type Result<T, E = ModifyError> = std::result::Result<T, E>;
