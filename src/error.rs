//! Custom error types for the sentiment pipeline
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

/// Failures surfaced by the analysis pipelines.
///
/// The pipelines never retry internally; every failure is fatal for that
/// call and the caller decides whether to re-trigger.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("provider returned no content")]
    EmptyResponse,

    #[error("response validation failed: {0}")]
    Validation(String),

    #[error("provider HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AnalysisError {
    /// True for failures the caller may reasonably re-trigger manually
    /// (transport hiccups and provider-side errors, as opposed to bad input).
    pub fn is_retriable(&self) -> bool {
        !matches!(self, AnalysisError::EmptyInput | AnalysisError::Validation(_))
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Validation(err.to_string())
    }
}
