use async_trait::async_trait;
use serde_json::Value;

use crate::error::AnalysisError;

/// A freeform report plus the raw citation records that grounded it.
#[derive(Clone, Debug, Default)]
pub struct GroundedReply {
    /// Report text; None when the provider produced no candidates
    pub text: Option<String>,
    /// Opaque grounding-chunk records, in citation order
    pub grounding_chunks: Vec<Value>,
}

/// Narrow capability surface over the generative-language provider.
///
/// Exactly two operations exist: a schema-constrained verdict and a
/// search-grounded freeform report. The two modes are mutually exclusive in
/// the provider contract (structured output cannot be combined with the
/// search tool), which is why the report arrives as unstructured text.
/// Implementations hold no per-call state; concurrent calls are safe but
/// not serialized.
#[async_trait]
pub trait LanguageApi: Send + Sync {
    fn name(&self) -> &'static str;

    /// Ask for a JSON payload conforming to `schema`. Returns the raw
    /// payload text, or None when the provider returned no content.
    async fn structured_verdict(
        &self,
        system_prompt: &str,
        user_input: &str,
        schema: Value,
    ) -> Result<Option<String>, AnalysisError>;

    /// Ask for a freeform report with web-search grounding enabled.
    async fn grounded_report(&self, prompt: &str) -> Result<GroundedReply, AnalysisError>;
}
