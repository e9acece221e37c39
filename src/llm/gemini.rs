use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use crate::constants::provider;
use crate::error::AnalysisError;

use super::traits::{GroundedReply, LanguageApi};

/// REST client for the generative-language API.
///
/// Carries no per-request state beyond the connection pool, so a single
/// instance can serve concurrent calls from both pipelines.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: Option<String>, model: String) -> Self {
        let base_url = base_url.unwrap_or_else(|| provider::DEFAULT_BASE_URL.to_string());
        let client = Client::builder()
            .timeout(provider::REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client for provider");

        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    async fn generate(&self, body: Value) -> Result<Value, AnalysisError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = resp.json().await?;
        Ok(data)
    }

    /// Concatenated text of the first candidate's parts, if any.
    fn candidate_text(response: &Value) -> Option<String> {
        let parts = response
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Grounding-chunk records of the first candidate, empty when absent.
    fn grounding_chunks(response: &Value) -> Vec<Value> {
        response
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("groundingMetadata"))
            .and_then(|m| m.get("groundingChunks"))
            .and_then(|g| g.as_array())
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl LanguageApi for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn structured_verdict(
        &self,
        system_prompt: &str,
        user_input: &str,
        schema: Value,
    ) -> Result<Option<String>, AnalysisError> {
        info!("🤖 Sending structured request to provider (Model: {})...", self.model);

        let body = json!({
            "contents": [{ "parts": [{ "text": user_input }] }],
            "systemInstruction": { "parts": [{ "text": system_prompt }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });

        let response = self.generate(body).await?;
        info!("🤖 Structured response received.");

        Ok(Self::candidate_text(&response))
    }

    async fn grounded_report(&self, prompt: &str) -> Result<GroundedReply, AnalysisError> {
        info!("🌐 Sending grounded request to provider (Model: {})...", self.model);

        // responseSchema is not supported together with the search tool, so
        // this call returns freeform text for downstream segmentation.
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
        });

        let response = self.generate(body).await?;
        let chunks = Self::grounding_chunks(&response);
        info!("🌐 Grounded response received ({} citation chunks).", chunks.len());

        Ok(GroundedReply {
            text: Self::candidate_text(&response),
            grounding_chunks: chunks,
        })
    }
}
