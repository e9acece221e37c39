use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::llm::LanguageApi;
use crate::types::AnalysisResult;

const SENTIMENT_SYSTEM_PROMPT: &str = "You are a sophisticated financial sentiment analysis engine designed to mimic the output of a Python NLTK/SpaCy pipeline trained on financial news datasets. Be technical, precise, and objective.";

/// Structured-verdict pipeline: one schema-constrained provider call per
/// input text, validated into an [`AnalysisResult`].
///
/// Holds no mutable state; concurrent analyze calls are independent.
pub struct SentimentAnalyzer {
    llm: Arc<dyn LanguageApi>,
}

impl SentimentAnalyzer {
    pub fn new(llm: Arc<dyn LanguageApi>) -> Self {
        Self { llm }
    }

    /// Analyze one piece of news text. Exactly one outbound call; no
    /// caching, no retry. Fails typed on blank input, empty provider
    /// content, or any payload that misses the six-field contract.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let user_input = format!(
            "Analyze the following financial news text for sentiment specifically regarding stock market impact.\n\
             Perform simulated NLTK/SpaCy pipeline tasks: Entity Recognition (NER) and Sentiment Scoring.\n\n\
             Text to analyze: \"{}\"",
            text
        );

        let payload = self
            .llm
            .structured_verdict(SENTIMENT_SYSTEM_PROMPT, &user_input, verdict_schema())
            .await?
            .ok_or(AnalysisError::EmptyResponse)?;

        let result = parse_verdict(&payload)?;
        info!(
            "🧠 [SENTIMENT] {:?} (score {:.3}, confidence {:.2})",
            result.sentiment_label, result.sentiment_score, result.confidence
        );

        Ok(result)
    }
}

/// Deserialize and validate a verdict payload against the six-field
/// contract. Numeric values are taken at face value once type-checked; a
/// domain violation there is a provider contract breach, not ours to patch.
pub fn parse_verdict(payload: &str) -> Result<AnalysisResult, AnalysisError> {
    let result: AnalysisResult = serde_json::from_str(payload).map_err(|e| {
        warn!("🧠 [SENTIMENT] Rejected payload: {}", e);
        AnalysisError::Validation(e.to_string())
    })?;

    if result.summary.trim().is_empty() {
        return Err(AnalysisError::Validation("summary is empty".to_string()));
    }
    if result.market_prediction.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "marketPrediction is empty".to_string(),
        ));
    }

    Ok(result)
}

/// Response schema sent with every structured request. Constrains the
/// provider to the exact six fields and the 3-value label enum so the reply
/// parses without free-text handling.
pub fn verdict_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sentimentScore": {
                "type": "NUMBER",
                "description": "A float between -1.0 (Very Negative) and 1.0 (Very Positive).",
            },
            "sentimentLabel": {
                "type": "STRING",
                "enum": ["Bullish", "Bearish", "Neutral"],
                "description": "The overall market sentiment classification.",
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence score between 0 and 1.",
            },
            "entities": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Key financial entities (companies, tickers, commodities) identified.",
            },
            "summary": {
                "type": "STRING",
                "description": "A one-sentence summary of the financial implication.",
            },
            "marketPrediction": {
                "type": "STRING",
                "description": "Short-term market prediction (e.g., 'Stock likely to rise in short term').",
            },
        },
        "required": [
            "sentimentScore",
            "sentimentLabel",
            "confidence",
            "entities",
            "summary",
            "marketPrediction",
        ],
    })
}
