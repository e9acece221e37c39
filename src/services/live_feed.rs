use std::sync::Arc;

use tracing::info;

use crate::constants::provider::NO_ANALYSIS_FALLBACK;
use crate::error::AnalysisError;
use crate::llm::LanguageApi;
use crate::services::citations::extract_sources;
use crate::types::LiveMarketData;

/// Fixed prompt for the grounded live-report call. The literal section
/// headers match what the segmentation rules in services::report look for.
const LIVE_REPORT_PROMPT: &str = r###"Perform a real-time financial sentiment analysis for the US Stock Market (focus on S&P 500 and major tech sectors).

Tasks:
1. Search for the latest financial news headlines from the last 24 hours.
2. Identify the top 3-5 most impactful stories.
3. For each story, determine the sentiment (Bullish/Bearish/Neutral).
4. Calculate an aggregate 'Daily Sentiment Index' (0-100 scale, where 0 is Extreme Fear, 100 is Extreme Greed).
5. Provide a short-term market prediction based on this news.

Output format:
Provide a clear, structured markdown report.
Start with "## Daily Sentiment Index: [Score]/100".
Follow with "## Market Prediction: [Prediction]".
Then list the "## Key Headlines"."###;

/// Live-report pipeline: one grounded provider call per fetch, citation
/// extraction, and a capture timestamp. Each snapshot is complete in
/// itself; callers replace the previous one wholesale.
pub struct LiveFeedService {
    llm: Arc<dyn LanguageApi>,
}

impl LiveFeedService {
    pub fn new(llm: Arc<dyn LanguageApi>) -> Self {
        Self { llm }
    }

    pub async fn fetch(&self) -> Result<LiveMarketData, AnalysisError> {
        let reply = self.llm.grounded_report(LIVE_REPORT_PROMPT).await?;

        let analysis_text = reply
            .text
            .unwrap_or_else(|| NO_ANALYSIS_FALLBACK.to_string());
        let sources = extract_sources(&reply.grounding_chunks);

        info!(
            "📰 [LIVE] Report captured ({} chars, {} sources)",
            analysis_text.len(),
            sources.len()
        );

        Ok(LiveMarketData {
            analysis_text,
            sources,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        })
    }
}
