use serde::{Deserialize, Serialize};

/// Market sentiment classification, restricted to the three values the
/// provider schema allows.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

/// Typed verdict for a single piece of news text.
///
/// All six fields are required on the wire (camelCase names); a missing or
/// mistyped field is a validation failure, never a best-effort default.
/// Constructed once per analysis call and immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// -1.0 (very negative) to 1.0 (very positive)
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    /// 0.0 to 1.0
    pub confidence: f64,
    /// Key financial entities (companies, tickers, commodities), may be empty
    pub entities: Vec<String>,
    pub summary: String,
    pub market_prediction: String,
}

/// One typed section of a live market report, in source-text order.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportSection {
    /// Aggregate fear/greed index on a 0-100 scale
    SentimentIndex { score: u32 },
    MarketPrediction { text: String },
    /// Preformatted headline digest, internal line breaks preserved
    Headlines { text: String },
    /// Anything that failed classification, kept verbatim
    Generic { text: String },
}

/// A web citation backing the live report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// One complete live-analysis snapshot. Superseded wholesale on each
/// refresh; never merged incrementally.
#[derive(Clone, Debug, Serialize)]
pub struct LiveMarketData {
    /// Raw report text, kept for re-parsing
    pub analysis_text: String,
    /// Citation order as the provider supplied it
    pub sources: Vec<GroundingSource>,
    /// Local capture time, set once at response receipt
    pub timestamp: String,
}
