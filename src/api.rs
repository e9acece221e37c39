use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::llm::LanguageApi;
use crate::services::live_feed::LiveFeedService;
use crate::services::report::parse_report;
use crate::services::sentiment::SentimentAnalyzer;
use crate::types::LiveMarketData;

pub struct AppState {
    pub llm: Arc<dyn LanguageApi>,
    /// Last successful live snapshot. A failed refresh leaves it untouched;
    /// stale-but-valid data beats no data.
    pub live: Mutex<Option<LiveMarketData>>,
    pub config: AppConfig,
}

pub async fn run_server(state: Arc<AppState>) {
    let port = state.config.server_port;
    let app = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/live", get(get_live))
        .route("/live/refresh", post(refresh_live))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    info!("API Server listening on port {}", port);
    axum::serve(listener, app).await.unwrap();
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(serde::Deserialize)]
struct AnalyzeRequest {
    text: String,
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let analyzer = SentimentAnalyzer::new(state.llm.clone());

    match analyzer.analyze(&req.text).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!("❌ Analysis failed: {}", e);
            error_response(e)
        }
    }
}

async fn get_live(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.live.lock().unwrap().clone();

    match snapshot {
        Some(data) => live_payload(&data).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            "No live report yet. Trigger POST /live/refresh first.",
        )
            .into_response(),
    }
}

async fn refresh_live(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let feed = LiveFeedService::new(state.llm.clone());

    match feed.fetch().await {
        Ok(data) => {
            let payload = live_payload(&data);
            // Last write wins; the previous snapshot is replaced wholesale.
            *state.live.lock().unwrap() = Some(data);
            payload.into_response()
        }
        Err(e) => {
            // Keep whatever snapshot we already had.
            error!("❌ Live refresh failed: {}", e);
            error_response(e)
        }
    }
}

/// Snapshot plus freshly parsed sections, computed from the raw text each
/// time it is served.
fn live_payload(data: &LiveMarketData) -> Json<serde_json::Value> {
    Json(json!({
        "data": data,
        "sections": parse_report(&data.analysis_text),
    }))
}

fn error_response(err: AnalysisError) -> axum::response::Response {
    let status = match &err {
        AnalysisError::EmptyInput => StatusCode::BAD_REQUEST,
        AnalysisError::EmptyResponse
        | AnalysisError::Validation(_)
        | AnalysisError::Provider { .. }
        | AnalysisError::Transport(_) => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(json!({
            "error": err.to_string(),
            "retriable": err.is_retriable(),
        })),
    )
        .into_response()
}
