use rust_marketpulse::api::{run_server, AppState};
use rust_marketpulse::config::AppConfig;
use rust_marketpulse::llm::GeminiClient;
use rust_marketpulse::services::refresher::AutoRefreshService;
use std::sync::{Arc, Mutex};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    dotenvy::dotenv().ok();

    info!("Starting MarketPulse Rust...");

    // Load Configuration
    let config = AppConfig::load();
    info!("Loaded Configuration: {:?}", config);

    // Initialize Provider Client
    info!("Initializing AI Client...");
    let api_key = config.gemini.resolve_api_key();
    let base_url = config.gemini.base_url.clone();
    if let Some(url) = &base_url {
        info!("Using Custom Provider Base URL: {}", url);
    }

    let model = config.gemini.model.clone();
    info!("Using Provider Model: {}", model);

    let client = GeminiClient::new(api_key, base_url, model);

    // Create App State
    let app_state = Arc::new(AppState {
        llm: Arc::new(client),
        live: Mutex::new(None),
        config: config.clone(),
    });

    // Start Auto-Refresh Service (keeps the live snapshot warm)
    match config.auto_refresh.as_ref().filter(|r| r.enabled) {
        Some(refresh) => {
            let base = format!("http://localhost:{}", config.server_port);
            info!("🔄 Starting Auto-Refresh Service for: {}", base);
            let refresher = AutoRefreshService::new(base);
            if let Err(e) = refresher.start(&refresh.cron).await {
                tracing::warn!("⚠️ Failed to start auto-refresh service: {}", e);
            }
        }
        None => {
            info!("ℹ️ Auto-refresh disabled - trigger POST /live/refresh manually");
        }
    }

    // Start API Server
    info!("Initializing API Server...");
    run_server(app_state).await;

    Ok(())
}
