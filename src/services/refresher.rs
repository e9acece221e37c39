//! Scheduled refresh of the live-market snapshot
//! Replaces manual re-triggering with a cron-driven POST to the service's
//! own refresh endpoint

use reqwest::Client;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{info, warn};

pub struct AutoRefreshService {
    base_url: String,
    client: Client,
}

impl AutoRefreshService {
    /// # Arguments
    /// * `base_url` - Where the API is serving (e.g., "http://localhost:3000")
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client for auto-refresh"),
        }
    }

    /// Start the refresh cron job with a six-field cron expression
    /// (e.g., "0 */10 * * * *" for every 10 minutes).
    pub async fn start(&self, cron_expression: &str) -> Result<(), Box<dyn std::error::Error>> {
        let scheduler = JobScheduler::new().await?;

        let url = self.base_url.clone();
        let client = self.client.clone();

        let job = Job::new_async(cron_expression, move |_uuid, _l| {
            let url = url.clone();
            let client = client.clone();

            Box::pin(async move {
                match Self::trigger_refresh(&url, &client).await {
                    Ok(_) => info!("🔄 [REFRESH] Live snapshot refreshed"),
                    Err(e) => warn!("⚠️ [REFRESH] Refresh failed: {}", e),
                }
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        info!(
            "🔄 [REFRESH] Auto-refresh started with schedule: {}",
            cron_expression
        );

        Ok(())
    }

    /// Fire one refresh. A failed refresh leaves the previous snapshot in
    /// place server-side, so errors here are logged and dropped.
    async fn trigger_refresh(
        base_url: &str,
        client: &Client,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let endpoint = format!("{}/live/refresh", base_url);
        let response = client.post(&endpoint).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("Non-success status: {}", response.status()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_refresh_creation() {
        let service = AutoRefreshService::new("http://localhost:3000".to_string());
        assert_eq!(service.base_url, "http://localhost:3000");
    }
}
