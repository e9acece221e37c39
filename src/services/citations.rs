use serde_json::Value;

use crate::constants::citations::SOURCE_TITLE_PLACEHOLDER;
use crate::types::GroundingSource;

/// Pull web citations out of provider grounding-chunk records.
///
/// A record must carry a nested "web" reference with a string URI to be
/// kept; anything else is skipped silently. A missing title gets the
/// placeholder, a missing URI never does. Input order is preserved.
pub fn extract_sources(chunks: &[Value]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.get("web")?;
            let uri = web.get("uri").and_then(|u| u.as_str())?;
            let title = web
                .get("title")
                .and_then(|t| t.as_str())
                .unwrap_or(SOURCE_TITLE_PLACEHOLDER);

            Some(GroundingSource {
                title: title.to_string(),
                uri: uri.to_string(),
            })
        })
        .collect()
}
