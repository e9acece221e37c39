//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the codebase easier to tune.

use std::time::Duration;

/// Report segmentation constants
pub mod report {
    /// Marker the provider is asked to open each report section with
    pub const SECTION_DELIMITER: &str = "##";

    /// Index reported when the sentiment-index section carries no digits
    pub const DEFAULT_SENTIMENT_INDEX: u32 = 50;

    /// Upper bound of the 0-100 fear/greed scale
    pub const SENTIMENT_INDEX_MAX: u32 = 100;
}

/// Citation extraction constants
pub mod citations {
    /// Title shown for a web source that arrives without one
    pub const SOURCE_TITLE_PLACEHOLDER: &str = "News Source";
}

/// Generative-language provider constants
pub mod provider {
    use super::*;

    /// Default REST endpoint root for the generative-language API
    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

    /// Transport-level timeout for provider calls (the pipelines themselves
    /// impose none)
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Report text used when the grounded call returns no content
    pub const NO_ANALYSIS_FALLBACK: &str = "No analysis generated.";
}
