//! API Configuration
//!
//! Where the pricing scheme collection lives.

/// Base URL used when `PRICESCHEME_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5500";

/// Path of the collection endpoint under the base URL
pub const COLLECTION_PATH: &str = "pricescheme";

/// Collection endpoint configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Full URL of the `/pricescheme` collection
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), COLLECTION_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("PRICESCHEME_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}
