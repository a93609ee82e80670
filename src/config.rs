//! Startup Configuration
//!
//! The API URL is the only setting. The host page may override it with
//! `<meta name="portfolio-api-url" content="...">`.

/// Mock-server endpoint used when the host page does not name one
pub const DEFAULT_API_URL: &str = "http://localhost:3000/portfolio";

pub const API_URL_META: &str = "portfolio-api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from an optional override; blank values fall back to the default
    pub fn from_override(api_url: Option<String>) -> Self {
        match api_url.map(|url| url.trim().to_string()) {
            Some(url) if !url.is_empty() => Self { api_url: url },
            _ => Self::default(),
        }
    }

    /// Read the override from the host page's meta tag
    pub fn from_document() -> Self {
        let api_url = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{}\"]", API_URL_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));
        Self::from_override(api_url)
    }
}
