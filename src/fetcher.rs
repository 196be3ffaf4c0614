// src/fetcher.rs
use crate::config::FetchConfig;
use crate::models::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetches one page and returns its body text. Bare hosts default to
    /// `http://`; non-success statuses and network failures are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = normalize_url(url);
        let parsed = Url::parse(&url).map_err(|e| format!("invalid URL '{}': {}", url, e))?;

        debug!("Fetching {}", parsed);
        let response = self.client.get(parsed).send().await?.error_for_status()?;
        let body = response.text().await?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Prepends `http://` when the user supplies a bare host.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_url;

    #[test]
    fn bare_host_gains_http_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
    }

    #[test]
    fn explicit_schemes_are_untouched() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("HTTP://example.com"), "HTTP://example.com");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_url("  example.com  "), "http://example.com");
    }
}
