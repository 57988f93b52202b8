//! HTTP transport for fetching documentation pages.

use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// HTTP client for fetching the table-of-contents page and per-entry
/// detail pages.
///
/// Makes exactly one attempt per call; retry policy, if any, belongs to
/// the caller. The request timeout is the only bound on a hung transfer.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new fetcher with the default 30 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Creates a new fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cfndoc/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches a URL and returns the full response body as text.
    ///
    /// Non-success status codes and connection failures both surface as
    /// [`Error::Network`].
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let content = response.text().await?;

        info!("fetched {} bytes from {}", content.len(), url);

        Ok(content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetcher_creation() {
        let result = Fetcher::new();
        assert!(result.is_ok(), "Fetcher creation should succeed");
    }

    #[tokio::test]
    async fn test_fetch_returns_body() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;

        let content = "<html><body><a class=\"awstoc\">AWS::S3::Bucket</a></body></html>";

        Mock::given(method("GET"))
            .and(path("/template-reference.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(content))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new()?;
        let url = format!("{}/template-reference.html", mock_server.uri());

        let body = fetcher.fetch(&url).await?;
        assert_eq!(body, content);

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_404_is_network_error() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.html"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new()?;
        let url = format!("{}/missing.html", mock_server.uri());

        match fetcher.fetch(&url).await {
            Err(Error::Network(e)) => {
                assert_eq!(e.status().map(|s| s.as_u16()), Some(404));
            },
            Err(e) => panic!("Expected Network error, got: {e}"),
            Ok(_) => panic!("Expected error for 404 response"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_500_is_network_error() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/error.html"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new()?;
        let url = format!("{}/error.html", mock_server.uri());

        let result = fetcher.fetch(&url).await;
        assert!(matches!(result, Err(Error::Network(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_timeout() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/slow.html"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("slow content")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_timeout(Duration::from_millis(100))?;
        let url = format!("{}/slow.html", mock_server.uri());

        let result = fetcher.fetch(&url).await;
        assert!(result.is_err(), "Slow request should time out");

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() -> anyhow::Result<()> {
        let fetcher = Fetcher::with_timeout(Duration::from_millis(500))?;

        // Nothing listens on this port.
        let result = fetcher.fetch("http://127.0.0.1:9/unreachable.html").await;
        assert!(matches!(result, Err(Error::Network(_))));

        Ok(())
    }
}
