//! Document loading for metro-graph
//!
//! Fetches the two source documents (HTTP or local file) with retry on transient
//! network failures. Both documents are loaded as a coordinated join: graph
//! construction never starts from a partial pair.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};

use crate::core::error::{Error, Result};
use crate::core::source::{resolve_source, DocumentSource, SourceConfig};

/// Maximum number of retry attempts for transient network errors
const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_RETRY_DELAY_MS: u64 = 1000;

/// Shared HTTP client with timeouts suitable for small text documents
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("metro-graph/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Send a GET request, retrying connect/timeout failures with exponential backoff
async fn get_with_retry(url: &str) -> Result<reqwest::Response> {
    let mut attempt = 0;

    loop {
        match HTTP_CLIENT.get(url).send().await {
            Ok(response) => return Ok(response),
            Err(e) if (e.is_connect() || e.is_timeout()) && attempt < MAX_RETRY_ATTEMPTS => {
                attempt += 1;
                let delay = BASE_RETRY_DELAY_MS * (1 << (attempt - 1));
                log::warn!("Network error fetching {url} (attempt {attempt}): {e}. Retrying in {delay}ms...");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Fetch one document as text
///
/// HTTP sources must answer with a success status; anything else is reported as
/// `SourceUnavailable` naming the URL and status.
pub async fn fetch_document(source: &DocumentSource) -> Result<String> {
    match source {
        DocumentSource::Http { url } => {
            let response = get_with_retry(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::SourceUnavailable(format!("{url} returned {status}")));
            }

            let text = response.text().await?;
            log::debug!("Fetched {} bytes from {url}", text.len());
            Ok(text)
        }
        DocumentSource::File { path } => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::SourceUnavailable(format!("{path}: {e}"))),
    }
}

/// Load both source documents, returning `(network_text, positions_text)`
///
/// The two fetches run concurrently and are joined; a failure on either aborts
/// the load so the caller never builds a graph from a partial pair.
pub async fn load_documents(config: &SourceConfig) -> Result<(String, String)> {
    let network_source = resolve_source(&config.network);
    let positions_source = resolve_source(&config.positions);

    futures::future::try_join(
        fetch_document(&network_source),
        fetch_document(&positions_source),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_document_http() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Data/metro.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("V 0000 1 Bastille ; 1 ; False 0"))
            .mount(&server)
            .await;

        let source = DocumentSource::Http {
            url: format!("{}/Data/metro.txt", server.uri()),
        };
        let text = fetch_document(&source).await.unwrap();
        assert_eq!(text, "V 0000 1 Bastille ; 1 ; False 0");
    }

    #[tokio::test]
    async fn test_fetch_document_http_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = DocumentSource::Http {
            url: format!("{}/missing.txt", server.uri()),
        };
        let err = fetch_document(&source).await.unwrap_err();
        match err {
            Error::SourceUnavailable(msg) => {
                assert!(msg.contains("404"), "expected status in message: {msg}");
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_document_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "0.5;12.25;Gare de Lyon").unwrap();

        let source = DocumentSource::File {
            path: file.path().to_str().unwrap().to_string(),
        };
        let text = fetch_document(&source).await.unwrap();
        assert_eq!(text, "0.5;12.25;Gare de Lyon");
    }

    #[tokio::test]
    async fn test_fetch_document_missing_file() {
        let source = DocumentSource::File {
            path: "/nonexistent/metro.txt".to_string(),
        };
        let err = fetch_document(&source).await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_load_documents_joins_both() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/metro.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("network"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pospoints.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("positions"))
            .mount(&server)
            .await;

        let config = SourceConfig {
            network: format!("{}/metro.txt", server.uri()),
            positions: format!("{}/pospoints.txt", server.uri()),
        };
        let (network, positions) = load_documents(&config).await.unwrap();
        assert_eq!(network, "network");
        assert_eq!(positions, "positions");
    }

    #[tokio::test]
    async fn test_load_documents_fails_when_one_source_is_down() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/metro.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("network"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pospoints.txt"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = SourceConfig {
            network: format!("{}/metro.txt", server.uri()),
            positions: format!("{}/pospoints.txt", server.uri()),
        };
        let err = load_documents(&config).await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }
}
