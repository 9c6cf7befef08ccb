use crate::detail::traits::PropertySource;
use crate::models::{Property, PropertyId};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct PropertyEnvelope {
    property: Option<Property>,
}

#[derive(Deserialize)]
struct ListingEnvelope {
    #[serde(default)]
    properties: Vec<Property>,
}

/// Remote listings API client
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a client for the API rooted at `base`
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("estate-listings/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Self::with_client(base, client)
    }

    pub fn with_client(base: &str, client: Client) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("Invalid API base URL: {}", base))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry a path: {}", base);
        }

        Ok(Self { client, base })
    }

    /// `{base}/properties[/{id}]`, with the id percent-encoded as one segment
    fn endpoint(&self, id: Option<&PropertyId>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("properties");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }
}

#[async_trait]
impl PropertySource for HttpSource {
    async fn fetch(&self, id: &PropertyId) -> Result<Option<Property>> {
        let url = self.endpoint(Some(id));
        debug!("Fetching URL: {}", url);

        let response = self.client
            .get(url)
            .send()
            .await
            .context("Failed to fetch property")?;

        let status = response.status();
        if !status.is_success() {
            debug!("Property {} returned status: {}", id, status);
            return Ok(None);
        }

        let body = response.text().await.context("Failed to read response body")?;

        match serde_json::from_str::<PropertyEnvelope>(&body) {
            Ok(PropertyEnvelope { property: Some(property) }) if property.is_well_formed() => {
                Ok(Some(property))
            }
            Ok(_) => {
                debug!("Response for {} carried no usable property", id);
                Ok(None)
            }
            Err(e) => {
                warn!("Malformed property payload for {}: {}", id, e);
                Ok(None)
            }
        }
    }

    async fn list(&self) -> Result<Vec<Property>> {
        let url = self.endpoint(None);
        info!("Fetching listings from {}", url);

        let response = self.client
            .get(url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let envelope: ListingEnvelope = response
            .json()
            .await
            .context("Failed to parse listings payload")?;

        Ok(envelope.properties)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{resolve_property, DetailState};
    use crate::models::PropertyType;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one canned response. Yields the base URL and the
    /// request line that was received.
    async fn serve_once(status: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]);
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}", addr), rx)
    }

    fn source(base: &str) -> HttpSource {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpSource::with_client(base, client).unwrap()
    }

    #[tokio::test]
    async fn found_payload_is_used_verbatim() {
        let body = json!({
            "property": {
                "id": 3,
                "title": "Airbnb Shortlet - Ikoyi",
                "type": "Shortlet",
                "price": "₦80,000/night",
                "location": "Ikoyi, Lagos",
                "images": ["a.jpg"],
                "approved": true
            }
        });
        let (base, request) = serve_once("200 OK", body.to_string()).await;

        let state = resolve_property(&source(&base), &PropertyId::new("3")).await;
        match state {
            DetailState::Found(property) => {
                assert_eq!(property.id, PropertyId::from(3_i64));
                assert_eq!(property.kind, PropertyType::Shortlet);
                assert!(property.approved);
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(request.await.unwrap(), "GET /properties/3 HTTP/1.1");
    }

    #[tokio::test]
    async fn not_found_status_is_not_found() {
        let (base, _request) = serve_once("404 Not Found", json!({"error": "missing"}).to_string()).await;
        let state = resolve_property(&source(&base), &PropertyId::new("42")).await;
        assert_eq!(state, DetailState::NotFound);
    }

    #[tokio::test]
    async fn missing_property_field_is_not_found() {
        let (base, _request) = serve_once("200 OK", json!({"data": {}}).to_string()).await;
        let state = resolve_property(&source(&base), &PropertyId::new("1")).await;
        assert_eq!(state, DetailState::NotFound);
    }

    #[tokio::test]
    async fn malformed_body_is_not_found() {
        let (base, _request) = serve_once("200 OK", "<html>oops</html>".to_string()).await;
        let state = resolve_property(&source(&base), &PropertyId::new("1")).await;
        assert_eq!(state, DetailState::NotFound);
    }

    #[tokio::test]
    async fn connection_failure_is_not_found() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = source(&format!("http://{}", addr));
        assert!(source.fetch(&PropertyId::new("1")).await.is_err());
        assert_eq!(resolve_property(&source, &PropertyId::new("1")).await, DetailState::NotFound);
    }

    #[tokio::test]
    async fn lists_collection() {
        let body = json!({
            "properties": [
                {"id": 1, "title": "A", "type": "Sale", "price": 1000, "location": "Lagos"},
                {"id": "b", "title": "B", "type": "Rent", "price": "₦1/year", "location": "Abuja"}
            ]
        });
        let (base, request) = serve_once("200 OK", body.to_string()).await;

        let properties = source(&base).list().await.unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[1].id.as_str(), "b");
        assert_eq!(request.await.unwrap(), "GET /properties HTTP/1.1");
    }

    #[test]
    fn endpoint_encodes_opaque_ids() {
        let source = source("https://api.example.com/v1/");
        assert_eq!(
            source.endpoint(Some(&PropertyId::new("a b/c"))).as_str(),
            "https://api.example.com/v1/properties/a%20b%2Fc"
        );
        assert_eq!(source.endpoint(None).as_str(), "https://api.example.com/v1/properties");
    }

    #[test]
    fn rejects_invalid_base() {
        assert!(HttpSource::new("not a url", DEFAULT_TIMEOUT).is_err());
    }
}
