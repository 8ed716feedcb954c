use std::time::Duration;

use intake_logging::{intake_debug, intake_info, intake_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{EngineError, FailureKind, LookupError, LookupRequest, LookupResponse, ProductItem};

pub const DEFAULT_ENDPOINT: &str = "https://api.upcitemdb.com/prod/trial/lookup";

const JSON: &str = "application/json";

/// HTTP settings for the lookup client. Both timeouts are off by default,
/// matching a plain browser `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub endpoint: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait ProductLookup: Send + Sync {
    /// Looks up `upc` and returns the first matching item.
    async fn lookup(&self, upc: &str) -> Result<ProductItem, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLookup {
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestLookup {
    pub fn new(settings: LookupSettings) -> Result<Self, EngineError> {
        let endpoint = parse_endpoint(&settings.endpoint)?;
        let client = build_client(&settings)?;
        Ok(Self { endpoint, client })
    }
}

/// Parses a lookup endpoint, accepting only absolute http(s) URLs.
pub fn parse_endpoint(raw: &str) -> Result<Url, EngineError> {
    let invalid = |reason: String| EngineError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

fn build_client(settings: &LookupSettings) -> Result<reqwest::Client, EngineError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| EngineError::Client(err.to_string()))
}

#[async_trait::async_trait]
impl ProductLookup for ReqwestLookup {
    async fn lookup(&self, upc: &str) -> Result<ProductItem, LookupError> {
        let body = serde_json::to_vec(&LookupRequest { upc })
            .map_err(|err| LookupError::new(FailureKind::InvalidRequest, err.to_string()))?;

        intake_info!("Looking up UPC: {} via {}", upc, self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        intake_debug!("Got response with status: {}", status.as_u16());
        if !status.is_success() {
            return Err(LookupError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: LookupResponse = serde_json::from_slice(&bytes).map_err(|err| {
            intake_warn!("Unreadable lookup response for {}: {}", upc, err);
            LookupError::new(FailureKind::InvalidResponse, err.to_string())
        })?;
        intake_debug!("Received {} item(s) for {}", parsed.items.len(), upc);

        parsed
            .items
            .into_iter()
            .next()
            .ok_or_else(LookupError::not_found)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        return LookupError::new(FailureKind::Timeout, err.to_string());
    }
    LookupError::new(FailureKind::Network, err.to_string())
}
