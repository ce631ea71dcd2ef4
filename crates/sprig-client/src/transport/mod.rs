//! The HTTP transport capability.
//!
//! Orchestrators never talk to reqwest directly; they go through the
//! `Transport` trait, so tests can inject a deterministic implementation
//! instead of spoofing the execution environment.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use sprig_core::error::{SprigError, SprigResult};

use crate::config::ApiConfig;

/// A raw HTTP response: status code and undecoded body bytes.
///
/// Decoding stays in the orchestrator so that a body that fails to parse is
/// distinguishable from a request that failed outright.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status code is in the success range [200, 300)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability for issuing a single HTTP GET request
pub trait Transport: Send + Sync {
    /// Issue a GET request and return the raw response.
    ///
    /// A network-level failure is a `Transport` error; any status code the
    /// server actually returned is a successful call.
    fn get(&self, url: &str) -> impl Future<Output = SprigResult<TransportResponse>> + Send;
}

/// Production transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with connection pooling per the given configuration
    pub fn new(config: &ApiConfig) -> SprigResult<Self> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| {
                SprigError::transport("Failed to create HTTP client".to_string(), err)
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> SprigResult<TransportResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SprigError::transport(format!("GET {} failed", url), err))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| {
                SprigError::transport(format!("Failed to read response body from {}", url), err)
            })?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}
