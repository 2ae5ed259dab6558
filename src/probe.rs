//! Endpoint probing and up/down classification

use crate::config::EndpointSpec;
use crate::errors::Result;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Hard per-request timeout in milliseconds
const REQUEST_TIMEOUT_MS: u64 = 5000;

/// Latency ceiling for an up classification in milliseconds
const LATENCY_THRESHOLD_MS: u128 = 500;

/// Verdict of a single probe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub up: bool,
}

/// A single timed health probe against one endpoint
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, endpoint: &EndpointSpec) -> ProbeResult;
}

/// HTTP prober backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct EndpointProber {
    client: Client,
}

impl EndpointProber {
    /// Create a new prober with the fixed request timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .user_agent(format!("uptime_monitor/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

/// Classification rule for one probe attempt.
///
/// A check is up only when the response arrived with a 2xx status and the
/// full round trip stayed under the latency ceiling.
fn classify(status: u16, elapsed_ms: u128) -> bool {
    (200..300).contains(&status) && elapsed_ms < LATENCY_THRESHOLD_MS
}

#[async_trait]
impl Probe for EndpointProber {
    async fn probe(&self, endpoint: &EndpointSpec) -> ProbeResult {
        let method = match Method::from_bytes(endpoint.method.as_bytes()) {
            Ok(method) => method,
            Err(_) => {
                warn!(
                    "Probe failed for {}: invalid HTTP method {:?}",
                    endpoint.url, endpoint.method
                );
                return ProbeResult { up: false };
            }
        };

        let mut request = self.client.request(method, endpoint.url.as_str());

        for (name, value) in &endpoint.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(raw) = &endpoint.body {
            match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(body) => request = request.json(&body),
                Err(e) => {
                    warn!("Probe failed for {}: body is not valid JSON: {}", endpoint.url, e);
                    return ProbeResult { up: false };
                }
            }
        }

        let start = Instant::now();
        let outcome = request.send().await;
        let elapsed_ms = start.elapsed().as_millis();

        match outcome {
            Ok(response) => {
                let status = response.status();
                let up = classify(status.as_u16(), elapsed_ms);

                if up {
                    debug!(
                        "Probe succeeded for {}: {} in {}ms",
                        endpoint.url, status, elapsed_ms
                    );
                } else if status.is_success() {
                    warn!(
                        "Probe failed for {}: {} but took {}ms",
                        endpoint.url, status, elapsed_ms
                    );
                } else {
                    warn!(
                        "Probe failed for {}: non-success status {}",
                        endpoint.url, status
                    );
                }

                ProbeResult { up }
            }
            Err(e) => {
                warn!("Probe failed for {}: {}", endpoint.url, e);
                ProbeResult { up: false }
            }
        }
    }
}
