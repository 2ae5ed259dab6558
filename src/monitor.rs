//! Scheduling loop driving health-check rounds

use crate::config::Config;
use crate::domain::extract_domain;
use crate::errors::Result;
use crate::ledger::AvailabilityLedger;
use crate::probe::{EndpointProber, Probe};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Fixed delay between polling rounds in milliseconds
const ROUND_INTERVAL_MS: u64 = 15000;

/// Drives unbounded health-check rounds over the configured endpoints.
///
/// The monitor owns the ledger; checks within a round are strictly
/// sequential and always run in the configured list order.
pub struct HealthMonitor {
    config: Config,
    prober: Box<dyn Probe>,
    ledger: AvailabilityLedger,
}

impl HealthMonitor {
    /// Create a monitor with the default HTTP prober
    pub fn new(config: Config) -> Result<Self> {
        let prober = EndpointProber::new()?;
        Ok(Self::with_prober(config, Box::new(prober)))
    }

    /// Create a monitor with a custom prober implementation
    pub fn with_prober(config: Config, prober: Box<dyn Probe>) -> Self {
        Self {
            config,
            prober,
            ledger: AvailabilityLedger::new(),
        }
    }

    /// Run rounds forever, sleeping a fixed interval between them.
    ///
    /// Returns on interrupt; whatever round or sleep is in flight is
    /// abandoned on the spot.
    pub async fn run(&mut self) {
        info!(
            "Health monitor starting: {} endpoints, {}ms round interval",
            self.config.endpoints.len(),
            ROUND_INTERVAL_MS
        );

        loop {
            tokio::select! {
                _ = self.run_round() => {}
                _ = tokio::signal::ctrl_c() => break,
            }

            tokio::select! {
                _ = sleep(Duration::from_millis(ROUND_INTERVAL_MS)) => {}
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        info!("Health monitor interrupted, shutting down");
    }

    /// Execute one pass over the configured endpoint list.
    ///
    /// An endpoint whose URL has no extractable domain is skipped for the
    /// round without touching the ledger. A report is printed after every
    /// check.
    pub async fn run_round(&mut self) {
        for endpoint in &self.config.endpoints {
            let domain = match extract_domain(&endpoint.url) {
                Ok(domain) => domain,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            let result = self.prober.probe(endpoint).await;
            self.ledger.record(&domain, result.up);
            self.ledger.report();
        }
    }

    /// Cumulative availability state accumulated so far
    pub fn ledger(&self) -> &AvailabilityLedger {
        &self.ledger
    }
}
