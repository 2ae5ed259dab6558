//! Domain extraction from endpoint URLs

use crate::errors::{MonitorError, Result};
use url::Url;

/// Extract the hostname of an absolute URL.
///
/// The hostname is the grouping key for availability statistics. A string
/// that does not parse as an absolute URL, or parses to a URL without a
/// host, yields [`MonitorError::InvalidUrl`].
pub fn extract_domain(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|_| MonitorError::InvalidUrl(raw.to_string()))?;

    match parsed.host_str() {
        Some(host) => Ok(host.to_string()),
        None => Err(MonitorError::InvalidUrl(raw.to_string())),
    }
}
