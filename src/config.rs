//! Configuration loading for the uptime monitor

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A single HTTP endpoint to monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Absolute URL of the endpoint
    pub url: String,

    /// HTTP method, normalized to uppercase on load
    #[serde(default = "default_method")]
    pub method: String,

    /// Extra request headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Optional raw request payload; must be valid JSON when present
    #[serde(default)]
    pub body: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

/// The ordered list of endpoints to monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub endpoints: Vec<EndpointSpec>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a YAML endpoint list
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(contents)?;

        for endpoint in &mut config.endpoints {
            endpoint.method = endpoint.method.to_uppercase();
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (index, endpoint) in self.endpoints.iter().enumerate() {
            if endpoint.url.is_empty() {
                return Err(format!("endpoint {}: url cannot be empty", index));
            }

            if reqwest::Method::from_bytes(endpoint.method.as_bytes()).is_err() {
                return Err(format!(
                    "endpoint {}: invalid HTTP method {:?}",
                    index, endpoint.method
                ));
            }

            if let Some(body) = &endpoint.body {
                if let Err(e) = serde_json::from_str::<serde_json::Value>(body) {
                    return Err(format!("endpoint {}: body is not valid JSON: {}", index, e));
                }
            }
        }

        Ok(())
    }
}
