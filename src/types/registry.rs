//! npm registry client.

use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;

use crate::error::NyError;

/// Answers whether a package is published.
///
/// A trait so the planning logic can be tested without a network.
pub trait PackageRegistry {
    /// Whether `name` exists in the registry.
    fn has_package(&self, name: &str) -> Result<bool>;
}

/// Registry speaking the npm HTTP API.
pub struct NpmRegistry {
    client: Client,
    base_url: String,
}

impl NpmRegistry {
    /// The public npm registry.
    pub const DEFAULT_URL: &'static str = "https://registry.npmjs.org";

    /// Create a client for the registry at `base_url` with a 10-second timeout.
    pub fn new(base_url: impl Into<String>) -> crate::error::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ny/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NyError::Registry {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Metadata URL of a package. The scope separator is percent-encoded.
    pub fn package_url(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            name.replace('/', "%2f")
        )
    }
}

impl PackageRegistry for NpmRegistry {
    fn has_package(&self, name: &str) -> Result<bool> {
        let url = self.package_url(name);
        let response = self.client.get(&url).send()?;
        tracing::debug!("GET {} -> {}", url, response.status());

        Ok(response.status().is_success())
    }
}
