//! Portal facade owning the feed client and configuration.

use gviz_sheets_api::Client;

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::offerings::{aggregate_offerings, ScanLimits};
use crate::recordings::aggregate_recordings;
use crate::types::{Offering, Recording};

/// Entry point for pages: loads the offering and recording collections.
///
/// Each call re-reads the feeds and returns freshly built records.
pub struct PortalClient {
    inner: Client,
    config: PortalConfig,
}

impl PortalClient {
    /// Creates a portal client against the production sheet host.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        config.validate()?;
        Ok(Self {
            inner: Client::new()?,
            config,
        })
    }

    /// Creates a portal client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, config: PortalConfig) -> Result<Self, PortalError> {
        config.validate()?;
        Ok(Self {
            inner: Client::with_base_url(base_url)?,
            config,
        })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Loads every offering. Sheet-level failures are absorbed, so this
    /// never fails; an unreachable feed yields an empty list.
    pub async fn offerings(&self) -> Vec<Offering> {
        let limits = ScanLimits {
            max_sheets: self.config.max_sheets,
            max_consecutive_failures: self.config.max_consecutive_failures,
        };
        aggregate_offerings(&self.inner, &self.config.offerings_sheet_id, limits).await
    }

    /// Loads every recording. Fails only when the master index cannot be read.
    pub async fn recordings(&self) -> Result<Vec<Recording>, PortalError> {
        aggregate_recordings(&self.inner, &self.config.recordings_sheet_id).await
    }
}
