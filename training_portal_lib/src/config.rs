//! Portal configuration: the two feed identifiers and the sheet-scan bounds.

use crate::error::PortalError;

/// Spreadsheet holding the training offerings, one tab per batch.
pub const DEFAULT_OFFERINGS_SHEET_ID: &str = "1qIBO2Wr1g7GbA1QTRdaVnDaTnrSBH8Kd0tttaVUVBEY";
/// Spreadsheet whose first tab indexes the per-session recording tabs.
pub const DEFAULT_RECORDINGS_SHEET_ID: &str = "1fd99Wzb27DqmHMZep53hRA6BWomscfOISk8AU34hftY";

/// Highest `SheetN` tab read when collecting offerings.
pub const DEFAULT_MAX_SHEETS: usize = 20;
/// Consecutive empty or unreadable tabs that end the offering scan.
pub const DEFAULT_MAX_CONSECUTIVE_FAILURES: usize = 3;

const OFFERINGS_ENV: &str = "PORTAL_OFFERINGS_SHEET_ID";
const RECORDINGS_ENV: &str = "PORTAL_RECORDINGS_SHEET_ID";

/// Immutable configuration fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    pub offerings_sheet_id: String,
    pub recordings_sheet_id: String,
    pub max_sheets: usize,
    pub max_consecutive_failures: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            offerings_sheet_id: DEFAULT_OFFERINGS_SHEET_ID.to_string(),
            recordings_sheet_id: DEFAULT_RECORDINGS_SHEET_ID.to_string(),
            max_sheets: DEFAULT_MAX_SHEETS,
            max_consecutive_failures: DEFAULT_MAX_CONSECUTIVE_FAILURES,
        }
    }
}

impl PortalConfig {
    /// Defaults, with the feed identifiers overridable from
    /// `PORTAL_OFFERINGS_SHEET_ID` and `PORTAL_RECORDINGS_SHEET_ID`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`PortalConfig::from_env`], loading a `.env` file first if present.
    pub fn from_dotenv() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }
        Self::from_env()
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(id) = non_blank(lookup(OFFERINGS_ENV)) {
            config.offerings_sheet_id = id;
        }
        if let Some(id) = non_blank(lookup(RECORDINGS_ENV)) {
            config.recordings_sheet_id = id;
        }
        config
    }

    pub fn with_offerings_sheet_id(mut self, id: &str) -> Self {
        self.offerings_sheet_id = id.to_string();
        self
    }

    pub fn with_recordings_sheet_id(mut self, id: &str) -> Self {
        self.recordings_sheet_id = id.to_string();
        self
    }

    pub fn with_max_sheets(mut self, max_sheets: usize) -> Self {
        self.max_sheets = max_sheets;
        self
    }

    pub fn with_max_consecutive_failures(mut self, max: usize) -> Self {
        self.max_consecutive_failures = max;
        self
    }

    /// Rejects blank identifiers and zero scan bounds.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.offerings_sheet_id.trim().is_empty() {
            return Err(PortalError::Config("offerings sheet id is empty".into()));
        }
        if self.recordings_sheet_id.trim().is_empty() {
            return Err(PortalError::Config("recordings sheet id is empty".into()));
        }
        if self.max_sheets == 0 {
            return Err(PortalError::Config("max_sheets must be at least 1".into()));
        }
        if self.max_consecutive_failures == 0 {
            return Err(PortalError::Config(
                "max_consecutive_failures must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
