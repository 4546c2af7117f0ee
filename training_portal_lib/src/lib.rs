//! Library layer for the training portal: spreadsheet-backed offering and
//! recording aggregation, search/date filtering, and content helpers.
//!
//! Wraps the `gviz_sheets_api` feed client. Every aggregation builds its
//! records fresh from the feeds; nothing is cached or persisted.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod offerings;
pub mod recordings;
pub mod types;

pub use gviz_sheets_api;
pub use gviz_sheets_api::{Grid, Row};

pub use client::PortalClient;
pub use config::PortalConfig;
pub use content::{direct_image_url, render_content, RenderedContent, Segment};
pub use error::{Collection, PortalError};
pub use filter::{filter_offerings, OfferingFilter};
pub use types::{Offering, Recording};
