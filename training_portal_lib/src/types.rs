//! Records built from the sheet feeds and handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::content::direct_image_url;

/// One training offering, read positionally from a row of an offerings tab.
///
/// Columns, in order: title, date, venue, modality, provider, poster,
/// objectives, description, other info, attachments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub id: String,
    pub title: String,
    /// Free text such as "March 15, 2024" or "Mar 2024".
    pub date: String,
    pub venue: String,
    pub modality: String,
    pub provider: String,
    /// Direct image URL or a shareable Drive link.
    pub poster: String,
    pub objectives: String,
    pub description: String,
    pub other_info: String,
    pub attachments: String,
}

impl Offering {
    /// Poster as a URL an image element can load, or `None` without a poster.
    pub fn poster_url(&self) -> Option<String> {
        if self.poster.trim().is_empty() {
            return None;
        }
        Some(direct_image_url(&self.poster).into_owned())
    }
}

/// One session recording: a title and up to four content blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub id: String,
    pub title: String,
    pub content: Vec<String>,
}
