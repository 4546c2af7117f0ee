//! Recording aggregation: a master index tab naming one tab per session.
//!
//! Session tabs are fetched concurrently and joined before returning. A
//! failed session tab is dropped; a failed master index fails the whole call.

use gviz_sheets_api::{Client, Grid};
use tokio::task::JoinSet;

use crate::error::PortalError;
use crate::types::Recording;

/// Content rows kept after the title row.
const MAX_CONTENT_ROWS: usize = 4;

/// Session tab names from column 0 of the master index, blanks removed.
pub fn session_names(index: &Grid) -> Vec<String> {
    index
        .first_column()
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds a recording from a session tab's column 0.
///
/// Row 0 is the title, falling back to the tab name when blank; the next
/// rows (at most four) are the content blocks.
pub fn recording_from_grid(ordinal: usize, sheet_name: &str, grid: &Grid) -> Recording {
    let column = grid.first_column();
    let title = match column.first() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => sheet_name.to_string(),
    };
    let content = column
        .iter()
        .skip(1)
        .take(MAX_CONTENT_ROWS)
        .map(|s| s.to_string())
        .collect();
    Recording {
        id: format!("recording-{}", ordinal),
        title,
        content,
    }
}

/// Collects one recording per session tab listed in the document's default tab.
///
/// Results keep master-index order and ids follow index position, whichever
/// session fetches failed.
pub async fn aggregate_recordings(
    client: &Client,
    sheet_id: &str,
) -> Result<Vec<Recording>, PortalError> {
    let index = client.fetch_grid(sheet_id, None).await.map_err(|e| {
        tracing::error!("Failed to load recordings index: {}", e);
        PortalError::Api(e)
    })?;
    let names = session_names(&index);
    tracing::debug!("Recordings index lists {} sessions", names.len());

    let mut join_set = JoinSet::new();
    for (ordinal, name) in names.into_iter().enumerate() {
        let client = client.clone();
        let sheet_id = sheet_id.to_string();
        join_set.spawn(async move {
            match client.fetch_grid(&sheet_id, Some(&name)).await {
                Ok(grid) => (ordinal, Some(recording_from_grid(ordinal, &name, &grid))),
                Err(e) => {
                    tracing::warn!("Skipping recording sheet {:?}: {}", name, e);
                    (ordinal, None)
                }
            }
        });
    }

    let mut settled = Vec::with_capacity(join_set.len());
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((ordinal, Some(recording))) => settled.push((ordinal, recording)),
            Ok((_, None)) => {}
            Err(e) => tracing::warn!("Recording fetch task failed: {}", e),
        }
    }
    settled.sort_by_key(|(ordinal, _)| *ordinal);

    let recordings: Vec<Recording> = settled.into_iter().map(|(_, r)| r).collect();
    tracing::info!("Loaded {} recordings", recordings.len());
    Ok(recordings)
}
