//! Offering aggregation across the numbered `SheetN` tabs of one document.
//!
//! Tabs are read strictly in order. The scan stops after a run of
//! consecutive empty or unreadable tabs, or once the tab ceiling is passed.
//! Individual tab failures never reach the caller.

use gviz_sheets_api::{Client, Grid, Row};

use crate::types::Offering;

/// Scan bounds for [`aggregate_offerings`].
#[derive(Clone, Copy, Debug)]
pub struct ScanLimits {
    pub max_sheets: usize,
    pub max_consecutive_failures: usize,
}

/// Identifier namespace for offerings from one grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetNamespace {
    /// Rows from the tab named `Sheet{n}`.
    Ordinal(usize),
    /// Rows from the document's default tab, read as a fallback for `Sheet1`.
    Default,
}

impl SheetNamespace {
    fn offering_id(self, row_index: usize) -> String {
        match self {
            SheetNamespace::Ordinal(n) => format!("offering-{}-{}", n, row_index),
            SheetNamespace::Default => format!("offering-default-{}", row_index),
        }
    }
}

/// Maps the data rows of `grid` to offerings, skipping the header row.
///
/// Rows whose title cell is blank are dropped. Row ordinals in the ids count
/// every data row, dropped ones included.
pub fn offerings_from_grid(grid: &Grid, namespace: SheetNamespace) -> Vec<Offering> {
    grid.data_rows()
        .iter()
        .enumerate()
        .filter_map(|(row_index, row)| offering_from_row(row, namespace.offering_id(row_index)))
        .collect()
}

fn offering_from_row(row: &Row, id: String) -> Option<Offering> {
    let col = |i: usize| row.get(i).cloned().unwrap_or_default();
    let title = col(0);
    if title.trim().is_empty() {
        return None;
    }
    Some(Offering {
        id,
        title,
        date: col(1),
        venue: col(2),
        modality: col(3),
        provider: col(4),
        poster: col(5),
        objectives: col(6),
        description: col(7),
        other_info: col(8),
        attachments: col(9),
    })
}

/// Collects offerings from `Sheet1`, `Sheet2`, ... of the document `sheet_id`.
///
/// When `Sheet1` is empty or fails, the document's default tab is read once in
/// its place and its rows are namespaced as `default`. Always succeeds; an
/// unreadable document yields an empty list.
pub async fn aggregate_offerings(
    client: &Client,
    sheet_id: &str,
    limits: ScanLimits,
) -> Vec<Offering> {
    let mut offerings = Vec::new();
    let mut consecutive_failures = 0usize;
    let mut index = 1usize;

    while consecutive_failures < limits.max_consecutive_failures && index <= limits.max_sheets {
        let sheet_name = format!("Sheet{}", index);
        let mut namespace = SheetNamespace::Ordinal(index);
        let mut outcome = client.fetch_grid(sheet_id, Some(&sheet_name)).await;

        let needs_fallback = index == 1 && outcome.as_ref().map_or(true, Grid::is_empty);
        if needs_fallback {
            tracing::debug!("{} empty or unreadable, trying default sheet", sheet_name);
            match client.fetch_grid(sheet_id, None).await {
                Ok(grid) => {
                    outcome = Ok(grid);
                    namespace = SheetNamespace::Default;
                }
                Err(e) => tracing::warn!("Default sheet fallback failed: {}", e),
            }
        }

        match outcome {
            Ok(grid) if grid.len() > 1 => {
                let sheet_offerings = offerings_from_grid(&grid, namespace);
                tracing::debug!(
                    "{}: {} offerings from {} data rows",
                    sheet_name,
                    sheet_offerings.len(),
                    grid.data_rows().len()
                );
                offerings.extend(sheet_offerings);
                consecutive_failures = 0;
            }
            Ok(_) => {
                consecutive_failures += 1;
                tracing::debug!(
                    "{} has no data rows ({}/{})",
                    sheet_name,
                    consecutive_failures,
                    limits.max_consecutive_failures
                );
            }
            Err(e) => {
                consecutive_failures += 1;
                tracing::warn!(
                    "{} could not be read ({}/{}): {}",
                    sheet_name,
                    consecutive_failures,
                    limits.max_consecutive_failures,
                    e
                );
            }
        }
        index += 1;
    }

    tracing::info!(
        "Loaded {} offerings, stopped before Sheet{}",
        offerings.len(),
        index
    );
    offerings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn header_only_or_empty_grid_yields_nothing() {
        let header = grid(&[&["Title", "Date"]]);
        assert!(offerings_from_grid(&header, SheetNamespace::Ordinal(1)).is_empty());
        assert!(offerings_from_grid(&Grid::default(), SheetNamespace::Ordinal(1)).is_empty());
    }

    #[test]
    fn maps_columns_positionally() {
        let g = grid(&[
            &["anything", "goes", "in", "the", "header"],
            &[
                "Budget Planning Workshop",
                "March 2024",
                "Main Hall",
                "Face-to-face",
                "Finance Academy",
                "https://example.com/poster.png",
                "Plan budgets",
                "Two-day course",
                "Bring ID",
                "https://example.com/syllabus.pdf",
            ],
        ]);
        let offerings = offerings_from_grid(&g, SheetNamespace::Ordinal(2));
        assert_eq!(offerings.len(), 1);
        let o = &offerings[0];
        assert_eq!(o.id, "offering-2-0");
        assert_eq!(o.title, "Budget Planning Workshop");
        assert_eq!(o.date, "March 2024");
        assert_eq!(o.venue, "Main Hall");
        assert_eq!(o.modality, "Face-to-face");
        assert_eq!(o.provider, "Finance Academy");
        assert_eq!(o.poster, "https://example.com/poster.png");
        assert_eq!(o.objectives, "Plan budgets");
        assert_eq!(o.description, "Two-day course");
        assert_eq!(o.other_info, "Bring ID");
        assert_eq!(o.attachments, "https://example.com/syllabus.pdf");
    }

    #[test]
    fn short_rows_fill_missing_columns_with_empty() {
        let g = grid(&[&["Title"], &["Only a title"]]);
        let offerings = offerings_from_grid(&g, SheetNamespace::Ordinal(1));
        assert_eq!(offerings[0].attachments, "");
        assert_eq!(offerings[0].date, "");
    }

    #[test]
    fn blank_titles_are_dropped_but_keep_row_ordinals() {
        let g = grid(&[
            &["Title", "Date"],
            &["First", "Jan"],
            &["", "Feb", "venue"],
            &["   ", "Mar"],
            &["Fourth", "Apr"],
        ]);
        let offerings = offerings_from_grid(&g, SheetNamespace::Default);
        let ids: Vec<&str> = offerings.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["offering-default-0", "offering-default-3"]);
    }
}
