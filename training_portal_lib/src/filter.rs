//! Search and month filtering over an in-memory offering list.

use chrono::{DateTime, NaiveDate};

use crate::types::Offering;

/// Date formats accepted from a date picker or query string.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A text query and an optional month filter, applied together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferingFilter {
    /// Lowercased search text; empty disables text matching.
    query: String,
    /// Selected day; only its month is compared.
    date: Option<NaiveDate>,
}

impl OfferingFilter {
    /// Builds a filter from raw inputs. An unparseable `date` disables the
    /// date filter rather than excluding everything.
    pub fn new(query: &str, date: &str) -> Self {
        Self {
            query: query.to_lowercase(),
            date: parse_date(date),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// True when at least one of the filters would exclude records.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.date.is_some()
    }

    pub fn matches(&self, offering: &Offering) -> bool {
        self.matches_query(offering) && self.matches_month(offering)
    }

    fn matches_query(&self, offering: &Offering) -> bool {
        if self.query.is_empty() {
            return true;
        }
        [
            &offering.title,
            &offering.provider,
            &offering.venue,
            &offering.objectives,
            &offering.description,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.query))
    }

    fn matches_month(&self, offering: &Offering) -> bool {
        let Some(date) = self.date else {
            return true;
        };
        let long = date.format("%B").to_string();
        let short = date.format("%b").to_string();
        offering.date.contains(&long) || offering.date.contains(&short)
    }

    /// Borrows the matching offerings, preserving order.
    pub fn apply<'a>(&self, offerings: &'a [Offering]) -> Vec<&'a Offering> {
        offerings.iter().filter(|o| self.matches(o)).collect()
    }
}

/// Filters `offerings` by a free-text query and a date string.
///
/// With an empty query and an empty or invalid date every offering is kept.
pub fn filter_offerings<'a>(offerings: &'a [Offering], query: &str, date: &str) -> Vec<&'a Offering> {
    OfferingFilter::new(query, date).apply(offerings)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
