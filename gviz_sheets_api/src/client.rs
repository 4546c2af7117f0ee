//! HTTP client for the Google Visualization (gviz) sheet endpoint.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::{
    query::SheetQuery,
    types::{Grid, Payload},
    Error,
};

/// Generic message used when an error payload carries no detail.
const GENERIC_FEED_ERROR: &str = "Sheet API Error";

/// Greedy, so the last `);` in the body closes the payload.
static SET_RESPONSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"google\.visualization\.Query\.setResponse\(([\s\S]+)\);")
        .expect("setResponse pattern is valid")
});

/// HTTP client for the gviz endpoint of published spreadsheets.
///
/// Every call is an independent round-trip: no caching and no retries.
/// The client is cheap to clone and can be moved into spawned tasks.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the endpoint. Defaults to `https://docs.google.com`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production Google Docs host.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://docs.google.com")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn get_url(&self, sheet_id: &str, query: &SheetQuery) -> Result<Url, Error> {
        let url = Url::parse(&format!(
            "{}/spreadsheets/d/{}/gviz/tq",
            self.base_api_url, sheet_id
        ))
        .map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches one sheet of the document `sheet_id` as a grid of cell text.
    ///
    /// `sheet` selects a named sub-sheet; `None` reads the document's default
    /// (first) sheet.
    pub async fn fetch_grid(&self, sheet_id: &str, sheet: Option<&str>) -> Result<Grid, Error> {
        let query = match sheet {
            Some(name) => SheetQuery::default().with_sheet(name),
            None => SheetQuery::default(),
        };
        let url = self.get_url(sheet_id, &query)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("accept", "text/javascript, application/json, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get sheet: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        parse_response(&body)
    }
}

/// Decodes a full response body into a grid.
///
/// The body is a JavaScript call wrapping the JSON payload; the wrapper is
/// stripped with a tolerant match before parsing.
pub(crate) fn parse_response(body: &str) -> Result<Grid, Error> {
    let raw = extract_payload(body)?;
    let payload: Payload = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Failed to parse sheet payload: {} | body: {}", e, truncate_body(body));
        Error::Json(e)
    })?;

    if payload.is_error() {
        let message = payload
            .first_error_message()
            .unwrap_or(GENERIC_FEED_ERROR)
            .to_string();
        tracing::warn!("Sheet payload reported an error: {}", message);
        return Err(Error::Feed { message });
    }

    Ok(payload.table.map(Grid::from).unwrap_or_default())
}

fn extract_payload(body: &str) -> Result<&str, Error> {
    SET_RESPONSE
        .captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            tracing::error!("Missing setResponse wrapper | body: {}", truncate_body(body));
            Error::MissingPayload
        })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const WRAPPED: &str = "/*O_o*/\ngoogle.visualization.Query.setResponse({\"version\":\"0.6\",\"status\":\"ok\",\"table\":{\"cols\":[],\"rows\":[{\"c\":[{\"v\":\"Title\"}]},{\"c\":[{\"v\":\"Budget\"},{\"v\":3.0,\"f\":\"3\"}]}]}});";

    #[test]
    fn parses_wrapped_payload() {
        let grid = parse_response(WRAPPED).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.cell(1, 0), "Budget");
        assert_eq!(grid.cell(1, 1), "3");
    }

    #[test]
    fn plain_json_without_wrapper_is_parse_error() {
        let err = parse_response("{\"status\":\"ok\"}").unwrap_err();
        assert!(matches!(err, Error::MissingPayload));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn error_status_uses_detailed_message() {
        let body = "google.visualization.Query.setResponse({\"status\":\"error\",\"errors\":[{\"reason\":\"invalid_query\",\"detailed_message\":\"Invalid sheet name\"}]});";
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, Error::Feed { ref message } if message == "Invalid sheet name"));
    }

    #[test]
    fn error_status_without_detail_is_generic() {
        let body = "google.visualization.Query.setResponse({\"status\":\"error\"});";
        let err = parse_response(body).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FEED_ERROR);
    }

    #[test]
    fn payload_without_table_is_empty_grid() {
        let body = "google.visualization.Query.setResponse({\"status\":\"ok\"});";
        assert!(parse_response(body).unwrap().is_empty());
    }

    #[test]
    fn cell_text_containing_wrapper_suffix_survives() {
        let body = "google.visualization.Query.setResponse({\"status\":\"ok\",\"table\":{\"rows\":[{\"c\":[{\"v\":\"call f(x);\"}]}]}});";
        let grid = parse_response(body).unwrap();
        assert_eq!(grid.cell(0, 0), "call f(x);");
    }

    #[test]
    fn wrapper_match_is_reused_across_bodies() {
        assert!(parse_response(WRAPPED).is_ok());
        assert!(matches!(parse_response("setResponse({});"), Err(Error::MissingPayload)));
        assert_eq!(parse_response(WRAPPED).unwrap().len(), 2);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn client_creation_with_base_url() {
        assert!(Client::with_base_url("http://localhost:1234/").is_ok());
    }
}
