//! Query-string builder for the visualization endpoint.

use url::Url;

/// Output format requested from the endpoint. The JSON flavour still arrives
/// wrapped in a `setResponse(...)` call.
const OUTPUT_FORMAT: &str = "out:json";

/// Parameters for a single sheet request.
///
/// Without a sheet name the endpoint serves the document's first sheet.
#[derive(Clone, Debug, Default)]
pub struct SheetQuery {
    /// Named sub-sheet (tab) to read. `None` reads the default sheet.
    pub sheet: Option<String>,
}

impl SheetQuery {
    /// Scopes the query to a named sub-sheet.
    pub fn with_sheet(mut self, sheet: &str) -> Self {
        self.sheet = Some(sheet.to_string());
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("tqx", OUTPUT_FORMAT);
        if let Some(sheet) = &self.sheet {
            url.query_pairs_mut().append_pair("sheet", sheet);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::SheetQuery;

    #[test]
    fn default_query_only_requests_json() {
        let url = Url::parse("https://example.com/gviz/tq").unwrap();
        assert_eq!(
            SheetQuery::default().add_to_url(&url).to_string(),
            "https://example.com/gviz/tq?tqx=out%3Ajson"
        );
    }

    #[test]
    fn sheet_name_is_encoded() {
        let url = Url::parse("https://example.com/gviz/tq").unwrap();
        let out = SheetQuery::default()
            .with_sheet("Session 1 & 2")
            .add_to_url(&url);
        assert_eq!(
            out.query_pairs()
                .find(|(k, _)| k == "sheet")
                .map(|(_, v)| v.into_owned()),
            Some("Session 1 & 2".to_string())
        );
        assert_eq!(
            out.to_string(),
            "https://example.com/gviz/tq?tqx=out%3Ajson&sheet=Session+1+%26+2"
        );
    }
}
