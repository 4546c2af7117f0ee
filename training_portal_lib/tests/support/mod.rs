#![allow(dead_code)]

//! Helpers shared by the integration tests.

use serde_json::{json, Value};

pub const SHEET_ID: &str = "test-doc";
pub const GVIZ_PATH: &str = "/spreadsheets/d/test-doc/gviz/tq";

/// Wraps rows of cell text the way the visualization endpoint does.
pub fn gviz_body(rows: &[&[&str]]) -> String {
    let rows: Vec<Value> = rows
        .iter()
        .map(|row| {
            let cells: Vec<Value> = row
                .iter()
                .map(|cell| if cell.is_empty() { Value::Null } else { json!({ "v": cell }) })
                .collect();
            json!({ "c": cells })
        })
        .collect();
    let payload = json!({
        "version": "0.6",
        "reqId": "0",
        "status": "ok",
        "table": { "cols": [], "rows": rows, "parsedNumHeaders": 0 }
    });
    format!(
        "/*O_o*/\ngoogle.visualization.Query.setResponse({});",
        payload
    )
}

pub fn empty_body() -> String {
    gviz_body(&[])
}
