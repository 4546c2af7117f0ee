//! Wire types for the JSON object embedded in a visualization response.

use serde::Deserialize;
use serde_json::Value;

/// Status value the endpoint uses to flag a failed query.
pub const STATUS_ERROR: &str = "error";

/// Top-level payload passed to `google.visualization.Query.setResponse`.
#[derive(Debug, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<FeedError>,
    #[serde(default)]
    pub table: Option<Table>,
}

#[derive(Debug, Deserialize)]
pub struct FeedError {
    #[serde(default)]
    pub detailed_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

/// One table row. `c` is absent or `null` for rows the endpoint left blank,
/// and individual cells are `null` when empty.
#[derive(Debug, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub c: Option<Vec<Option<TableCell>>>,
}

#[derive(Debug, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub v: Option<Value>,
}

impl Payload {
    /// True when the endpoint reported an error status for the query.
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ERROR)
    }

    /// Message of the first detailed error entry, if any.
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors
            .first()
            .and_then(|e| e.detailed_message.as_deref())
            .filter(|m| !m.is_empty())
    }
}

impl TableCell {
    /// Renders the raw cell value the way a JavaScript `String(v)` call would.
    pub fn text(&self) -> String {
        match &self.v {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Number(n)) => number_text(n),
            Some(other) => other.to_string(),
        }
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return exponent_text(f);
    }
    if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Exponent form with an explicit sign on positive exponents (`1e+21`).
fn exponent_text(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}
