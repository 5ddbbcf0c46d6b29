//! API response output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use super::render_structured;
use crate::atlassian::ApiResponse;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Print a response body in the requested format
pub fn output_response(response: &ApiResponse, format: OutputFormat) -> Result<()> {
    println!("{}", render_response(response, format)?);
    Ok(())
}

/// Non-JSON bodies are printed as received instead of as `{}`
pub(crate) fn render_response(response: &ApiResponse, format: OutputFormat) -> Result<String> {
    if let Some(raw) = response.raw_text() {
        return Ok(match format {
            OutputFormat::Table => field_table(&Value::String(raw.to_string())).to_string(),
            _ => raw.to_string(),
        });
    }

    let body = response.json_or_empty();
    match format {
        OutputFormat::Table => Ok(field_table(&body).to_string()),
        _ => render_structured(&body, format),
    }
}

/// One row per top-level field; nested values are shown as compact JSON
fn field_table(body: &Value) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["FIELD", "VALUE"]);

    match body {
        Value::Object(map) => {
            for (key, value) in map {
                table.add_row(vec![key.clone(), cell(value)]);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                table.add_row(vec![index.to_string(), cell(item)]);
            }
        }
        other => {
            table.add_row(vec!["value".to_string(), cell(other)]);
        }
    }

    table
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
