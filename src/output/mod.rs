//! Output formatting for API responses and dry-run payloads

mod grants;
mod response;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{AtlError, Result};

pub use grants::{output_scheme_request, output_space_request};
pub use response::output_response;

/// Serialize a value as pretty JSON or YAML
///
/// `Table` has no generic rendering and falls back to JSON; callers that
/// support tables build them before reaching here.
pub(crate) fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| AtlError::Json(e.to_string())),
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_structured_json() {
        let out = render_structured(&json!({"name": "students"}), OutputFormat::Json).unwrap();
        assert_eq!(out, "{\n  \"name\": \"students\"\n}");
    }

    #[test]
    fn test_render_structured_yaml() {
        let out = render_structured(&json!({"name": "students"}), OutputFormat::Yaml).unwrap();
        assert_eq!(out, "name: students");
    }
}
