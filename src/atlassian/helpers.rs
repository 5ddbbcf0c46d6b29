//! Shared helpers for command handlers

use std::borrow::Cow;

use indicatif::ProgressBar;
use log::debug;
use serde_json::Value;

use super::response::ApiResponse;
use crate::cli::{GrantArg, OutputFormat};
use crate::error::{AtlError, Result};
use crate::output::output_response;
use crate::permissions::{Preset, Subject, SubjectType};
use crate::ui::finish_spinner_with_status;

/// Settle the spinner, print the response and fail on a non-2xx status
///
/// The body is printed before the error is returned so Jira's validation
/// messages stay visible.
pub(crate) fn report_response(
    result: Result<ApiResponse>,
    spinner: Option<ProgressBar>,
    format: OutputFormat,
) -> Result<()> {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            return Err(e);
        }
    };

    finish_spinner_with_status(spinner, response.status);
    output_response(&response, format)?;

    if response.is_success() {
        debug!("Request succeeded with status {}", response.status);
        Ok(())
    } else {
        Err(AtlError::Api {
            status: response.status,
            message: error_message(&response),
        })
    }
}

/// Collect the error text Jira (`errorMessages`, `errors`) or Confluence
/// (`message`) put in an error body
pub(crate) fn error_message(response: &ApiResponse) -> String {
    let body = response.json_or_empty();
    let mut parts: Vec<String> = Vec::new();

    if let Some(messages) = body.get("errorMessages").and_then(Value::as_array) {
        parts.extend(messages.iter().filter_map(Value::as_str).map(String::from));
    }
    if let Some(errors) = body.get("errors").and_then(Value::as_object) {
        for (field, message) in errors {
            match message.as_str() {
                Some(text) => parts.push(format!("{}: {}", field, text)),
                None => parts.push(format!("{}: {}", field, message)),
            }
        }
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        parts.push(message.to_string());
    }

    if parts.is_empty() {
        match response.raw_text() {
            Some(raw) => raw.to_string(),
            None => format!("request failed with status {}", response.status),
        }
    } else {
        parts.join("; ")
    }
}

/// Percent-encode a user-supplied key or id for use as one path segment
pub(crate) fn path_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Turn grant arguments into subjects of one type, keeping their presets
pub(crate) fn subjects(
    subject_type: SubjectType,
    grants: &[GrantArg],
) -> impl Iterator<Item = (Subject, Option<Preset>)> + '_ {
    grants
        .iter()
        .map(move |grant| (Subject::new(subject_type, grant.id.clone()), grant.preset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_error_message_jira() {
        let r = response(
            400,
            r#"{"errorMessages":["Group already exists"],"errors":{"key":"Invalid key"}}"#,
        );
        assert_eq!(error_message(&r), "Group already exists; key: Invalid key");
    }

    #[test]
    fn test_error_message_confluence() {
        let r = response(404, r#"{"statusCode":404,"message":"No space with key : K"}"#);
        assert_eq!(error_message(&r), "No space with key : K");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            error_message(&response(500, "")),
            "request failed with status 500"
        );
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("COMP1000"), "COMP1000");
        assert_eq!(path_segment("A/B?c#d"), "A%2FB%3Fc%23d");
    }

    #[test]
    fn test_subjects_keep_presets() {
        let grants = vec![
            "g-1".parse::<GrantArg>().unwrap(),
            "g-2:tutor".parse::<GrantArg>().unwrap(),
        ];
        let subjects: Vec<_> = subjects(SubjectType::Group, &grants).collect();
        assert_eq!(subjects[0], (Subject::group("g-1"), None));
        assert_eq!(subjects[1], (Subject::group("g-2"), Some(Preset::Elevated)));
    }

    #[test]
    fn test_error_message_uses_plain_text_body() {
        let r = response(401, "Client must be authenticated to access this resource.");
        assert_eq!(
            error_message(&r),
            "Client must be authenticated to access this resource."
        );
    }

    #[test]
    fn test_report_html_error_keeps_body() {
        let err = report_response(
            Ok(response(502, "<html>Bad gateway</html>")),
            None,
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("<html>Bad gateway</html>"));
    }

    #[test]
    fn test_report_success() {
        assert!(report_response(Ok(response(204, "")), None, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_report_error_status() {
        let err = report_response(
            Ok(response(403, r#"{"errorMessages":["Forbidden"]}"#)),
            None,
            OutputFormat::Json,
        )
        .unwrap_err();
        match err {
            AtlError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("Unexpected error {:?}", other),
        }
    }
}
