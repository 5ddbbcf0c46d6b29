//! Dry-run output for permission scheme and space payloads

use comfy_table::{presets::NOTHING, Table};

use super::render_structured;
use crate::atlassian::CreateSpaceRequest;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::permissions::PermissionSchemeRequest;

/// Print a permission scheme request body, or its grants as a table
pub fn output_scheme_request(request: &PermissionSchemeRequest, format: OutputFormat) -> Result<()> {
    println!("{}", render_scheme_request(request, format)?);
    Ok(())
}

/// Print a space creation request body, or its grants as a table
pub fn output_space_request(request: &CreateSpaceRequest, format: OutputFormat) -> Result<()> {
    println!("{}", render_space_request(request, format)?);
    Ok(())
}

pub(crate) fn render_scheme_request(
    request: &PermissionSchemeRequest,
    format: OutputFormat,
) -> Result<String> {
    if format != OutputFormat::Table {
        return render_structured(request, format);
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["TYPE", "SUBJECT", "PERMISSION"]);
    for record in &request.permissions {
        table.add_row(vec![
            record.holder.holder_type.as_str(),
            record.holder.value.as_str(),
            record.permission.as_str(),
        ]);
    }
    Ok(table.to_string())
}

pub(crate) fn render_space_request(
    request: &CreateSpaceRequest,
    format: OutputFormat,
) -> Result<String> {
    if format != OutputFormat::Table {
        return render_structured(request, format);
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["TYPE", "SUBJECT", "SIZE", "OPERATION", "TARGET"]);
    for record in &request.permissions {
        let (subject_type, results) = match (&record.subjects.user, &record.subjects.group) {
            (Some(results), _) => ("user", results),
            (None, Some(results)) => ("group", results),
            (None, None) => continue,
        };
        for subject in &results.results {
            table.add_row(vec![
                subject_type.to_string(),
                subject.subject.id.clone(),
                results.size.to_string(),
                record.operation.operation.clone(),
                record.operation.target_type.clone(),
            ]);
        }
    }
    Ok(table.to_string())
}
