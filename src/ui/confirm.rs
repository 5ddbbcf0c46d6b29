//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{AtlError, Result};

/// Ask the user to confirm a destructive action
///
/// Returns `true` without prompting when `skip` is set (`--yes` or `--batch`).
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AtlError::Config(format!("Confirmation prompt failed: {}", e)))
}
