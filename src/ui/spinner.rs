//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with the given message
///
/// Returns `None` in batch mode.
pub fn create_spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Finish spinner with a message
pub fn finish_spinner(spinner: Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.finish_with_message(message.to_string());
    }
}

/// Finish spinner with a check mark or a cross depending on the status code
pub fn finish_spinner_with_status(spinner: Option<ProgressBar>, status: u16) {
    if let Some(s) = spinner {
        if (200..300).contains(&status) {
            s.finish_with_message(format!("✓ Done ({})", status));
        } else {
            s.finish_with_message(format!("✗ Failed ({})", status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_spinner_quiet_mode() {
        assert!(create_spinner("test", true).is_none());
    }

    #[test]
    fn test_finish_spinner_none() {
        finish_spinner(None, "Done");
    }

    #[test]
    fn test_finish_spinner_with_status_none() {
        finish_spinner_with_status(None, 404);
    }

    #[test]
    fn test_create_spinner_visible() {
        let spinner = create_spinner("Creating group...", false);
        assert!(spinner.is_some());
        finish_spinner_with_status(spinner, 201);
    }
}
