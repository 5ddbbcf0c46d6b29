//! Jira permission schemes module

mod api;
mod commands;

pub use commands::{build_permission_scheme, print_scheme_dry_run, run_scheme_command};
