//! Confluence spaces module - create and delete spaces

mod api;
mod commands;
mod models;

pub use commands::{build_space_permissions, print_space_dry_run, run_space_command};
pub use models::{CreateSpaceRequest, PlainText, SpaceDescription};
