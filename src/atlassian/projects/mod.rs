//! Jira projects module - create, delete and assign permission schemes

mod api;
mod commands;
mod models;

pub use commands::run_project_command;
pub use models::{AssignSchemeRequest, CreateProjectRequest};
