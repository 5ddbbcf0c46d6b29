//! Jira project roles module - roles and role actors

mod api;
mod commands;
mod models;

pub use commands::run_role_command;
pub use models::{AddActorsRequest, CreateRoleRequest};
