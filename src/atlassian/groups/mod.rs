//! Jira groups module - create groups and manage membership

mod api;
mod commands;
mod models;

pub use commands::run_group_command;
pub use models::{AddUserToGroupRequest, CreateGroupRequest};
