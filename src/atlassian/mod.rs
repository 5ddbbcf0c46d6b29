//! Atlassian Cloud API client module
//!
//! Request building, the instrumented dispatcher, credential and site
//! resolution, and thin wrappers over the Jira and Confluence endpoints
//! used for provisioning.

mod client;
mod credentials;
pub mod groups;
pub(crate) mod helpers;
pub mod projects;
mod request;
mod response;
pub mod roles;
pub mod schemes;
mod site;
pub mod spaces;

pub use client::AtlassianClient;
pub use credentials::{CredentialResolver, Credentials};
pub use groups::run_group_command;
pub use projects::run_project_command;
pub use request::{pretty_json, Payload, RequestSpec};
pub use response::ApiResponse;
pub use roles::run_role_command;
pub use schemes::{build_permission_scheme, print_scheme_dry_run, run_scheme_command};
pub use site::{site_url, SiteResolver, Sites};
pub use spaces::{
    build_space_permissions, print_space_dry_run, run_space_command, CreateSpaceRequest,
};
