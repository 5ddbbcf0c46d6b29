//! atlctl - Provision Jira and Confluence Cloud for teaching tenancies
//!
//! A CLI tool and library to create groups, projects, project roles,
//! permission schemes and spaces through the Atlassian Cloud REST APIs.
//!
//! # Features
//!
//! - Chainable request specs (base URL, queries, payload, headers)
//! - One instrumented dispatcher logging every call before and after
//! - Declarative user/group grants rendered into Jira and Confluence payloads
//! - Named permission presets (standard and elevated)
//! - Dry-run rendering of payloads as JSON, YAML or a table
//!
//! # Example
//!
//! ```bash
//! # Create a group
//! atlctl group create comp1000-students
//!
//! # Preview a permission scheme with a tutor group
//! atlctl scheme create COMP1000 --group g-students --group g-tutors:tutor --dry-run
//!
//! # Create a space readable by students
//! atlctl space create "COMP1000" COMP1000 --group g-students:student
//! ```

pub mod atlassian;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod permissions;
pub mod ui;

pub use atlassian::{
    run_group_command, run_project_command, run_role_command, run_scheme_command,
    run_space_command, ApiResponse, AtlassianClient, CredentialResolver, Credentials, Payload,
    RequestSpec, SiteResolver, Sites,
};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{AtlError, Result};
pub use permissions::{
    PermissionScheme, Preset, SpaceOperation, SpacePermissions, Subject, SubjectType,
};
