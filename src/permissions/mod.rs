//! Permission grant model
//!
//! Declarative grants keyed by [`Subject`] rendered into the payload shapes
//! of Jira permission schemes and Confluence space permissions.

pub mod confluence;
mod grants;
pub mod jira;
pub mod presets;
mod subject;

pub use confluence::{SpaceOperation, SpacePermissionRecord, SpacePermissions};
pub use grants::GrantSet;
pub use jira::{JiraPermissionRecord, PermissionScheme, PermissionSchemeRequest};
pub use presets::Preset;
pub use subject::{Subject, SubjectType};
