//! Named permission presets
//!
//! Each product has a standard set (students / regular users) and an
//! elevated set (tutors / space admins).

use std::fmt;
use std::str::FromStr;

use crate::error::AtlError;

/// Which named grant list to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Student (Jira) or user (Confluence) permissions
    Standard,
    /// Tutor (Jira) or admin (Confluence) permissions
    Elevated,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Elevated => "elevated",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = AtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "student" | "user" => Ok(Preset::Standard),
            "elevated" | "tutor" | "admin" => Ok(Preset::Elevated),
            other => Err(AtlError::InvalidGrant(format!(
                "unknown preset '{}' (expected standard/student/user or elevated/tutor/admin)",
                other
            ))),
        }
    }
}

/// Jira permission scheme presets
pub mod jira {
    use super::Preset;

    /// Permissions for students
    pub const STANDARD: &[&str] = &[
        // Issues
        "BROWSE_PROJECTS",
        "ASSIGN_ISSUES",
        "CLOSE_ISSUES",
        "CREATE_ISSUES",
        "DELETE_ISSUES",
        "EDIT_ISSUES",
        "MOVE_ISSUES",
        "RESOLVE_ISSUES",
        "SCHEDULE_ISSUES",
        "TRANSITION_ISSUES",
        // Comments
        "ADD_COMMENTS",
        "DELETE_OWN_COMMENTS",
        "EDIT_OWN_COMMENTS",
        // Attachments
        "CREATE_ATTACHMENTS",
        "DELETE_OWN_ATTACHMENTS",
        // Time tracking
        "DELETE_OWN_WORKLOGS",
        "EDIT_OWN_WORKLOGS",
        "WORK_ON_ISSUES",
    ];

    /// Permissions for tutors: standard plus moderation of other users' work
    pub const ELEVATED: &[&str] = &[
        // Issues
        "BROWSE_PROJECTS",
        "ASSIGN_ISSUES",
        "CLOSE_ISSUES",
        "CREATE_ISSUES",
        "DELETE_ISSUES",
        "EDIT_ISSUES",
        "MOVE_ISSUES",
        "RESOLVE_ISSUES",
        "SCHEDULE_ISSUES",
        "TRANSITION_ISSUES",
        // Comments
        "ADD_COMMENTS",
        "DELETE_OWN_COMMENTS",
        "DELETE_ALL_COMMENTS",
        "EDIT_OWN_COMMENTS",
        "EDIT_ALL_COMMENTS",
        // Attachments
        "CREATE_ATTACHMENTS",
        "DELETE_OWN_ATTACHMENTS",
        "DELETE_ALL_ATTACHMENTS",
        // Time tracking
        "DELETE_OWN_WORKLOGS",
        "DELETE_ALL_WORKLOGS",
        "EDIT_OWN_WORKLOGS",
        "EDIT_ALL_WORKLOGS",
        "WORK_ON_ISSUES",
    ];

    pub fn standard_grants() -> Vec<String> {
        STANDARD.iter().map(|p| p.to_string()).collect()
    }

    pub fn elevated_grants() -> Vec<String> {
        ELEVATED.iter().map(|p| p.to_string()).collect()
    }

    pub fn grants(preset: Preset) -> Vec<String> {
        match preset {
            Preset::Standard => standard_grants(),
            Preset::Elevated => elevated_grants(),
        }
    }
}

/// Confluence space permission presets as (operation, target type) pairs
pub mod confluence {
    use super::Preset;
    use crate::permissions::confluence::SpaceOperation;

    /// Permissions for regular space users
    pub const STANDARD: &[(&str, &str)] = &[
        ("read", "space"),
        ("create", "page"),
        ("archive", "page"),
        ("delete", "page"),
        ("create", "blogpost"),
        ("delete", "blogpost"),
        ("create", "comment"),
        ("delete", "comment"),
        ("create", "attachment"),
        ("delete", "attachment"),
    ];

    /// Permissions for space admins
    pub const ELEVATED: &[(&str, &str)] = &[
        ("administer", "space"),
        ("read", "space"),
        ("delete", "space"),
        ("export", "space"),
        ("create", "page"),
        ("archive", "page"),
        ("delete", "page"),
        ("create", "blogpost"),
        ("delete", "blogpost"),
        ("create", "comment"),
        ("delete", "comment"),
        ("create", "attachment"),
        ("delete", "attachment"),
        ("create", "restrict_content"),
        ("delete", "restrict_content"),
    ];

    fn to_operations(pairs: &[(&str, &str)]) -> Vec<SpaceOperation> {
        pairs
            .iter()
            .map(|(operation, target)| SpaceOperation::new(*operation, *target))
            .collect()
    }

    pub fn standard_grants() -> Vec<SpaceOperation> {
        to_operations(STANDARD)
    }

    pub fn elevated_grants() -> Vec<SpaceOperation> {
        to_operations(ELEVATED)
    }

    pub fn grants(preset: Preset) -> Vec<SpaceOperation> {
        match preset {
            Preset::Standard => standard_grants(),
            Preset::Elevated => elevated_grants(),
        }
    }
}
