//! Users and groups that grants apply to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AtlError;

/// Kind of subject a grant applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    User,
    Group,
}

impl SubjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::User => "user",
            SubjectType::Group => "group",
        }
    }

    /// JSON field carrying the subject id in Confluence payloads
    pub fn id_field(&self) -> &'static str {
        match self {
            SubjectType::User => "accountId",
            SubjectType::Group => "id",
        }
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectType {
    type Err = AtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(SubjectType::User),
            "group" => Ok(SubjectType::Group),
            other => Err(AtlError::InvalidGrant(format!(
                "unknown subject type '{}' (expected 'user' or 'group')",
                other
            ))),
        }
    }
}

/// A user (by Atlassian account id) or a group (by group id)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject {
    pub subject_type: SubjectType,
    pub id: String,
}

impl Subject {
    pub fn new(subject_type: SubjectType, id: impl Into<String>) -> Self {
        Self {
            subject_type,
            id: id.into(),
        }
    }

    pub fn user(account_id: impl Into<String>) -> Self {
        Self::new(SubjectType::User, account_id)
    }

    pub fn group(group_id: impl Into<String>) -> Self {
        Self::new(SubjectType::Group, group_id)
    }

    pub fn matches(&self, subject_type: SubjectType, id: &str) -> bool {
        self.subject_type == subject_type && self.id == id
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.subject_type, self.id)
    }
}
