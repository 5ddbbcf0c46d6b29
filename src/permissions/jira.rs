//! Jira permission scheme payloads

use serde::Serialize;

use super::grants::GrantSet;
use super::presets::{self, Preset};
use super::subject::{Subject, SubjectType};

/// Who a permission scheme entry applies to
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    #[serde(rename = "type")]
    pub holder_type: SubjectType,
    pub value: String,
}

/// One permission scheme entry: a holder and a permission key
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JiraPermissionRecord {
    pub holder: Holder,
    pub permission: String,
}

/// Request body for POST /rest/api/3/permissionscheme
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PermissionSchemeRequest {
    pub name: String,
    pub description: String,
    pub permissions: Vec<JiraPermissionRecord>,
}

/// Permission keys granted per subject for one scheme
///
/// See the built-in Jira permission keys at
/// <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-permission-schemes/>.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionScheme {
    grants: GrantSet<Vec<String>>,
}

impl PermissionScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a subject's permission keys, replacing any earlier list
    pub fn add_grants<I, S>(&mut self, subject: Subject, permissions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions = permissions.into_iter().map(Into::into).collect();
        self.grants.add_grants(subject, permissions);
        self
    }

    /// Set a subject's permission keys from a named preset
    pub fn add_preset(&mut self, subject: Subject, preset: Preset) -> &mut Self {
        self.grants
            .add_grants(subject, presets::jira::grants(preset));
        self
    }

    pub fn remove_grants(&mut self, subject_type: SubjectType, subject_id: &str) -> &mut Self {
        self.grants.remove_grants(subject_type, subject_id);
        self
    }

    pub fn grants(&self) -> &GrantSet<Vec<String>> {
        &self.grants
    }

    /// One record per (subject, permission), subjects first in insertion order
    pub fn records(&self) -> Vec<JiraPermissionRecord> {
        self.grants
            .iter()
            .flat_map(|(subject, permissions)| {
                permissions.iter().map(move |permission| JiraPermissionRecord {
                    holder: Holder {
                        holder_type: subject.subject_type,
                        value: subject.id.clone(),
                    },
                    permission: permission.clone(),
                })
            })
            .collect()
    }

    /// Full request body for creating the scheme
    pub fn request(&self, name: &str, description: &str) -> PermissionSchemeRequest {
        PermissionSchemeRequest {
            name: name.to_string(),
            description: description.to_string(),
            permissions: self.records(),
        }
    }
}
