//! Confluence space permission payloads

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::grants::GrantSet;
use super::presets::{self, Preset};
use super::subject::{Subject, SubjectType};

/// An (operation, target type) pair, e.g. ("create", "page")
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpaceOperation {
    pub operation: String,
    #[serde(rename = "targetType")]
    pub target_type: String,
}

impl SpaceOperation {
    pub fn new(operation: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            target_type: target_type.into(),
        }
    }
}

/// Grants for one subject together with its `size` field
///
/// Confluence requires `size` alongside the subject results but does not
/// document its meaning; it is passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceGrants {
    pub size: u32,
    pub operations: Vec<SpaceOperation>,
}

/// `{"type": .., "accountId"|"id": ..}` entry inside `results`
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRef {
    pub subject: Subject,
}

impl Serialize for SubjectRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", &self.subject.subject_type)?;
        map.serialize_entry(self.subject.subject_type.id_field(), &self.subject.id)?;
        map.end()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubjectResults {
    pub results: Vec<SubjectRef>,
    pub size: u32,
}

/// Subjects keyed by type; exactly one of the two is present per record
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SpaceSubjects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SubjectResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<SubjectResults>,
}

impl SpaceSubjects {
    fn single(subject: &Subject, size: u32) -> Self {
        let results = SubjectResults {
            results: vec![SubjectRef {
                subject: subject.clone(),
            }],
            size,
        };
        match subject.subject_type {
            SubjectType::User => Self {
                user: Some(results),
                group: None,
            },
            SubjectType::Group => Self {
                user: None,
                group: Some(results),
            },
        }
    }
}

/// One entry of the `permissions` array in POST /rest/api/space
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpacePermissionRecord {
    pub subjects: SpaceSubjects,
    pub operation: SpaceOperation,
    pub anonymous_access: bool,
    pub unlicensed_access: bool,
}

/// Space permissions per subject for one space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacePermissions {
    grants: GrantSet<SpaceGrants>,
}

impl SpacePermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a subject's operations, replacing any earlier entry
    pub fn add_grants<I, O>(&mut self, subject: Subject, size: u32, operations: I) -> &mut Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SpaceOperation>,
    {
        let operations = operations.into_iter().map(Into::into).collect();
        self.grants
            .add_grants(subject, SpaceGrants { size, operations });
        self
    }

    /// Set a subject's operations from a named preset
    pub fn add_preset(&mut self, subject: Subject, size: u32, preset: Preset) -> &mut Self {
        self.add_grants(subject, size, presets::confluence::grants(preset))
    }

    pub fn remove_grants(&mut self, subject_type: SubjectType, subject_id: &str) -> &mut Self {
        self.grants.remove_grants(subject_type, subject_id);
        self
    }

    pub fn grants(&self) -> &GrantSet<SpaceGrants> {
        &self.grants
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// One record per (subject, operation), subjects first in insertion order
    pub fn records(&self) -> Vec<SpacePermissionRecord> {
        self.grants
            .iter()
            .flat_map(|(subject, grants)| {
                grants
                    .operations
                    .iter()
                    .map(move |operation| SpacePermissionRecord {
                        subjects: SpaceSubjects::single(subject, grants.size),
                        operation: operation.clone(),
                        anonymous_access: false,
                        unlicensed_access: false,
                    })
            })
            .collect()
    }
}

impl From<(&str, &str)> for SpaceOperation {
    fn from((operation, target_type): (&str, &str)) -> Self {
        Self::new(operation, target_type)
    }
}
