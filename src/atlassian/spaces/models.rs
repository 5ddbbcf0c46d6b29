//! Confluence space request models

use serde::Serialize;

use crate::permissions::{SpacePermissionRecord, SpacePermissions};

/// Body of POST /rest/api/space
///
/// Without `permissions` Confluence applies its default space permissions.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub key: String,
    pub description: SpaceDescription,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<SpacePermissionRecord>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpaceDescription {
    pub plain: PlainText,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlainText {
    pub value: String,
}

impl CreateSpaceRequest {
    pub fn new(name: &str, key: &str, description: &str, permissions: &SpacePermissions) -> Self {
        Self {
            name: name.to_string(),
            key: key.to_string(),
            description: SpaceDescription {
                plain: PlainText {
                    value: description.to_string(),
                },
            },
            permissions: permissions.records(),
        }
    }
}
