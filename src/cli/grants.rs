//! Grant argument parsing

use std::str::FromStr;

use crate::error::AtlError;
use crate::permissions::{Preset, SpaceOperation};

/// A subject id with an optional preset, written `ID` or `ID:PRESET`
///
/// Jira account ids contain colons themselves (`712020:091d...`), so only a
/// trailing segment that names a preset is split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantArg {
    pub id: String,
    pub preset: Option<Preset>,
}

impl FromStr for GrantArg {
    type Err = AtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (id, preset) = match s.rsplit_once(':') {
            Some((id, suffix)) => match suffix.parse::<Preset>() {
                Ok(preset) => (id, Some(preset)),
                Err(_) => (s, None),
            },
            None => (s, None),
        };

        if id.is_empty() {
            return Err(AtlError::InvalidGrant(format!(
                "missing subject id in '{}'",
                s
            )));
        }

        Ok(Self {
            id: id.to_string(),
            preset,
        })
    }
}

/// Parse an "operation:targetType" string, e.g. "create:page"
pub fn parse_operation(s: &str) -> Result<SpaceOperation, String> {
    match s.split_once(':') {
        Some((operation, target)) => {
            let operation = operation.trim();
            let target = target.trim();
            if operation.is_empty() || target.is_empty() {
                return Err(format!("Empty operation or target in '{}'", s));
            }
            Ok(SpaceOperation::new(operation, target))
        }
        None => Err(format!(
            "Invalid operation format '{}'. Expected operation:targetType",
            s
        )),
    }
}
