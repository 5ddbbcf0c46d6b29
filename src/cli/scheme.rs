//! Permission scheme command definitions and arguments

use clap::{Parser, Subcommand};

use super::grants::GrantArg;
use crate::permissions::Preset;

/// Actions for the 'scheme' command
#[derive(Subcommand, Debug)]
pub enum SchemeAction {
    /// Create a permission scheme from user and group grants
    Create(SchemeCreateArgs),
}

/// Arguments for 'scheme create'
#[derive(Parser, Debug)]
pub struct SchemeCreateArgs {
    /// Scheme name (must be unique within the Jira site)
    pub name: String,

    /// Scheme description
    #[arg(short = 'd', long, default_value = "")]
    pub description: String,

    /// User grant as ACCOUNT_ID or ACCOUNT_ID:PRESET (repeatable)
    ///
    ///   PRESET   standard|student|user or elevated|tutor|admin
    #[arg(long = "user", verbatim_doc_comment)]
    pub users: Vec<GrantArg>,

    /// Group grant as GROUP_ID or GROUP_ID:PRESET (repeatable)
    #[arg(long = "group")]
    pub groups: Vec<GrantArg>,

    /// Preset for subjects given without one
    #[arg(short = 'p', long, default_value = "standard", value_parser = parse_preset)]
    pub preset: Preset,

    /// Explicit permission keys for subjects given without a preset (repeatable, overrides --preset)
    #[arg(long = "permission")]
    pub permissions: Vec<String>,

    /// Print the request body instead of sending it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

pub(crate) fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse::<Preset>().map_err(|e| e.to_string())
}
