//! Space command definitions and arguments

use clap::{Parser, Subcommand};

use super::grants::{parse_operation, GrantArg};
use super::scheme::parse_preset;
use crate::config::defaults;
use crate::permissions::{Preset, SpaceOperation};

/// Actions for the 'space' command
#[derive(Subcommand, Debug)]
pub enum SpaceAction {
    /// Create a space, optionally with explicit permissions
    Create(SpaceCreateArgs),

    /// Delete a space
    Delete {
        /// Space key
        key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}

/// Arguments for 'space create'
///
/// Without any --user/--group the space gets Confluence's default permissions.
#[derive(Parser, Debug)]
pub struct SpaceCreateArgs {
    /// Space name
    pub name: String,

    /// Unique space key
    pub key: String,

    /// Space description
    #[arg(short = 'd', long, default_value = "")]
    pub description: String,

    /// User grant as ACCOUNT_ID or ACCOUNT_ID:PRESET (repeatable)
    #[arg(long = "user")]
    pub users: Vec<GrantArg>,

    /// Group grant as GROUP_ID or GROUP_ID:PRESET (repeatable)
    #[arg(long = "group")]
    pub groups: Vec<GrantArg>,

    /// Value of the `size` field sent with every subject
    #[arg(long, default_value_t = defaults::SPACE_SUBJECT_SIZE)]
    pub size: u32,

    /// Preset for subjects given without one
    #[arg(short = 'p', long, default_value = "standard", value_parser = parse_preset)]
    pub preset: Preset,

    /// Explicit operation:targetType grants for subjects given without a preset (repeatable)
    #[arg(long = "operation", value_parser = parse_operation)]
    pub operations: Vec<SpaceOperation>,

    /// Print the request body instead of sending it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
