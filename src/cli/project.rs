//! Project command definitions and arguments

use clap::Subcommand;

/// Actions for the 'project' command
#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Create a blank project from the scrum classic template
    Create {
        /// Project name
        name: String,

        /// Project key (unique, max. 10 characters)
        key: String,
    },

    /// Assign a permission scheme to a project
    AssignScheme {
        /// Project key or ID
        project: String,

        /// Permission scheme ID
        scheme_id: u64,
    },

    /// Delete a project
    Delete {
        /// Project key or ID
        project: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}
