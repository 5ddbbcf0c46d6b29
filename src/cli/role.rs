//! Project role command definitions and arguments

use clap::Subcommand;

/// Actions for the 'role' command
#[derive(Subcommand, Debug)]
pub enum RoleAction {
    /// Create a project role
    Create {
        /// Role name
        name: String,

        /// Role description
        #[arg(short = 'd', long, default_value = "")]
        description: String,
    },

    /// Delete a project role
    Delete {
        /// Role ID
        role_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    /// Add groups and/or users to a role in a project
    AddActors {
        /// Project key or ID
        project: String,

        /// Role ID
        role_id: String,

        /// Group ID to add (repeatable)
        #[arg(long = "group")]
        groups: Vec<String>,

        /// Account ID to add (repeatable)
        #[arg(long = "user")]
        users: Vec<String>,
    },

    /// Remove a user from a role in a project
    RemoveUser {
        /// Project key or ID
        project: String,

        /// Role ID
        role_id: String,

        /// Atlassian account ID of the user
        account_id: String,
    },

    /// Remove a group from a role in a project
    RemoveGroup {
        /// Project key or ID
        project: String,

        /// Role ID
        role_id: String,

        /// Group ID
        group_id: String,
    },
}
