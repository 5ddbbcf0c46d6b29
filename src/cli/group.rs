//! Group command definitions and arguments

use clap::Subcommand;

/// Actions for the 'group' command
#[derive(Subcommand, Debug)]
pub enum GroupAction {
    /// Create a Jira group
    Create {
        /// Group name
        name: String,
    },

    /// Add a user to a group
    AddUser {
        /// Group ID
        group_id: String,

        /// Atlassian account ID of the user
        account_id: String,
    },

    /// Remove a user from a group
    #[command(visible_alias = "rm-user")]
    RemoveUser {
        /// Group ID
        group_id: String,

        /// Atlassian account ID of the user
        account_id: String,
    },
}
