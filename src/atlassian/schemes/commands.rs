//! Permission scheme command handlers

use log::{debug, warn};

use crate::atlassian::helpers::{report_response, subjects};
use crate::atlassian::AtlassianClient;
use crate::cli::{Cli, OutputFormat, SchemeAction, SchemeCreateArgs};
use crate::error::Result;
use crate::output::output_scheme_request;
use crate::permissions::{PermissionScheme, SubjectType};
use crate::ui::create_spinner;

/// Run a 'scheme' subcommand
pub async fn run_scheme_command(
    client: &AtlassianClient,
    cli: &Cli,
    action: &SchemeAction,
) -> Result<()> {
    match action {
        SchemeAction::Create(args) => {
            let scheme = build_permission_scheme(args);
            if scheme.grants().is_empty() {
                warn!("Permission scheme '{}' has no grants", args.name);
            }
            let spinner = create_spinner(
                &format!("Creating permission scheme '{}'...", args.name),
                cli.batch,
            );
            let result = client
                .create_permission_scheme(&scheme, &args.name, &args.description)
                .await;
            report_response(result, spinner, cli.output)
        }
    }
}

/// Print the request body 'scheme create' would send
pub fn print_scheme_dry_run(args: &SchemeCreateArgs, format: OutputFormat) -> Result<()> {
    let scheme = build_permission_scheme(args);
    output_scheme_request(&scheme.request(&args.name, &args.description), format)
}

/// Accumulate grants for every --user and --group argument
///
/// A subject's own preset wins; otherwise the explicit --permission list,
/// otherwise the --preset default.
pub fn build_permission_scheme(args: &SchemeCreateArgs) -> PermissionScheme {
    let mut scheme = PermissionScheme::new();
    let subjects = subjects(SubjectType::User, &args.users)
        .chain(subjects(SubjectType::Group, &args.groups));

    for (subject, preset) in subjects {
        debug!("Granting scheme permissions to {}", subject);
        match preset {
            Some(preset) => scheme.add_preset(subject, preset),
            None if !args.permissions.is_empty() => {
                scheme.add_grants(subject, args.permissions.iter().cloned())
            }
            None => scheme.add_preset(subject, args.preset),
        };
    }
    scheme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::permissions::presets;
    use clap::Parser;

    fn create_args(args: &[&str]) -> SchemeCreateArgs {
        let mut argv = vec!["atlctl", "scheme", "create", "COMP1000"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Command::Scheme {
                action: SchemeAction::Create(args),
            } => args,
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_subject_preset_overrides_default() {
        let scheme = build_permission_scheme(&create_args(&[
            "--group",
            "g-students",
            "--group",
            "g-tutors:tutor",
        ]));
        let records = scheme.records();
        let students = records.iter().filter(|r| r.holder.value == "g-students").count();
        let tutors = records.iter().filter(|r| r.holder.value == "g-tutors").count();
        assert_eq!(students, presets::jira::STANDARD.len());
        assert_eq!(tutors, presets::jira::ELEVATED.len());
    }

    #[test]
    fn test_explicit_permissions_for_plain_subjects() {
        let scheme = build_permission_scheme(&create_args(&[
            "--user",
            "712020:abc",
            "--permission",
            "BROWSE_PROJECTS",
            "--permission",
            "ADD_COMMENTS",
        ]));
        let permissions: Vec<String> = scheme.records().into_iter().map(|r| r.permission).collect();
        assert_eq!(permissions, vec!["BROWSE_PROJECTS", "ADD_COMMENTS"]);
    }

    #[test]
    fn test_users_precede_groups() {
        let scheme = build_permission_scheme(&create_args(&[
            "--group", "g-1", "--user", "u-1", "--permission", "BROWSE_PROJECTS",
        ]));
        let holders: Vec<String> = scheme
            .records()
            .into_iter()
            .map(|r| r.holder.value)
            .collect();
        assert_eq!(holders, vec!["u-1", "g-1"]);
    }

    #[test]
    fn test_no_subjects_gives_empty_scheme() {
        let scheme = build_permission_scheme(&create_args(&[]));
        assert!(scheme.grants().is_empty());
        assert!(scheme.request("COMP1000", "").permissions.is_empty());
    }
}
