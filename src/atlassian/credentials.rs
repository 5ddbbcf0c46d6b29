//! Basic-auth credential resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{AtlError, Result};

/// Credentials file structure (shared with SiteResolver)
#[derive(Deserialize, Debug, Default)]
pub(crate) struct CredentialsFile {
    pub user: Option<String>,
    pub token: Option<String>,
    pub site: Option<String>,
    pub jira_host: Option<String>,
    pub confluence_host: Option<String>,
}

impl CredentialsFile {
    /// Load the credentials file. Returns `None` if it does not exist.
    pub(crate) fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let file = serde_json::from_str(&content).map_err(|e| {
            AtlError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(file))
    }

    /// Default location: ~/.atlctl/credentials.json
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(credentials::DIR_NAME).join(credentials::FILE_NAME))
    }
}

/// Account email and API token attached to every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub token: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("token", &"***")
            .finish()
    }
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    file_path: Option<PathBuf>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver {
    /// Create a resolver using the default credentials file
    pub fn new() -> Self {
        Self {
            file_path: CredentialsFile::default_path(),
        }
    }

    /// Create a resolver with a custom credentials file (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file_path: Some(path),
        }
    }

    /// Resolve user and token, each independently, from:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (ATLASSIAN_USER, ATLASSIAN_API_TOKEN)
    /// 3. Credentials file (~/.atlctl/credentials.json)
    pub fn resolve(&self, cli_user: Option<&str>, cli_token: Option<&str>) -> Result<Credentials> {
        self.resolve_with(cli_user, cli_token, |name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_with<F>(
        &self,
        cli_user: Option<&str>,
        cli_token: Option<&str>,
        env: F,
    ) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &self.file_path {
            Some(path) => CredentialsFile::load(path)?,
            None => None,
        }
        .unwrap_or_default();

        let user = pick("user", cli_user, credentials::USER_ENV_VAR, &env, file.user);
        let token = pick("token", cli_token, credentials::TOKEN_ENV_VAR, &env, file.token);

        match (user, token) {
            (Some(user), Some(token)) => Ok(Credentials { user, token }),
            (user, _) => Err(AtlError::CredentialsNotFound(
                self.not_found_message(user.is_none()),
            )),
        }
    }

    /// Generate helpful error message when credentials are incomplete
    fn not_found_message(&self, missing_user: bool) -> String {
        let missing = if missing_user { "account email" } else { "API token" };
        let file_info = self
            .file_path
            .as_ref()
            .map(|p| format!(" and credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No Atlassian {} found. Please provide credentials using one of:\n\
             \n\
             1. CLI arguments:     atlctl --email <EMAIL> --token <API_TOKEN>\n\
             2. Environment vars:  export {}=<EMAIL> {}=<API_TOKEN>\n\
             3. Credentials file:  {{\"user\": \"<EMAIL>\", \"token\": \"<API_TOKEN>\"}}\n\
             \n\
             Checked: CLI arguments, env vars{}",
            missing,
            credentials::USER_ENV_VAR,
            credentials::TOKEN_ENV_VAR,
            file_info
        )
    }
}

/// First value found in CLI → env → file order
pub(crate) fn pick<F>(
    label: &str,
    cli: Option<&str>,
    env_var: &str,
    env: &F,
    file: Option<String>,
) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = cli {
        debug!("Using {} from CLI argument", label);
        return Some(value.to_string());
    }
    if let Some(value) = env(env_var).filter(|v| !v.is_empty()) {
        debug!("Using {} from {} environment variable", label, env_var);
        return Some(value);
    }
    if let Some(value) = file.filter(|v| !v.is_empty()) {
        debug!("Using {} from credentials file", label);
        return Some(value);
    }
    None
}
