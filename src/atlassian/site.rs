//! Jira and Confluence site resolution from multiple sources

use log::debug;
use std::path::PathBuf;

use crate::config::{api, credentials};
use crate::error::{AtlError, Result};

use super::credentials::{pick, CredentialsFile};

/// Base URLs of the two products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sites {
    pub jira: String,
    pub confluence: String,
}

impl Sites {
    /// Build from host names or URLs; bare hosts get an `https://` scheme
    pub fn new(jira: &str, confluence: &str) -> Self {
        Self {
            jira: site_url(jira),
            confluence: site_url(confluence),
        }
    }

    /// Both products on one Atlassian Cloud site (Confluence lives under /wiki)
    pub fn from_site(site: &str) -> Self {
        let base = site_url(site);
        Self {
            confluence: format!("{}{}", base, api::CONFLUENCE_SITE_SUFFIX),
            jira: base,
        }
    }
}

/// Normalize a host or URL into a base URL without trailing slash
pub fn site_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// Site resolution with fallback logic
pub struct SiteResolver {
    file_path: Option<PathBuf>,
}

impl Default for SiteResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteResolver {
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

    /// Resolve each product host from:
    /// 1. CLI argument (--jira-host / --confluence-host)
    /// 2. Environment variable (ATLASSIAN_JIRA_HOST / ATLASSIAN_CONFLUENCE_HOST)
    /// 3. Credentials file (`jira_host` / `confluence_host`)
    /// 4. Shared site, first ATLASSIAN_SITE then the file's `site`
    pub fn resolve(&self, cli_jira: Option<&str>, cli_confluence: Option<&str>) -> Result<Sites> {
        self.resolve_with(cli_jira, cli_confluence, |name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_with<F>(
        &self,
        cli_jira: Option<&str>,
        cli_confluence: Option<&str>,
        env: F,
    ) -> Result<Sites>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &self.file_path {
            Some(path) => CredentialsFile::load(path)?,
            None => None,
        }
        .unwrap_or_default();

        let env_site = env(credentials::SITE_ENV_VAR)
            .filter(|s| !s.is_empty())
            .map(|s| Sites::from_site(&s));
        let file_site = file.site.as_deref().map(Sites::from_site);

        let jira = pick(
            "Jira host",
            cli_jira,
            credentials::JIRA_HOST_ENV_VAR,
            &env,
            file.jira_host,
        )
        .map(|h| site_url(&h))
        .or_else(|| env_site.as_ref().map(|s| s.jira.clone()))
        .or_else(|| file_site.as_ref().map(|s| s.jira.clone()));

        let confluence = pick(
            "Confluence host",
            cli_confluence,
            credentials::CONFLUENCE_HOST_ENV_VAR,
            &env,
            file.confluence_host,
        )
        .map(|h| site_url(&h))
        .or_else(|| env_site.as_ref().map(|s| s.confluence.clone()))
        .or_else(|| file_site.as_ref().map(|s| s.confluence.clone()));

        match (jira, confluence) {
            (Some(jira), Some(confluence)) => {
                debug!("Resolved sites: jira={}, confluence={}", jira, confluence);
                Ok(Sites { jira, confluence })
            }
            (jira, _) => Err(AtlError::SiteNotFound(Self::not_found_message(
                if jira.is_none() { "Jira" } else { "Confluence" },
            ))),
        }
    }

    /// Generate helpful error message when a host is not found
    fn not_found_message(product: &str) -> String {
        format!(
            "No {} host specified. Please provide a host using one of:\n\
             \n\
             1. CLI arguments:     atlctl --jira-host <HOST> --confluence-host <HOST>\n\
             2. Environment vars:  export {}=<HOST> {}=<HOST>\n\
             3. Shared site:       export {}=<your-site>.atlassian.net\n\
             4. Credentials file:  {{\"site\": \"<your-site>.atlassian.net\"}}\n",
            product,
            credentials::JIRA_HOST_ENV_VAR,
            credentials::CONFLUENCE_HOST_ENV_VAR,
            credentials::SITE_ENV_VAR,
        )
    }
}
