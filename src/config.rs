/// Configuration constants for the Jira and Confluence REST APIs
pub mod api {
    /// Jira Cloud REST API v3 base path
    pub const JIRA_BASE_PATH: &str = "/rest/api/3";

    /// Confluence Cloud REST API v1 base path (relative to the Confluence site)
    pub const CONFLUENCE_BASE_PATH: &str = "/rest/api";

    /// Path suffix appended to a bare site host to reach Confluence
    pub const CONFLUENCE_SITE_SUFFIX: &str = "/wiki";

    /// Headers attached to every request unless overridden
    pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
        ("Accept", "application/json"),
        ("Content-Type", "application/json"),
    ];

    /// Progress line logged when a call has no description
    pub const DEFAULT_DESCRIPTION: &str = "Performing API call...";

    /// Project template used for new scrum projects
    pub const SCRUM_TEMPLATE_KEY: &str = "com.pyxis.greenhopper.jira:gh-simplified-scrum-classic";

    /// Project type used for new scrum projects
    pub const SOFTWARE_PROJECT_TYPE: &str = "software";
}

/// Configuration constants for credentials and site resolution
pub mod credentials {
    /// Directory holding the credentials file (relative to HOME)
    pub const DIR_NAME: &str = ".atlctl";

    /// Credentials file name
    pub const FILE_NAME: &str = "credentials.json";

    /// Environment variable for the Atlassian account email
    pub const USER_ENV_VAR: &str = "ATLASSIAN_USER";

    /// Environment variable for the Atlassian API token
    pub const TOKEN_ENV_VAR: &str = "ATLASSIAN_API_TOKEN";

    /// Environment variable for the Jira host
    pub const JIRA_HOST_ENV_VAR: &str = "ATLASSIAN_JIRA_HOST";

    /// Environment variable for the Confluence host
    pub const CONFLUENCE_HOST_ENV_VAR: &str = "ATLASSIAN_CONFLUENCE_HOST";

    /// Environment variable for a shared site (sets both hosts)
    pub const SITE_ENV_VAR: &str = "ATLASSIAN_SITE";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Default connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Default `size` field for Confluence space permission subjects
    pub const SPACE_SUBJECT_SIZE: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_paths_format() {
        assert!(api::JIRA_BASE_PATH.starts_with('/'));
        assert!(api::CONFLUENCE_BASE_PATH.starts_with('/'));
        assert!(!api::JIRA_BASE_PATH.ends_with('/'));
    }

    #[test]
    fn test_default_headers_are_json() {
        assert_eq!(api::DEFAULT_HEADERS.len(), 2);
        assert!(api::DEFAULT_HEADERS
            .iter()
            .all(|(_, value)| *value == "application/json"));
    }

    #[test]
    fn test_connect_timeout_below_total_timeout() {
        assert!(defaults::CONNECT_TIMEOUT_SECS < defaults::TIMEOUT_SECS);
    }
}
