//! Atlassian HTTP client with instrumented dispatch

use log::{debug, info, log, Level};
use reqwest::{Client, Method};
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::Result;

use super::credentials::Credentials;
use super::request::RequestSpec;
use super::response::ApiResponse;
use super::site::Sites;

/// Jira/Confluence API client
///
/// Holds the process-wide basic-auth credentials and the two product base
/// URLs. Every call goes through [`AtlassianClient::dispatch`], which logs the
/// request before sending and the response after it arrives.
pub struct AtlassianClient {
    client: Client,
    credentials: Credentials,
    sites: Sites,
}

impl AtlassianClient {
    /// Create a client with the given request timeout
    pub fn new(credentials: Credentials, sites: Sites, timeout: Duration) -> Result<Self> {
        let connect_timeout = timeout.min(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS));
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            credentials,
            sites,
        })
    }

    pub fn sites(&self) -> &Sites {
        &self.sites
    }

    /// Start a request against the Jira site
    pub fn jira(&self) -> Result<RequestSpec> {
        RequestSpec::new(self.sites.jira.as_str())
    }

    /// Start a request against the Confluence site
    pub fn confluence(&self) -> Result<RequestSpec> {
        RequestSpec::new(self.sites.confluence.as_str())
    }

    pub async fn get(
        &self,
        spec: RequestSpec,
        endpoint: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        self.dispatch(Method::GET, spec, endpoint, description).await
    }

    pub async fn post(
        &self,
        spec: RequestSpec,
        endpoint: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        self.dispatch(Method::POST, spec, endpoint, description)
            .await
    }

    pub async fn put(
        &self,
        spec: RequestSpec,
        endpoint: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        self.dispatch(Method::PUT, spec, endpoint, description).await
    }

    pub async fn delete(
        &self,
        spec: RequestSpec,
        endpoint: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        self.dispatch(Method::DELETE, spec, endpoint, description)
            .await
    }

    /// Send one request and log it on both sides
    ///
    /// Non-2xx responses are returned as `Ok`; only transport failures are
    /// errors, and those are left to the caller to report.
    async fn dispatch(
        &self,
        method: Method,
        spec: RequestSpec,
        endpoint: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        let url = spec.url(endpoint);

        info!("{}", progress_line(description));
        if spec.payload().is_empty() {
            debug!("Sending {} request to {}", method, url);
        } else {
            debug!(
                "Sending {} request to {}\nwith payload {}",
                method,
                url,
                spec.payload().pretty()
            );
        }

        let mut builder = self
            .client
            .request(method.clone(), url.as_str())
            .basic_auth(&self.credentials.user, Some(&self.credentials.token));
        for (name, value) in spec.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if sends_body(&method) {
            if let Some(body) = spec.payload().to_body() {
                builder = builder.body(body);
            }
        }

        let response = ApiResponse::read(builder.send().await?).await?;

        log!(
            result_level(response.status),
            "Results for {} request to {}:\nResponse Status: {}\nResponse JSON:\n{}",
            method,
            url,
            response.status,
            response.pretty_json()
        );

        Ok(response)
    }
}

/// Progress line for the info log
fn progress_line(description: &str) -> &str {
    if description.is_empty() {
        api::DEFAULT_DESCRIPTION
    } else {
        description
    }
}

/// Severity of the post-call log entry
pub(crate) fn result_level(status: u16) -> Level {
    if status >= 400 {
        Level::Error
    } else {
        Level::Debug
    }
}

fn sends_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

#[cfg(test)]
impl AtlassianClient {
    /// Create a test client pointing both products at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            Credentials::new("admin@example.com", "test-token"),
            Sites::new(base_url, &format!("{}/wiki", base_url)),
            Duration::from_secs(5),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_result_level_error_for_client_and_server_errors() {
        assert_eq!(result_level(400), Level::Error);
        assert_eq!(result_level(404), Level::Error);
        assert_eq!(result_level(500), Level::Error);
    }

    #[test]
    fn test_result_level_debug_below_400() {
        assert_eq!(result_level(200), Level::Debug);
        assert_eq!(result_level(204), Level::Debug);
        assert_eq!(result_level(399), Level::Debug);
    }

    #[test]
    fn test_progress_line_default() {
        assert_eq!(progress_line(""), "Performing API call...");
        assert_eq!(progress_line("Creating group"), "Creating group");
    }

    #[test]
    fn test_sends_body_only_for_post_and_put() {
        assert!(sends_body(&Method::POST));
        assert!(sends_body(&Method::PUT));
        assert!(!sends_body(&Method::GET));
        assert!(!sends_body(&Method::DELETE));
    }

    #[test]
    fn test_product_specs() {
        let client = AtlassianClient::new(
            Credentials::new("u", "t"),
            Sites::from_site("acme.atlassian.net"),
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(client.jira().unwrap().base_url(), "https://acme.atlassian.net");
        assert_eq!(
            client.confluence().unwrap().base_url(),
            "https://acme.atlassian.net/wiki"
        );
    }

    #[tokio::test]
    async fn test_get_sends_basic_auth_headers_and_queries() {
        let mock_server = MockServer::start().await;

        // "admin@example.com:test-token" base64-encoded
        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .and(query_param("expand", "groups"))
            .and(header(
                "authorization",
                "Basic YWRtaW5AZXhhbXBsZS5jb206dGVzdC10b2tlbg==",
            ))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accountId": "u1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let spec = client.jira().unwrap().with_query("expand", "groups");
        let response = client
            .get(spec, "rest/api/3/myself", "Fetching current user")
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.json_or_empty()["accountId"], "u1");
    }

    #[tokio::test]
    async fn test_post_sends_json_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/group"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "students"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"groupId": "g1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let spec = client
            .jira()
            .unwrap()
            .with_payload(json!({"name": "students"}));
        let response = client.post(spec, "/rest/api/3/group", "").await.unwrap();

        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_put_sends_raw_payload_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/rest/api/3/project/ABC/permissionscheme"))
            .and(body_string(r#"{"id":10001}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 10001})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let spec = client.jira().unwrap().with_payload(r#"{"id":10001}"#);
        let response = client
            .put(spec, "/rest/api/3/project/ABC/permissionscheme", "Assigning")
            .await
            .unwrap();

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/wiki/rest/api/space/NOPE"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "statusCode": 404,
                "message": "No space with key : NOPE"
            })))
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let spec = client.confluence().unwrap();
        let response = client
            .delete(spec, "/rest/api/space/NOPE", "Deleting space")
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(response.body.contains("No space with key"));
    }

    #[tokio::test]
    async fn test_empty_body_is_returned_untouched() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/role/10002"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client
            .delete(client.jira().unwrap(), "/rest/api/3/role/10002", "")
            .await
            .unwrap();

        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        // Nothing listens on port 9 (discard) on the loopback interface
        let client = AtlassianClient::test_client("http://127.0.0.1:9");
        let result = client
            .get(client.jira().unwrap(), "/rest/api/3/myself", "")
            .await;

        assert!(matches!(result, Err(crate::error::AtlError::Http(_))));
    }

    /// Records every log entry for the whole test binary
    struct CapturingLogger {
        records: std::sync::Mutex<Vec<(Level, String)>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    fn capturing_logger() -> &'static CapturingLogger {
        static LOGGER: std::sync::OnceLock<&'static CapturingLogger> = std::sync::OnceLock::new();
        LOGGER.get_or_init(|| {
            let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger {
                records: std::sync::Mutex::new(Vec::new()),
            }));
            let _ = log::set_logger(logger);
            log::set_max_level(log::LevelFilter::Trace);
            logger
        })
    }

    /// Levels of the entries mentioning `needle`
    fn levels_for(logger: &CapturingLogger, needle: &str) -> Vec<Level> {
        logger
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .map(|(level, _)| *level)
            .collect()
    }

    #[tokio::test]
    async fn test_dispatch_logs_result_at_error_for_404_and_debug_for_200() {
        let logger = capturing_logger();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/3/project/NOPE"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errorMessages": []})))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rest/api/3/group"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"groupId": "g-1"})))
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        client
            .get(client.jira().unwrap(), "/rest/api/3/project/NOPE", "Looking up project NOPE")
            .await
            .unwrap();
        let spec = client.jira().unwrap().with_payload(json!({"name": "g"}));
        client
            .post(spec, "/rest/api/3/group", "")
            .await
            .unwrap();

        let uri = mock_server.uri();
        assert_eq!(
            levels_for(logger, &format!("Results for GET request to {}", uri)),
            vec![Level::Error]
        );
        assert_eq!(
            levels_for(logger, &format!("Results for POST request to {}", uri)),
            vec![Level::Debug]
        );
        assert_eq!(
            levels_for(logger, &format!("Sending POST request to {}", uri)),
            vec![Level::Debug]
        );
        assert!(levels_for(logger, "Looking up project NOPE").contains(&Level::Info));
    }
}
