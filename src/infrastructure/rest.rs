//! Insert-only client for a hosted PostgREST table (Supabase REST API).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;

use super::config::{BackendConfig, ConfigError};
use super::store::{ContactStore, StoreError};
use crate::domain::ContactSubmission;

/// Error body returned by PostgREST on a failed request.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    code: Option<String>,
}

pub struct RestContactStore {
    client: Client,
    endpoint: String,
    table: String,
}

impl RestContactStore {
    pub fn new(url: &str, anon_key: &str, table: &str, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let invalid_key = |e: reqwest::header::InvalidHeaderValue| ConfigError::Invalid {
            key: "backend.anon_key",
            reason: format!("not usable as a header value ({e})"),
        };
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(anon_key).map_err(invalid_key)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {anon_key}")).map_err(invalid_key)?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("prefer", HeaderValue::from_static("return=minimal"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/{}", url.trim_end_matches('/'), table),
            table: table.to_string(),
        })
    }

    /// Builds the store from `[backend]`. `None` when no URL is configured.
    pub fn from_config(config: &BackendConfig) -> Result<Option<Self>, ConfigError> {
        let Some(url) = config.url.as_deref() else {
            return Ok(None);
        };
        let key = config
            .anon_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::Invalid {
                key: "backend.anon_key",
                reason: "required when backend.url is set".to_string(),
            })?;
        let timeout = config.timeout_secs.map(Duration::from_secs);
        Self::new(url, key, &config.table, timeout).map(Some)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactStore for RestContactStore {
    fn insert(&self, record: &ContactSubmission) -> Result<(), StoreError> {
        tracing::debug!(endpoint = %self.endpoint, "inserting contact submission");
        let response = self.client.post(&self.endpoint).json(record).send()?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(table = %self.table, status = status.as_u16(), "contact submission stored");
            return Ok(());
        }

        let body = response.text()?;
        let message = match serde_json::from_str::<PostgrestError>(&body) {
            Ok(PostgrestError { message: Some(message), code }) => match code {
                Some(code) => format!("{message} [{code}]"),
                None => message,
            },
            _ => status.canonical_reason().unwrap_or("request failed").to_string(),
        };
        tracing::warn!(table = %self.table, status = status.as_u16(), %message, "contact submission rejected");

        Err(StoreError::Rejected { status: status.as_u16(), message })
    }

    fn describe(&self) -> String {
        format!("table `{}` at {}", self.table, self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> ContactSubmission {
        ContactSubmission {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            company: None,
            subject: "Demo request".to_string(),
            message: "Please contact me".to_string(),
        }
    }

    async fn insert_against(uri: String) -> Result<(), StoreError> {
        // The blocking client owns its own runtime, so keep it off the async workers.
        tokio::task::spawn_blocking(move || {
            let store = RestContactStore::new(&uri, "anon-key", "contact_submissions", None).unwrap();
            store.insert(&record())
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_posts_record_with_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/contact_submissions"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .and(header("prefer", "return=minimal"))
            .and(body_json(serde_json::json!({
                "first_name": "John",
                "last_name": "Doe",
                "email": "john@example.com",
                "company": null,
                "subject": "Demo request",
                "message": "Please contact me",
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        insert_against(server.uri()).await.unwrap();
    }

    #[tokio::test]
    async fn test_rejection_carries_postgrest_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "permission denied for table contact_submissions",
                "code": "42501",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = insert_against(server.uri()).await.unwrap_err();
        match err {
            StoreError::Rejected { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("permission denied"));
                assert!(message.contains("42501"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_json_body_uses_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = insert_against(server.uri()).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected { status: 503, .. }));
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[test]
    fn test_unreachable_server_is_a_transport_failure() {
        let store = RestContactStore::new("http://127.0.0.1:1", "anon-key", "contact_submissions", None).unwrap();
        let err = store.insert(&record()).unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[test]
    fn test_endpoint_joins_url_and_table() {
        let config = BackendConfig {
            url: Some("https://demo.supabase.co/".to_string()),
            anon_key: Some("k".to_string()),
            table: "leads".to_string(),
            timeout_secs: Some(5),
        };
        let store = RestContactStore::from_config(&config).unwrap().unwrap();
        assert_eq!(store.endpoint(), "https://demo.supabase.co/rest/v1/leads");
    }

    #[test]
    fn test_url_without_key_is_a_config_error() {
        let config = BackendConfig {
            url: Some("https://demo.supabase.co".to_string()),
            anon_key: Some("  ".to_string()),
            ..BackendConfig::default()
        };
        let err = RestContactStore::from_config(&config).err().unwrap();
        assert!(matches!(err, ConfigError::Invalid { key: "backend.anon_key", .. }));

        let config = BackendConfig { anon_key: None, ..config };
        assert!(RestContactStore::from_config(&config).is_err());
    }

    #[test]
    fn test_key_with_control_characters_is_a_config_error() {
        let err = RestContactStore::new("https://demo.supabase.co", "bad\nkey", "leads", None)
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Invalid { key: "backend.anon_key", .. }));
        assert!(err.to_string().contains("backend.anon_key"));
    }

    #[test]
    fn test_missing_url_means_no_rest_store() {
        let store = RestContactStore::from_config(&BackendConfig::default()).unwrap();
        assert!(store.is_none());
    }
}
