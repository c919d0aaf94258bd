// KramerPrefs - app/http.rs
//
// `PreferencesBackend` over JSON/HTTP using a blocking `ureq` agent.
// Calls run on worker threads (see app/worker.rs), never on the UI thread.
//
// No timeouts beyond the transport defaults and no retries: a failed call is
// reported once and the user repeats the action.

use crate::app::backend::PreferencesBackend;
use crate::core::model::{KeywordList, PreferenceKey, PreferenceSet};
use crate::util::constants::{
    APP_NAME, APP_VERSION, IDENTITY_HEADER, PATH_KEYWORDS_ADD, PATH_KEYWORDS_REMOVE,
    PATH_PREFERENCES, PATH_TEST_NOTIFICATION,
};
use crate::util::error::ApiError;
use serde::de::DeserializeOwned;

/// HTTP client for the preferences service rooted at `base_url`
/// (e.g. `https://bot.example.com/api`).
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let agent = ureq::AgentBuilder::new()
            .user_agent(&format!("{APP_NAME}/{APP_VERSION}"))
            .build();
        Self { base_url, agent }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue one request and return the raw body of a 2xx response.
    fn send(
        &self,
        method: &str,
        endpoint: &'static str,
        identity: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(method, url = %url, "Sending request");

        let request = self.agent.request(method, &url).set(IDENTITY_HEADER, identity);
        let result = match body {
            Some(json) => request.send_json(json),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                let status = response.status();
                let text = response.into_string().map_err(|e| ApiError::Transport {
                    endpoint,
                    detail: format!("failed to read response body: {e}"),
                })?;
                tracing::debug!(method, endpoint, status, bytes = text.len(), "Response received");
                Ok(text)
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                tracing::warn!(method, endpoint, status = code, body = %body, "Backend returned error status");
                Err(ApiError::Status {
                    endpoint,
                    code,
                    body,
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::warn!(method, endpoint, error = %transport, "Request failed in transport");
                Err(ApiError::Transport {
                    endpoint,
                    detail: transport.to_string(),
                })
            }
        }
    }
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Malformed { endpoint, source })
}

impl PreferencesBackend for HttpBackend {
    fn fetch_preferences(&self, identity: &str) -> Result<PreferenceSet, ApiError> {
        let body = self.send("GET", PATH_PREFERENCES, identity, None)?;
        decode(PATH_PREFERENCES, &body)
    }

    fn update_preference(
        &self,
        identity: &str,
        key: PreferenceKey,
        value: bool,
    ) -> Result<(), ApiError> {
        // Success body is ignored.
        self.send(
            "POST",
            PATH_PREFERENCES,
            identity,
            Some(serde_json::json!({ key.wire_name(): value })),
        )
        .map(|_| ())
    }

    fn add_keyword(&self, identity: &str, keyword: &str) -> Result<KeywordList, ApiError> {
        let body = self.send(
            "POST",
            PATH_KEYWORDS_ADD,
            identity,
            Some(serde_json::json!({ "keyword": keyword })),
        )?;
        decode(PATH_KEYWORDS_ADD, &body)
    }

    fn remove_keyword(&self, identity: &str, keyword: &str) -> Result<KeywordList, ApiError> {
        let body = self.send(
            "POST",
            PATH_KEYWORDS_REMOVE,
            identity,
            Some(serde_json::json!({ "keyword": keyword })),
        )?;
        decode(PATH_KEYWORDS_REMOVE, &body)
    }

    fn send_test_notification(&self, identity: &str) -> Result<(), ApiError> {
        self.send("POST", PATH_TEST_NOTIFICATION, identity, None)
            .map(|_| ())
    }
}
