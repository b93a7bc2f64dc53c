//! HTTP joke feed
//!
//! The random endpoint answers with a single object, the programming
//! endpoint with a one-element array. Both shapes are accepted from either.

use crate::application::config::JokesConfig;
use crate::domain::entities::JokeInput;
use crate::domain::repository::JokeSource;
use crate::domain::value_objects::JokeType;
use crate::error::{JokesError, JokesResult};
use serde::Deserialize;
use std::time::Duration;

/// Raw payload as returned by the service
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiPayload {
    Many(Vec<ApiJoke>),
    One(ApiJoke),
}

/// One joke record. The service's own `type` and `id` are ignored.
#[derive(Debug, Deserialize)]
struct ApiJoke {
    #[serde(default)]
    setup: Option<String>,
    #[serde(default)]
    punchline: Option<String>,
}

/// reqwest-backed [`JokeSource`]
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: reqwest::Client,
    random_endpoint: String,
    programming_endpoint: String,
}

impl HttpJokeSource {
    pub fn new(config: &JokesConfig) -> JokesResult<Self> {
        Self::with_endpoints(
            config.random_endpoint.clone(),
            config.programming_endpoint.clone(),
            config.request_timeout,
        )
    }

    pub fn with_endpoints(
        random_endpoint: impl Into<String>,
        programming_endpoint: impl Into<String>,
        timeout: Duration,
    ) -> JokesResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JokesError::Internal(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            random_endpoint: random_endpoint.into(),
            programming_endpoint: programming_endpoint.into(),
        })
    }

    fn endpoint(&self, joke_type: JokeType) -> &str {
        match joke_type {
            JokeType::Random => &self.random_endpoint,
            JokeType::Programming => &self.programming_endpoint,
        }
    }
}

impl JokeSource for HttpJokeSource {
    async fn fetch(&self, joke_type: JokeType) -> JokesResult<JokeInput> {
        let endpoint = self.endpoint(joke_type);
        tracing::debug!(%endpoint, %joke_type, "Requesting joke");

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| JokesError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JokesError::Fetch(format!(
                "Failed to fetch joke: {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| JokesError::Fetch(e.to_string()))?;

        decode_payload(&body, joke_type)
    }
}

/// Turn a response body into a joke of the requested type
fn decode_payload(body: &str, joke_type: JokeType) -> JokesResult<JokeInput> {
    let payload: ApiPayload = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "Unparseable joke payload");
        JokesError::EmptyResponse
    })?;

    let record = match payload {
        ApiPayload::Many(records) => records.into_iter().next(),
        ApiPayload::One(record) => Some(record),
    }
    .ok_or(JokesError::EmptyResponse)?;

    match (record.setup, record.punchline) {
        (Some(setup), Some(punchline))
            if !setup.trim().is_empty() && !punchline.trim().is_empty() =>
        {
            Ok(JokeInput::new(setup, punchline, joke_type))
        }
        _ => Err(JokesError::EmptyResponse),
    }
}
