//! Practicum homework API adapter.
//!
//! Implements the `hwbot-core` HomeworkApi port over `reqwest`.

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde_json::Value;
use tracing::error;

use hwbot_core::{
    config::Config, domain::PollTimestamp, errors::TransportError, ports::HomeworkApi, Result,
};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()?;
        Ok(Self {
            endpoint: cfg.endpoint.clone(),
            token: cfg.practicum_token.clone(),
            http,
        })
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn get_api_answer(&self, from_date: PollTimestamp) -> Result<Value> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.0)])
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.endpoint, "endpoint unreachable: {e}");
                TransportError::Unreachable(e.to_string())
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            error!(endpoint = %self.endpoint, %status, "bad API answer");
            return Err(TransportError::BadStatus(status.as_u16()).into());
        }

        // Timeouts can still fire while the body streams in.
        let body = resp.json::<Value>().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                error!(endpoint = %self.endpoint, "endpoint unreachable: {e}");
                TransportError::Unreachable(e.to_string())
            } else {
                error!(endpoint = %self.endpoint, "API answer is not valid JSON: {e}");
                TransportError::Decode(e.to_string())
            }
        })?;

        Ok(body)
    }
}
