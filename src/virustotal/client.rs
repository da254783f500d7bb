//! VirusTotal v3 API client
//!
//! Submits URLs and reads analyses. Every call carries the `x-apikey` header
//! and a per-call timeout; a response with status >= 400 is returned to the
//! caller as-is, without retry.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::ScanProvider;
use crate::config::Config;
use crate::models::AnalysisPayload;
use crate::{AppError, AppResult};

const API_KEY_HEADER: &str = "x-apikey";

/// VirusTotal API client
#[derive(Debug, Clone)]
pub struct VirusTotalClient {
    base_url: String,
    api_key: String,
    request_timeout: Duration,
    http_client: reqwest::Client,
}

impl VirusTotalClient {
    /// Create new client from configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("urlvalidator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.vt_base_url.clone(),
            api_key: config.vt_api_key.clone(),
            request_timeout: config.request_timeout(),
            http_client,
        })
    }
}

#[async_trait]
impl ScanProvider for VirusTotalClient {
    fn source(&self) -> &'static str {
        "vt"
    }

    async fn submit_url(&self, url: &str) -> AppResult<String> {
        let endpoint = format!("{}/urls", self.base_url);

        let response = self.http_client
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .form(&[("url", url)])
            .timeout(self.request_timeout)
            .send()
            .await?;

        let body: Value = ensure_success(response).await?.json().await?;

        body.pointer("/data/id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| AppError::MalformedUpstream("submission response has no data.id".to_string()))
    }

    async fn fetch_analysis(&self, analysis_id: &str) -> AppResult<AnalysisPayload> {
        let endpoint = format!("{}/analyses/{}", self.base_url, analysis_id);

        let response = self.http_client
            .get(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(self.request_timeout)
            .send()
            .await?;

        let body: Value = ensure_success(response).await?.json().await?;
        Ok(AnalysisPayload::new(body))
    }
}

async fn ensure_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::UpstreamRejected {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
