//! Upstream reputation-scanning service
//!
//! The scan orchestrator only talks to [`ScanProvider`]; [`VirusTotalClient`]
//! is the production implementation.

pub mod client;

use async_trait::async_trait;

use crate::models::AnalysisPayload;
use crate::AppResult;

pub use client::VirusTotalClient;

#[async_trait]
pub trait ScanProvider: Send + Sync {
    /// Short tag echoed back as `source` in scan responses.
    fn source(&self) -> &'static str;

    /// Submit a URL for analysis and return the analysis id.
    async fn submit_url(&self, url: &str) -> AppResult<String>;

    /// Fetch the current state of an analysis.
    async fn fetch_analysis(&self, analysis_id: &str) -> AppResult<AnalysisPayload>;
}

#[cfg(test)]
pub mod testing;
