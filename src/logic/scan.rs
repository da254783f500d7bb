//! Scan orchestrator

use std::sync::Arc;

use super::classifier::classify;
use super::poller::{poll_analysis, PollSettings};
use crate::models::ScanResponse;
use crate::virustotal::ScanProvider;
use crate::AppResult;

/// Runs one scan end to end: submit, poll, classify.
#[derive(Clone)]
pub struct ScanOrchestrator {
    provider: Arc<dyn ScanProvider>,
    settings: PollSettings,
}

impl ScanOrchestrator {
    pub fn new(provider: Arc<dyn ScanProvider>, settings: PollSettings) -> Self {
        Self { provider, settings }
    }

    pub async fn scan(&self, url: &str) -> AppResult<ScanResponse> {
        let analysis_id = self.provider.submit_url(url).await?;
        tracing::info!("Submitted {} as analysis {}", url, analysis_id);

        let outcome = poll_analysis(self.provider.as_ref(), &analysis_id, self.settings).await?;
        let verdict = classify(&outcome.stats);

        tracing::info!(
            "Analysis {} finished after {} polls (completed: {}): {:?} -> {}",
            analysis_id, outcome.polls, outcome.completed, outcome.stats, verdict
        );

        Ok(ScanResponse {
            url: url.to_string(),
            source: self.provider.source(),
            result: verdict,
            details: outcome.payload.into_raw(),
        })
    }
}

impl std::fmt::Debug for ScanOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOrchestrator")
            .field("source", &self.provider.source())
            .field("settings", &self.settings)
            .finish()
    }
}
