//! Analysis poll loop
//!
//! Polls an analysis until the upstream reports it completed or the deadline
//! passes. A deadline is not an error: the loop then returns the best stats
//! seen so far, which may be none.

use std::time::Duration;
use tokio::time::Instant;

use crate::config::Config;
use crate::models::{AnalysisPayload, EngineStats};
use crate::virustotal::ScanProvider;
use crate::AppResult;

#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    /// Total budget, measured from loop entry
    pub timeout: Duration,
    /// Pause between polls
    pub interval: Duration,
}

impl From<&Config> for PollSettings {
    fn from(config: &Config) -> Self {
        Self {
            timeout: config.poll_timeout(),
            interval: config.poll_interval(),
        }
    }
}

/// Result of a finished poll loop
#[derive(Debug, Clone)]
pub struct PollOutcome {
    /// Counters of the latest poll that carried any, zero otherwise
    pub stats: EngineStats,
    /// The payload `stats` was read from; the final poll's payload when no
    /// poll carried stats
    pub payload: AnalysisPayload,
    pub polls: u32,
    pub completed: bool,
}

pub async fn poll_analysis(
    provider: &dyn ScanProvider,
    analysis_id: &str,
    settings: PollSettings,
) -> AppResult<PollOutcome> {
    // A budget too large to represent never expires.
    let deadline = Instant::now().checked_add(settings.timeout);
    let mut with_stats: Option<AnalysisPayload> = None;
    let mut polls = 0u32;

    loop {
        let payload = provider.fetch_analysis(analysis_id).await?;
        polls += 1;

        tracing::info!("Analysis {} poll #{}: status '{}'", analysis_id, polls, payload.status());

        if payload.stats().is_some() {
            with_stats = Some(payload.clone());
        }

        let completed = payload.is_completed();
        let expired = deadline.is_some_and(|d| Instant::now() >= d);
        if completed || expired {
            if !completed {
                tracing::warn!(
                    "Analysis {} not completed after {} polls, using last known stats",
                    analysis_id, polls
                );
            }

            let payload = with_stats.unwrap_or(payload);
            let stats = payload
                .stats()
                .map(EngineStats::from_map)
                .unwrap_or_default();

            return Ok(PollOutcome {
                stats,
                payload,
                polls,
                completed,
            });
        }

        tokio::time::sleep(settings.interval).await;
    }
}
