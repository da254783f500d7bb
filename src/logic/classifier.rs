//! Verdict classification
//!
//! Severity precedence over the engine counters, first match wins:
//! any malicious engine, then any suspicious engine, then any harmless
//! engine. With no signal at all the verdict stays suspicious.

use crate::models::{EngineStats, Verdict};

pub fn classify(stats: &EngineStats) -> Verdict {
    verdict_from_counts(stats.malicious, stats.suspicious, stats.harmless)
}

pub fn verdict_from_counts(malicious: u64, suspicious: u64, harmless: u64) -> Verdict {
    if malicious > 0 {
        Verdict::Malicious
    } else if suspicious > 0 {
        Verdict::Suspicious
    } else if harmless > 0 {
        Verdict::Clean
    } else {
        Verdict::Suspicious
    }
}
