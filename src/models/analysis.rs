//! VirusTotal analysis payload and engine counters

use serde_json::{Map, Value};

/// Analysis status reported once every engine has answered.
pub const STATUS_COMPLETED: &str = "completed";

/// Raw body of `GET /analyses/{id}`.
///
/// Kept opaque so it can be echoed back to the caller untouched; only
/// `data.attributes.status` and `data.attributes.stats` are read.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPayload(Value);

impl AnalysisPayload {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    fn attributes(&self) -> Option<&Map<String, Value>> {
        self.0
            .get("data")
            .and_then(|d| d.get("attributes"))
            .and_then(Value::as_object)
    }

    /// Analysis status, empty when absent.
    pub fn status(&self) -> &str {
        self.attributes()
            .and_then(|a| a.get("status"))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn is_completed(&self) -> bool {
        self.status() == STATUS_COMPLETED
    }

    /// Per-engine counters, `None` when missing, not a mapping, or empty.
    pub fn stats(&self) -> Option<&Map<String, Value>> {
        self.attributes()
            .and_then(|a| a.get("stats"))
            .and_then(Value::as_object)
            .filter(|s| !s.is_empty())
    }

    pub fn into_raw(self) -> Value {
        self.0
    }
}

/// Engine verdict counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub harmless: u64,
    pub malicious: u64,
    pub suspicious: u64,
    pub undetected: u64,
    pub timeout: u64,
}

impl EngineStats {
    /// Coerce counters out of an upstream stats mapping. Missing or
    /// unusable values count as zero.
    pub fn from_map(stats: &Map<String, Value>) -> Self {
        let count = |key: &str| stats.get(key).map(coerce_count).unwrap_or(0);

        Self {
            harmless: count("harmless"),
            malicious: count("malicious"),
            suspicious: count("suspicious"),
            undetected: count("undetected"),
            timeout: count("timeout"),
        }
    }
}

fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().map(|n| n.max(0) as u64).unwrap_or(0),
        Value::Bool(b) => u64::from(*b),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_status_and_stats() {
        let payload = AnalysisPayload::new(json!({
            "data": {
                "id": "abc",
                "attributes": {
                    "status": "completed",
                    "stats": {"harmless": 5, "malicious": 0, "undetected": 1}
                }
            }
        }));

        assert_eq!(payload.status(), "completed");
        assert!(payload.is_completed());
        let stats = EngineStats::from_map(payload.stats().unwrap());
        assert_eq!(
            stats,
            EngineStats { harmless: 5, undetected: 1, ..Default::default() }
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let payload = AnalysisPayload::new(json!({"data": {"attributes": {}}}));
        assert_eq!(payload.status(), "");
        assert!(payload.stats().is_none());

        let payload = AnalysisPayload::new(json!({"error": "nope"}));
        assert_eq!(payload.status(), "");
        assert!(!payload.is_completed());
        assert!(payload.stats().is_none());
    }

    #[test]
    fn empty_stats_mapping_counts_as_absent() {
        let payload = AnalysisPayload::new(json!({
            "data": {"attributes": {"status": "queued", "stats": {}}}
        }));
        assert!(payload.stats().is_none());
    }

    #[test]
    fn counters_are_coerced() {
        let map = json!({
            "harmless": "7",
            "malicious": 2.9,
            "suspicious": -3,
            "undetected": null,
            "timeout": "n/a"
        });
        let stats = EngineStats::from_map(map.as_object().unwrap());
        assert_eq!(stats.harmless, 7);
        assert_eq!(stats.malicious, 2);
        assert_eq!(stats.suspicious, 0);
        assert_eq!(stats.undetected, 0);
        assert_eq!(stats.timeout, 0);
    }
}
