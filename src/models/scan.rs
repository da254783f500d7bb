//! Scan request/response models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Inbound scan request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScanRequest {
    #[validate(custom(function = "not_blank"))]
    pub url: String,

    /// Accepted for compatibility with existing clients; has no effect.
    #[serde(default)]
    pub detail: bool,
}

fn not_blank(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("url must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Coarse reputation verdict, serialized with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Malicious,
    Suspicious,
    Clean,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Malicious => "악성",
            Verdict::Suspicious => "주의",
            Verdict::Clean => "정상",
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Response returned to the caller of `POST /urlvalidator/scan`
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub url: String,
    pub source: &'static str,
    pub result: Verdict,
    pub details: Value,
}
