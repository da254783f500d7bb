//! Scripted provider for exercising the scan flow without a network.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::ScanProvider;
use crate::models::AnalysisPayload;
use crate::{AppError, AppResult};

/// Replays a fixed sequence of analysis responses. Once the script runs
/// out, the last response is repeated.
#[derive(Debug)]
pub struct ScriptedProvider {
    submit: Mutex<Option<AppResult<String>>>,
    polls: Mutex<VecDeque<AppResult<Value>>>,
    last: Mutex<Option<Value>>,
    pub submit_calls: AtomicUsize,
    pub poll_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(analysis_id: &str, polls: Vec<Value>) -> Self {
        Self {
            submit: Mutex::new(Some(Ok(analysis_id.to_string()))),
            polls: Mutex::new(polls.into_iter().map(Ok).collect()),
            last: Mutex::new(None),
            submit_calls: AtomicUsize::new(0),
            poll_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_submit(err: AppError) -> Self {
        let provider = Self::new("", vec![]);
        *provider.submit.lock().unwrap() = Some(Err(err));
        provider
    }

    pub fn with_poll_error(self, err: AppError) -> Self {
        self.polls.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn submits(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn polls(&self) -> usize {
        self.poll_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScanProvider for ScriptedProvider {
    fn source(&self) -> &'static str {
        "vt"
    }

    async fn submit_url(&self, _url: &str) -> AppResult<String> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let mut submit = self.submit.lock().unwrap();
        match submit.take() {
            Some(Ok(id)) => {
                *submit = Some(Ok(id.clone()));
                Ok(id)
            }
            Some(Err(err)) => Err(err),
            None => Err(AppError::Transport("submit already failed".into())),
        }
    }

    async fn fetch_analysis(&self, _analysis_id: &str) -> AppResult<AnalysisPayload> {
        self.poll_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.polls.lock().unwrap().pop_front();
        let raw = match next {
            Some(Ok(raw)) => raw,
            Some(Err(err)) => return Err(err),
            None => self.last.lock().unwrap().clone().unwrap_or_else(|| analysis("queued", json!({}))),
        };
        *self.last.lock().unwrap() = Some(raw.clone());
        Ok(AnalysisPayload::new(raw))
    }
}

/// Builds an analysis body shaped like VirusTotal's.
pub fn analysis(status: &str, stats: Value) -> Value {
    json!({
        "data": {
            "id": "abc",
            "type": "analysis",
            "attributes": {"status": status, "stats": stats}
        }
    })
}
