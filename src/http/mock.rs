//! Canned-response fetcher for tests and offline use

use super::{HttpFetcher, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Serves fixed JSON documents by URL and records every request
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockFetcher {
    /// Create a fetcher with no responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn with_response(self, url: impl Into<String>, body: Value) -> Self {
        lock(&self.responses).insert(url.into(), body);
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Number of requests made so far
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, TransportError> {
        lock(&self.requests).push(url.to_string());

        lock(&self.responses)
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Unreachable(url.to_string()))
    }
}
