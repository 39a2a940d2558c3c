use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::client::{Endpoint, SurpriseResponse};

use super::SurpriseSource;

/// A scripted source for tests. Returns pre-defined responses in order and
/// records which endpoints were asked for.
pub struct MockSource {
    responses: Vec<SurpriseResponse>,
    index: AtomicUsize,
    calls: Mutex<Vec<Endpoint>>,
}

impl MockSource {
    pub fn new(responses: Vec<SurpriseResponse>) -> Self {
        Self {
            responses,
            index: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Endpoints requested so far, in call order.
    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SurpriseSource for MockSource {
    async fn fetch(&self, endpoint: Endpoint) -> Result<SurpriseResponse> {
        self.calls.lock().unwrap().push(endpoint);
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(i)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("MockSource: no more responses (called {} times)", i + 1))
    }
}
