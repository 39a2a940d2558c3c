pub mod http;
pub mod local;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::client::{Endpoint, SurpriseResponse};

/// Where surprises come from. Could be the remote API, the local
/// generators, or a test script.
#[async_trait]
pub trait SurpriseSource: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint) -> Result<SurpriseResponse>;
}
