use anyhow::Result;
use async_trait::async_trait;

use crate::client::{Endpoint, SurpriseClient, SurpriseResponse};

use super::SurpriseSource;

/// Fetches surprises from the remote API with a fixed bearer token.
pub struct HttpSource {
    client: SurpriseClient,
    token: String,
}

impl HttpSource {
    pub fn new(client: SurpriseClient, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    pub fn client(&self) -> &SurpriseClient {
        &self.client
    }
}

#[async_trait]
impl SurpriseSource for HttpSource {
    async fn fetch(&self, endpoint: Endpoint) -> Result<SurpriseResponse> {
        Ok(self.client.fetch(endpoint, &self.token).await?)
    }
}
