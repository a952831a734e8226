//! Remote houses feed client
//!
//! One GET to the configured URL per call. The whole body is buffered before
//! parsing; transport failures, non-success statuses and malformed payloads
//! all map to `UpstreamError`. No timeout and no retries.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::House;
use crate::domain::ports::HouseSource;
use crate::error::UpstreamError;

/// HTTP implementation of [`HouseSource`] backed by the remote feed
pub struct WizardWorldClient {
    http: Client,
    url: String,
}

impl WizardWorldClient {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl HouseSource for WizardWorldClient {
    async fn fetch_houses(&self) -> Result<Vec<House>, UpstreamError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::Deserialization(e.to_string()))
    }
}
