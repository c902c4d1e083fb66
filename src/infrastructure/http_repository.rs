// HTTP repository implementation - retrieves the raw chart payload
use crate::application::sample_repository::SampleRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Fixed location of the data resource, relative to the configured host.
pub const DATA_PATH: &str = "/data.json";

#[derive(Debug, Clone)]
pub struct HttpSampleRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSampleRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn data_url(&self) -> String {
        format!("{}{}", self.base_url, DATA_PATH)
    }
}

#[async_trait]
impl SampleRepository for HttpSampleRepository {
    async fn fetch_payload(&self) -> Result<Value> {
        let url = self.data_url();

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request for chart data")?;

        if !response.status().is_success() {
            anyhow::bail!("Data request failed with status {}", response.status());
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse chart data payload")
    }
}
