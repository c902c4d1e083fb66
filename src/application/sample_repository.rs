// Repository trait for the raw time-series payload
use async_trait::async_trait;
use serde_json::Value;

/// Data access seam for the chart component. Implementations perform the
/// retrieval; shape validation stays with the component.
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Fetch the raw payload. Transport and JSON-parse failures are reported
    /// as errors; the payload's shape is not checked here.
    async fn fetch_payload(&self) -> anyhow::Result<Value>;
}
