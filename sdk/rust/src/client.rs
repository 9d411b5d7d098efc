use reqwest::Client;
use serde::{Deserialize, Serialize};

/// One record as returned by `/records`.
pub type RecordObject = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Counters {
    pub requests_total: u64,
    pub health_checks: u64,
    pub records_requests: u64,
    pub start_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub metrics: Counters,
    pub uptime_seconds: f64,
    pub data_records: usize,
}

pub struct RecordClient {
    client: Client,
    base_url: String,
}

impl RecordClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, reqwest::Error> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn metrics(&self) -> Result<MetricsResponse, reqwest::Error> {
        self.client
            .get(format!("{}/metrics", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch `/records`, with `?genre=` when `genre` is given.
    pub async fn records(&self, genre: Option<&str>) -> Result<Vec<RecordObject>, reqwest::Error> {
        let mut req = self.client.get(format!("{}/records", self.base_url));
        if let Some(genre) = genre {
            req = req.query(&[("genre", genre)]);
        }
        req.send().await?.error_for_status()?.json().await
    }
}
