// HTTP dataset source - GETs the JSON resources from the configured origin
use crate::application::dataset_source::{DatasetSource, LoadError};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDatasetSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn location(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, LoadError> {
        let url = self.location(path);
        tracing::debug!("Fetching dataset {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Fetch {
                url: url.clone(),
                cause: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(LoadError::Fetch {
                url,
                cause: format!("HTTP status {}", status),
            });
        }

        let body = response.bytes().await.map_err(|e| LoadError::Fetch {
            url: url.clone(),
            cause: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| LoadError::Parse {
            url,
            cause: e.to_string(),
        })
    }
}
