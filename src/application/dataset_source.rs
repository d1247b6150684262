// Dataset source port - where the dashboard's JSON resources come from
use crate::domain::error::ValidationError;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// Transport failure or a non-2xx answer
    #[error("failed to fetch {url}: {cause}")]
    Fetch { url: String, cause: String },

    /// Body is not JSON, or not the JSON shape the page expects
    #[error("failed to parse {url}: {cause}")]
    Parse { url: String, cause: String },

    #[error("invalid dataset: {0}")]
    Validation(#[from] ValidationError),
}

impl LoadError {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Fetch { url, .. } | Self::Parse { url, .. } => Some(url),
            Self::Validation(_) => None,
        }
    }
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Where `path` is fetched from, as reported in errors
    fn location(&self, path: &str) -> String {
        path.to_string()
    }

    /// Fetch one resource and parse it as JSON
    async fn fetch_json(&self, path: &str) -> Result<Value, LoadError>;
}

#[cfg(test)]
pub mod stub {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory source. Unknown paths answer like a 404.
    #[derive(Default)]
    pub struct StubSource {
        datasets: HashMap<String, Value>,
        requested: Mutex<Vec<String>>,
    }

    impl StubSource {
        pub fn with(mut self, path: &str, body: Value) -> Self {
            self.datasets.insert(path.to_string(), body);
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DatasetSource for StubSource {
        async fn fetch_json(&self, path: &str) -> Result<Value, LoadError> {
            self.requested.lock().unwrap().push(path.to_string());
            self.datasets
                .get(path)
                .cloned()
                .ok_or_else(|| LoadError::Fetch {
                    url: self.location(path),
                    cause: "HTTP status 404 Not Found".to_string(),
                })
        }
    }
}
