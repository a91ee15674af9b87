use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::messages::{DetectionResponse, Observation};

/// Source of emotion observations, one snapshot per call.
///
/// The production implementation talks to the classifier service over HTTP;
/// tests substitute scripted sources.
#[async_trait]
pub trait EmotionSource: Send + Sync {
    /// Request one emotion snapshot. An empty vector means no face was
    /// recognized; a network error or non-success status is an error.
    async fn detect(&self) -> Result<Vec<Observation>>;
}

/// HTTP client for the external emotion-classifier endpoint.
pub struct ClassifierClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ClassifierClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmotionSource for ClassifierClient {
    async fn detect(&self) -> Result<Vec<Observation>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to reach classifier at {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Classifier returned {} for {}", status, self.endpoint);
        }

        let body: DetectionResponse = response
            .json()
            .await
            .context("Failed to parse classifier response")?;

        debug!(
            "Classifier returned {} observation(s) from {}",
            body.emotions.len(),
            self.endpoint
        );

        Ok(body.emotions)
    }
}
