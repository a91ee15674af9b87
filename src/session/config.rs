use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a detection session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "detect-2026-08-standup")
    pub session_id: String,

    /// Classifier endpoint URL
    pub endpoint: String,

    /// How often the tick fires while detecting
    /// Default: 2 seconds
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("detect-{}", uuid::Uuid::new_v4()),
            endpoint: "http://127.0.0.1:5000/detect_emotion".to_string(),
            tick_interval: Duration::from_secs(2),
        }
    }
}
