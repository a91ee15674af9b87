use serde::{Deserialize, Serialize};

/// One classifier result for one recognized face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Emotion label. Kept as a raw string so labels outside the
    /// canonical set survive deserialization and can be ignored downstream.
    pub emotion: String,

    /// Confidence score in [0.0, 1.0].
    pub confidence: f32,
}

/// Response body of `POST /detect_emotion`.
///
/// `emotions` is ordered by the classifier (highest-ranked first) and
/// empty when no face was recognized in the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub emotions: Vec<Observation>,
}

impl Observation {
    pub fn new(emotion: impl Into<String>, confidence: f32) -> Self {
        Self {
            emotion: emotion.into(),
            confidence,
        }
    }
}
