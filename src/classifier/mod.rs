//! Client side of the external emotion-classifier endpoint.
//!
//! One request per tick: `POST /detect_emotion` with a JSON content type and
//! no body, answered by `{ "emotions": [ { "emotion", "confidence" }, ... ] }`.

pub mod client;
pub mod messages;

pub use client::{ClassifierClient, EmotionSource};
pub use messages::{DetectionResponse, Observation};
