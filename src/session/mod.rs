//! Detection session management
//!
//! This module provides the `DetectionSession` abstraction that manages:
//! - The Idle/Detecting toggle
//! - Per-tick capture from the classifier endpoint
//! - Emotion counters and percentage statistics
//! - Session snapshots for status output

mod config;
mod session;
mod stats;

pub use config::SessionConfig;
pub use session::DetectionSession;
pub use stats::{EmotionCounts, SessionStats};
