use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classifier::Observation;
use crate::emotion::Emotion;

/// Running per-emotion counters for one session.
///
/// Counters only increase; there is no reset short of dropping the session.
#[derive(Debug, Clone, Default)]
pub struct EmotionCounts {
    counts: [u64; Emotion::ALL.len()],
    total: u64,
}

impl EmotionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(emotion: Emotion) -> usize {
        Emotion::ALL
            .iter()
            .position(|e| *e == emotion)
            .unwrap_or(Emotion::ALL.len() - 1)
    }

    /// Record one observation. Returns true if the label was recognized and
    /// counted; an unrecognized label leaves every counter untouched.
    pub fn record(&mut self, label: &str) -> bool {
        match Emotion::from_label(label) {
            Some(emotion) => {
                self.counts[Self::slot(emotion)] += 1;
                self.total += 1;
                true
            }
            None => false,
        }
    }

    /// Record a batch of observations, returning how many were counted.
    pub fn record_all(&mut self, observations: &[Observation]) -> usize {
        observations
            .iter()
            .filter(|obs| self.record(&obs.emotion))
            .count()
    }

    pub fn count(&self, emotion: Emotion) -> u64 {
        self.counts[Self::slot(emotion)]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Share of this emotion in [0.0, 100.0], 0.0 while nothing is counted.
    pub fn percentage(&self, emotion: Emotion) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(emotion) as f64 / self.total as f64 * 100.0
    }

    pub fn as_map(&self) -> BTreeMap<String, u64> {
        Emotion::ALL
            .iter()
            .map(|e| (e.as_str().to_string(), self.count(*e)))
            .collect()
    }
}

/// Snapshot of a detection session, serializable for logs and status output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether detection is currently active
    pub is_detecting: bool,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Session age in seconds
    pub duration_secs: f64,

    /// Observations counted per emotion
    pub emotion_counts: BTreeMap<String, u64>,

    /// Sum of all counted observations
    pub total_detections: u64,
}
