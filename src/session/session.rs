use super::config::SessionConfig;
use super::stats::{EmotionCounts, SessionStats};
use crate::classifier::EmotionSource;
use crate::ui::{render_bars, render_results, render_status, Notifier, ToastKind};
use anyhow::Result;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// A detection session that polls the classifier endpoint, accumulates
/// per-emotion statistics, and drives the terminal surface.
pub struct DetectionSession {
    /// Session configuration
    config: SessionConfig,

    /// Classifier endpoint (or a scripted stand-in under test)
    source: Arc<dyn EmotionSource>,

    /// Toast notification registry
    notifier: Notifier,

    /// When the session was created
    started_at: chrono::DateTime<chrono::Utc>,

    /// Whether ticks should capture
    is_detecting: Arc<AtomicBool>,

    /// Set while one capture is in flight
    capture_busy: Arc<AtomicBool>,

    /// Running emotion counters
    counts: Arc<Mutex<EmotionCounts>>,
}

/// Clears the busy flag on every exit path out of a capture.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    /// Take the busy flag, or None if a capture is already in flight.
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl DetectionSession {
    pub fn new(config: SessionConfig, source: Arc<dyn EmotionSource>, notifier: Notifier) -> Self {
        info!("Creating detection session: {}", config.session_id);

        Self {
            config,
            source,
            notifier,
            started_at: Utc::now(),
            is_detecting: Arc::new(AtomicBool::new(false)),
            capture_busy: Arc::new(AtomicBool::new(false)),
            counts: Arc::new(Mutex::new(EmotionCounts::new())),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        self.config.tick_interval
    }

    pub fn is_detecting(&self) -> bool {
        self.is_detecting.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.capture_busy.load(Ordering::SeqCst)
    }

    /// Flip between Idle and Detecting. Returns the new state.
    pub fn toggle(&self) -> bool {
        let now_detecting = !self.is_detecting.load(Ordering::SeqCst);
        self.is_detecting.store(now_detecting, Ordering::SeqCst);

        if now_detecting {
            info!("Detection started for session {}", self.config.session_id);
            self.notifier.show("Detection started! 📹", ToastKind::Success);
        } else {
            info!("Detection stopped for session {}", self.config.session_id);
            self.notifier.show("Detection stopped", ToastKind::Info);
        }
        println!("{}", self.status_line());

        now_detecting
    }

    /// Current status affordance line, including the in-flight marker.
    pub fn status_line(&self) -> String {
        render_status(self.is_detecting(), self.is_busy())
    }

    /// One capture tick: request a snapshot, render it, fold it into the
    /// statistics. A no-op while Idle. Endpoint failure surfaces a single
    /// error toast and leaves every counter unchanged; the next tick retries
    /// on its own.
    pub async fn capture(&self) {
        if !self.is_detecting.load(Ordering::SeqCst) {
            return;
        }

        // The guard doubles as in-flight deduplication: a tick that lands
        // while the previous request is still outstanding is dropped.
        let Some(busy) = BusyGuard::acquire(&self.capture_busy) else {
            debug!("Capture already in flight, dropping tick");
            return;
        };
        println!("{}", self.status_line());

        match self.source.detect().await {
            Ok(observations) => {
                println!("{}", render_results(&observations));

                let mut counts = self.counts.lock().await;
                let counted = counts.record_all(&observations);
                println!("{}", render_bars(&counts));

                debug!(
                    "Tick recorded {}/{} observation(s), total {}",
                    counted,
                    observations.len(),
                    counts.total()
                );
            }
            Err(e) => {
                error!("Emotion detection failed: {:#}", e);
                self.notifier
                    .show(format!("Error detecting emotion: {}", e), ToastKind::Error);
            }
        }

        // The final status frame must see the flag already cleared.
        drop(busy);
        println!("{}", self.status_line());
    }

    /// Current session statistics
    pub async fn stats(&self) -> Result<SessionStats> {
        let duration = Utc::now().signed_duration_since(self.started_at);
        let counts = self.counts.lock().await;

        Ok(SessionStats {
            is_detecting: self.is_detecting(),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            emotion_counts: counts.as_map(),
            total_detections: counts.total(),
        })
    }
}
