use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use super::render::paint;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl Default for ToastKind {
    fn default() -> Self {
        ToastKind::Info
    }
}

impl ToastKind {
    /// Fixed background color per kind.
    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Success => "#4CAF50",
            ToastKind::Error => "#f44336",
            ToastKind::Info => "#2196F3",
        }
    }
}

/// How long each phase of a toast's life lasts.
#[derive(Debug, Clone, Copy)]
pub struct ToastTiming {
    /// Delay before the toast becomes visible
    pub fade_in: Duration,
    /// How long the toast stays on screen
    pub dwell: Duration,
    /// Fade-out transition before removal
    pub fade_out: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(100),
            dwell: Duration::from_secs(3),
            fade_out: Duration::from_millis(300),
        }
    }
}

/// One live notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    /// False until the fade-in delay has elapsed
    pub visible: bool,
}

/// Registry of transient notifications.
///
/// Each `show` registers a toast and spawns one task that walks it through
/// fade-in, dwell, and fade-out before removing it. Toasts are independent:
/// no queueing, no ordering, each task only ever touches its own entry, and
/// removal of an entry that is already gone is a no-op. Handles are cheap
/// clones sharing one registry.
#[derive(Clone, Default)]
pub struct Notifier {
    toasts: Arc<Mutex<HashMap<u64, Toast>>>,
    next_id: Arc<AtomicU64>,
    emitted: Arc<AtomicU64>,
    timing: ToastTiming,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: ToastTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// Show a notification. Returns the toast id, mostly for tests.
    pub fn show(&self, text: impl Into<String>, kind: ToastKind) -> u64 {
        let text = text.into();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.emitted.fetch_add(1, Ordering::SeqCst);

        {
            let mut toasts = self.toasts.lock().expect("toast registry poisoned");
            toasts.insert(
                id,
                Toast {
                    text: text.clone(),
                    kind,
                    visible: false,
                },
            );
        }

        let toasts = Arc::clone(&self.toasts);
        let timing = self.timing;
        tokio::spawn(async move {
            sleep(timing.fade_in).await;
            {
                let mut toasts = toasts.lock().expect("toast registry poisoned");
                if let Some(toast) = toasts.get_mut(&id) {
                    toast.visible = true;
                    println!("{}", paint(&toast.text, toast.kind.color()));
                }
            }

            sleep(timing.dwell).await;
            sleep(timing.fade_out).await;

            // The entry may already be gone if the registry was cleared at
            // teardown; removing a missing id is fine.
            let removed = toasts.lock().expect("toast registry poisoned").remove(&id);
            if removed.is_some() {
                debug!("Toast {} expired: {}", id, text);
            }
        });

        id
    }

    pub fn info(&self, text: impl Into<String>) -> u64 {
        self.show(text, ToastKind::Info)
    }

    pub fn success(&self, text: impl Into<String>) -> u64 {
        self.show(text, ToastKind::Success)
    }

    pub fn error(&self, text: impl Into<String>) -> u64 {
        self.show(text, ToastKind::Error)
    }

    /// Snapshot of the live toasts, in no particular order.
    pub fn active(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .expect("toast registry poisoned")
            .values()
            .cloned()
            .collect()
    }

    /// Total number of toasts ever shown on this registry.
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::SeqCst)
    }

    /// Drop all live toasts. Their timers become no-ops.
    pub fn clear(&self) {
        self.toasts.lock().expect("toast registry poisoned").clear();
    }
}
