pub mod app;
pub mod classifier;
pub mod config;
pub mod emotion;
pub mod session;
pub mod ui;

pub use app::{App, UiEvent};
pub use classifier::{ClassifierClient, DetectionResponse, EmotionSource, Observation};
pub use config::Config;
pub use emotion::Emotion;
pub use session::{DetectionSession, EmotionCounts, SessionConfig, SessionStats};
pub use ui::{Notifier, Toast, ToastKind, ToastTiming};
