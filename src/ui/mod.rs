//! Terminal rendering and transient notifications
//!
//! This module is the port of the page's DOM surface:
//! - `render` builds the result blocks, the no-face placeholder, the
//!   seven emotion bars, and the status affordance line
//! - `toast` manages floating notifications with timed fade-in and removal

pub mod render;
pub mod toast;

pub use render::{render_bars, render_results, render_status, NO_FACE_PLACEHOLDER, PRIMARY_MARKER};
pub use toast::{Notifier, Toast, ToastKind, ToastTiming};
