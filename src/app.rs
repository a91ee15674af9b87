//! Event dispatch loop: stdin commands plus the periodic capture tick.

use crate::session::DetectionSession;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// A user-triggered UI event, the port of the page's button clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ToggleDetection,
    CaptureNow,
    Quit,
}

impl UiEvent {
    /// Parse one input line into an event.
    pub fn parse(line: &str) -> Option<UiEvent> {
        match line.trim() {
            "t" | "toggle" => Some(UiEvent::ToggleDetection),
            "c" | "capture" => Some(UiEvent::CaptureNow),
            "q" | "quit" | "exit" => Some(UiEvent::Quit),
            _ => None,
        }
    }
}

/// Interactive driver around one detection session.
pub struct App {
    session: Arc<DetectionSession>,
}

impl App {
    pub fn new(session: Arc<DetectionSession>) -> Self {
        Self { session }
    }

    /// Run until quit or stdin closes.
    ///
    /// The tick interval starts here and lasts for the life of the loop;
    /// ticks while Idle are no-ops inside `capture`. Dropping out of the
    /// loop tears the interval down.
    pub async fn run(self) -> Result<()> {
        let mut tick = tokio::time::interval(self.session.tick_interval());
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("Commands: t = toggle detection, c = capture now, q = quit");

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.session.capture().await;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break; // stdin closed
                    };
                    match UiEvent::parse(&line) {
                        Some(UiEvent::ToggleDetection) => {
                            self.session.toggle();
                        }
                        Some(UiEvent::CaptureNow) => {
                            self.session.capture().await;
                        }
                        Some(UiEvent::Quit) => break,
                        None => {
                            println!("Commands: t = toggle detection, c = capture now, q = quit");
                        }
                    }
                }
            }
        }

        let stats = self.session.stats().await?;
        info!(
            "Session {} ending: {} detection(s) over {:.1}s",
            self.session.session_id(),
            stats.total_detections,
            stats.duration_secs
        );

        Ok(())
    }
}
