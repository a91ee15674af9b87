use crate::classifier::Observation;
use crate::emotion::Emotion;
use crate::session::EmotionCounts;

/// Fixed placeholder when a snapshot comes back with no faces.
pub const NO_FACE_PLACEHOLDER: &str = "No faces detected. Make sure your face is visible! 👤";

/// Marker prefix for the primary (highest-ranked) result.
pub const PRIMARY_MARKER: &str = "▶";

/// Width of an emotion bar in cells.
const BAR_WIDTH: usize = 20;

/// Render one snapshot of observations as ranked result blocks.
///
/// The first observation is the primary result and carries the marker;
/// every block shows the emoji, the uppercased label, the confidence with
/// one decimal place, and which face it belongs to.
pub fn render_results(observations: &[Observation]) -> String {
    if observations.is_empty() {
        return NO_FACE_PLACEHOLDER.to_string();
    }

    let mut out = String::new();
    for (index, obs) in observations.iter().enumerate() {
        let marker = if index == 0 { PRIMARY_MARKER } else { " " };
        let emoji = Emotion::emoji_for_label(&obs.emotion);
        out.push_str(&format!(
            "{} {} {}\n  Confidence: {:.1}%\n  Face {} detected\n",
            marker,
            emoji,
            obs.emotion.to_uppercase(),
            obs.confidence * 100.0,
            index + 1,
        ));
    }
    out
}

/// Render the seven fixed emotion bars from the running counters.
pub fn render_bars(counts: &EmotionCounts) -> String {
    let mut out = String::new();
    for emotion in Emotion::ALL {
        let pct = counts.percentage(emotion);
        out.push_str(&format!(
            "{} {:<8} {} {:>5.1}%\n",
            emotion.emoji(),
            emotion.as_str(),
            bar(pct, Emotion::color_for_label(emotion.as_str())),
            pct,
        ));
    }
    out
}

/// Status affordance line, the port of the toggle button label and the
/// capture button's loading style.
pub fn render_status(is_detecting: bool, busy: bool) -> String {
    let mut line = if is_detecting {
        "● Detecting — press t to stop".to_string()
    } else {
        "○ Idle — press t to start".to_string()
    };
    if busy {
        line.push_str("  [capturing...]");
    }
    line
}

/// One bar: filled cells proportional to the percentage, painted with the
/// emotion's gradient pair (start color for the first half, end for the rest).
fn bar(percentage: f64, color: (&str, &str)) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let head = filled / 2;

    let mut cells = String::new();
    cells.push_str(&paint(&"█".repeat(head), color.0));
    cells.push_str(&paint(&"█".repeat(filled - head), color.1));
    cells.push_str(&"░".repeat(BAR_WIDTH - filled));
    format!("[{}]", cells)
}

/// Wrap text in a truecolor escape for the given `#rrggbb` color.
pub fn paint(text: &str, hex: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let (r, g, b) = hex_rgb(hex).unwrap_or((255, 255, 255));
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_rgb("#4CAF50"), Some((0x4c, 0xaf, 0x50)));
        assert_eq!(hex_rgb("4CAF50"), None);
        assert_eq!(hex_rgb("#fff"), None);
    }

    #[test]
    fn bar_is_empty_at_zero_and_full_at_hundred() {
        let empty = bar(0.0, ("#4CAF50", "#45a049"));
        assert!(!empty.contains('█'));
        assert_eq!(empty.matches('░').count(), 20);

        let full = bar(100.0, ("#4CAF50", "#45a049"));
        assert_eq!(full.matches('█').count(), 20);
        assert!(!full.contains('░'));
    }
}
