use serde::{Deserialize, Serialize};

/// The closed set of emotions the classifier can report.
///
/// Labels arriving off the wire that are not in this set are valid data
/// (the model may be retrained with extra classes) but are never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprise,
    Fear,
    Disgust,
    Neutral,
}

/// Emoji shown for a label outside the closed set.
pub const FALLBACK_EMOJI: &str = "🤔";

/// Bar color pair (gradient start/end) for an unmapped slot.
pub const FALLBACK_COLOR: (&str, &str) = ("#607D8B", "#455A64");

impl Emotion {
    /// All emotions in display order (the order the bar panel lists them).
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    /// Parse a wire label. Only the seven canonical lowercase names match.
    pub fn from_label(label: &str) -> Option<Emotion> {
        match label {
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "angry" => Some(Emotion::Angry),
            "surprise" => Some(Emotion::Surprise),
            "fear" => Some(Emotion::Fear),
            "disgust" => Some(Emotion::Disgust),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprise => "surprise",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Surprise => "😲",
            Emotion::Fear => "😨",
            Emotion::Disgust => "🤢",
            Emotion::Neutral => "😐",
        }
    }

    /// Emoji for an arbitrary wire label, falling back for unknown ones.
    pub fn emoji_for_label(label: &str) -> &'static str {
        Emotion::from_label(label)
            .map(|e| e.emoji())
            .unwrap_or(FALLBACK_EMOJI)
    }

    /// Bar color pair for an arbitrary wire label, falling back for
    /// labels outside the closed set.
    pub fn color_for_label(label: &str) -> (&'static str, &'static str) {
        Emotion::from_label(label)
            .map(|e| e.color())
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Fixed bar color pair (gradient start/end hex).
    pub fn color(&self) -> (&'static str, &'static str) {
        match self {
            Emotion::Happy => ("#4CAF50", "#45a049"),
            Emotion::Sad => ("#2196F3", "#1976D2"),
            Emotion::Angry => ("#f44336", "#d32f2f"),
            Emotion::Surprise => ("#FF9800", "#F57C00"),
            Emotion::Fear => ("#9C27B0", "#7B1FA2"),
            Emotion::Disgust => ("#795548", "#5D4037"),
            Emotion::Neutral => ("#607D8B", "#455A64"),
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.as_str()), Some(emotion));
        }
    }

    #[test]
    fn unknown_labels_do_not_parse() {
        assert_eq!(Emotion::from_label("confused"), None);
        assert_eq!(Emotion::from_label("HAPPY"), None);
        assert_eq!(Emotion::from_label(""), None);
    }

    #[test]
    fn unknown_label_gets_fallback_emoji() {
        assert_eq!(Emotion::emoji_for_label("confused"), FALLBACK_EMOJI);
        assert_eq!(Emotion::emoji_for_label("happy"), "😊");
    }

    #[test]
    fn unknown_label_gets_fallback_color() {
        assert_eq!(Emotion::color_for_label("confused"), FALLBACK_COLOR);
        assert_eq!(Emotion::color_for_label("happy"), Emotion::Happy.color());
    }
}
