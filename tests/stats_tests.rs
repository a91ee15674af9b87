// Integration tests for the emotion counters and session statistics.

use moodline::{Emotion, EmotionCounts, Observation};

#[test]
fn total_counts_only_recognized_labels() {
    let mut counts = EmotionCounts::new();

    let observations = vec![
        Observation::new("happy", 0.9),
        Observation::new("sad", 0.4),
        Observation::new("confused", 0.8), // not in the closed set
        Observation::new("happy", 0.7),
        Observation::new("HAPPY", 0.7), // labels are case-sensitive
    ];

    let counted = counts.record_all(&observations);

    assert_eq!(counted, 3);
    assert_eq!(counts.total(), 3);
    assert_eq!(counts.count(Emotion::Happy), 2);
    assert_eq!(counts.count(Emotion::Sad), 1);
    assert_eq!(counts.count(Emotion::Angry), 0);
}

#[test]
fn unrecognized_label_changes_nothing() {
    let mut counts = EmotionCounts::new();
    assert!(!counts.record("boredom"));

    assert_eq!(counts.total(), 0);
    for emotion in Emotion::ALL {
        assert_eq!(counts.count(emotion), 0);
        assert_eq!(counts.percentage(emotion), 0.0);
    }
}

#[test]
fn percentages_are_zero_with_no_detections() {
    let counts = EmotionCounts::new();
    for emotion in Emotion::ALL {
        assert_eq!(counts.percentage(emotion), 0.0);
    }
}

#[test]
fn percentages_sum_to_one_hundred() {
    let mut counts = EmotionCounts::new();
    for label in ["happy", "happy", "happy", "sad", "neutral", "fear", "fear"] {
        assert!(counts.record(label));
    }

    let sum: f64 = Emotion::ALL.iter().map(|e| counts.percentage(*e)).sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
}

#[test]
fn counters_are_monotone_across_batches() {
    let mut counts = EmotionCounts::new();
    counts.record_all(&[Observation::new("angry", 0.5)]);
    let after_first = counts.count(Emotion::Angry);

    counts.record_all(&[Observation::new("unknown", 0.5)]);
    counts.record_all(&[]);
    assert_eq!(counts.count(Emotion::Angry), after_first);

    counts.record_all(&[Observation::new("angry", 0.6)]);
    assert_eq!(counts.count(Emotion::Angry), after_first + 1);
    assert_eq!(counts.total(), 2);
}

#[test]
fn count_map_lists_all_seven_slots() {
    let mut counts = EmotionCounts::new();
    counts.record("surprise");

    let map = counts.as_map();
    assert_eq!(map.len(), 7);
    assert_eq!(map["surprise"], 1);
    assert_eq!(map["disgust"], 0);
}
