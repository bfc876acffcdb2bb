use proptest::prelude::*;
use reading_optimizer::{analyze, process, recommend, DifficultyLevel, Settings};
use serde_json::Value;

proptest! {
    #[test]
    fn score_stays_in_range(text in "\\PC{0,400}") {
        let result = analyze(&text);
        prop_assert!((0.0..=100.0).contains(&result.readability_score));
        prop_assert!(result.avg_words_per_sentence >= 0.0);
        if !text.trim().is_empty() {
            prop_assert!(result.sentence_count >= 1);
        }
    }

    #[test]
    fn process_is_deterministic(text in "[a-zA-Z .!?,]{0,200}", size in 10i64..40) {
        let mut current = Settings::new();
        current.insert("font_size".to_string(), Value::from(size));
        prop_assert_eq!(process(&text, Some(&current)), process(&text, Some(&current)));
    }

    #[test]
    fn tier_matches_score_band(score in -50.0f64..150.0) {
        let level = recommend(score, None).difficulty_level;
        let expected = if score < 40.0 {
            DifficultyLevel::High
        } else if score <= 60.0 {
            DifficultyLevel::Medium
        } else {
            DifficultyLevel::Low
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn unrelated_keys_survive_merge(score in 0.0f64..100.0, value in "[a-z]{1,12}") {
        let mut current = Settings::new();
        current.insert("reader_note".to_string(), Value::from(value.clone()));
        let rec = recommend(score, Some(&current));
        prop_assert_eq!(&rec.recommended_settings["reader_note"], &Value::from(value));
    }
}
