use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::level::Level;

/// Flat mapping of UI setting name to value.
pub type Settings = Map<String, Value>;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// How hard a text is to read, which selects the settings bundle.
pub type DifficultyLevel = Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_settings: Settings,
    pub actions_taken: Vec<String>,
    pub difficulty_level: DifficultyLevel,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    high_below: f64,
    medium_max: f64,
    nan_fallback: f64,
}

static HP: Hyperparameters = Hyperparameters {
    high_below: 40.0,
    medium_max: 60.0,
    nan_fallback: 100.0,
};

// ---------------------------------------------------------------------------
// Settings bundles
// ---------------------------------------------------------------------------

fn bundle(entries: Vec<(&str, Value)>) -> Settings {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

static HIGH_BUNDLE: Lazy<Settings> = Lazy::new(|| {
    bundle(vec![
        ("font_size", Value::from(24)),
        ("line_height", Value::from(2.1)),
        ("letter_spacing", Value::from(0.08)),
        ("paragraph_gap", Value::from(2.0)),
        ("theme", Value::from("contrast")),
        ("enable_focus_mode", Value::from(true)),
        ("enable_reading_ruler", Value::from(true)),
        ("enable_word_highlight", Value::from(true)),
    ])
});

static MEDIUM_BUNDLE: Lazy<Settings> = Lazy::new(|| {
    bundle(vec![
        ("font_size", Value::from(22)),
        ("line_height", Value::from(2.0)),
        ("theme", Value::from("sage")),
        ("enable_word_highlight", Value::from(true)),
    ])
});

const HIGH_ACTIONS: [&str; 5] = [
    "Increased font size to 24px for clear visibility.",
    "Expanded line height and letter spacing mapping to reduce visual crowding.",
    "Applied 'contrast' theme to maximize legibility.",
    "Enabled Focus Mode and Reading Ruler to minimize distractions.",
    "Enabled Word Highlighting for easier tracking.",
];

const MEDIUM_ACTIONS: [&str; 4] = [
    "Increased font size to 22px.",
    "Adjusted line height to 2.0.",
    "Applied calming 'sage' theme.",
    "Enabled Word Highlighting to aid concentration.",
];

const LOW_ACTIONS: [&str; 1] = ["Text complexity is low. Kept default user settings."];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shallow merge: keys in `overrides` replace those in `base`.
pub fn merge_settings(base: &mut Settings, overrides: &Settings) {
    for (key, value) in overrides {
        base.insert(key.clone(), value.clone());
    }
}

fn tier_for(score: f64) -> DifficultyLevel {
    if score < HP.high_below {
        DifficultyLevel::High
    } else if score <= HP.medium_max {
        DifficultyLevel::Medium
    } else {
        DifficultyLevel::Low
    }
}

fn to_strings(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|a| a.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Pick a difficulty tier for `readability_score` and merge its settings
/// bundle over a copy of `current_settings`.
///
/// A NaN score is treated as 100 (easy). Infinite and out-of-range scores
/// fall into the tier their comparison puts them in.
pub fn recommend(readability_score: f64, current_settings: Option<&Settings>) -> Recommendation {
    let score = if readability_score.is_nan() {
        warn!("readability score is NaN, treating as {}", HP.nan_fallback);
        HP.nan_fallback
    } else {
        readability_score
    };

    let mut recommended_settings = current_settings.cloned().unwrap_or_default();
    let difficulty_level = tier_for(score);

    let actions_taken = match difficulty_level {
        DifficultyLevel::High => {
            merge_settings(&mut recommended_settings, &HIGH_BUNDLE);
            to_strings(&HIGH_ACTIONS)
        }
        DifficultyLevel::Medium => {
            merge_settings(&mut recommended_settings, &MEDIUM_BUNDLE);
            to_strings(&MEDIUM_ACTIONS)
        }
        DifficultyLevel::Low => to_strings(&LOW_ACTIONS),
    };

    Recommendation {
        recommended_settings,
        actions_taken,
        difficulty_level,
    }
}
