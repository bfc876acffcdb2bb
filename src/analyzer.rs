use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::level::Level;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Qualitative bucket of average sentence length.
pub type Density = Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub readability_score: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub density: Density,
}

impl AnalysisResult {
    /// Result for text with nothing to read: trivially easy.
    fn trivial(sentence_count: usize) -> Self {
        Self {
            readability_score: HP.score_max,
            word_count: 0,
            sentence_count,
            avg_words_per_sentence: 0.0,
            density: Density::Low,
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    flesch_base: f64,
    flesch_sentence_weight: f64,
    flesch_syllable_weight: f64,
    short_word_max_chars: usize,
    density_high_above: f64,
    density_medium_above: f64,
    score_min: f64,
    score_max: f64,
}

static HP: Hyperparameters = Hyperparameters {
    flesch_base: 206.835,
    flesch_sentence_weight: 1.015,
    flesch_syllable_weight: 84.6,
    short_word_max_chars: 3,
    density_high_above: 25.0,
    density_medium_above: 15.0,
    score_min: 0.0,
    score_max: 100.0,
};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

// Letters, digits and underscore only. Combining marks end a word.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

// Silent endings: consonant (other than l) + "es", "ed", consonant + "e".
static SILENT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());

static LEADING_Y_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").unwrap());

static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sentence_count(text: &str) -> usize {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1)
}

/// Heuristic syllable count for a single word. Always at least 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= HP.short_word_max_chars {
        return 1;
    }
    let word = SILENT_SUFFIX_RE.replace(&word, "");
    let word = LEADING_Y_RE.replace(&word, "");
    VOWEL_GROUP_RE.find_iter(&word).count().max(1)
}

fn density_for(avg_words_per_sentence: f64) -> Density {
    if avg_words_per_sentence > HP.density_high_above {
        Density::High
    } else if avg_words_per_sentence > HP.density_medium_above {
        Density::Medium
    } else {
        Density::Low
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the Flesch Reading Ease score and sentence density of `text`.
///
/// Empty input and input without any words score 100 (trivially easy)
/// instead of failing.
pub fn analyze(text: &str) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult::trivial(0);
    }

    let sentences = sentence_count(text);
    let words: Vec<&str> = WORD_RE.find_iter(text).map(|m| m.as_str()).collect();
    let wc = words.len();

    if wc == 0 {
        return AnalysisResult::trivial(sentences);
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let avg_words_per_sentence = wc as f64 / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / wc as f64;

    let raw_score = HP.flesch_base
        - HP.flesch_sentence_weight * avg_words_per_sentence
        - HP.flesch_syllable_weight * avg_syllables_per_word;
    let score = round2(raw_score.clamp(HP.score_min, HP.score_max));
    let density = density_for(avg_words_per_sentence);

    debug!(
        words = wc,
        sentences,
        syllables,
        raw_score,
        "analyzed text readability"
    );

    AnalysisResult {
        readability_score: score,
        word_count: wc,
        sentence_count: sentences,
        avg_words_per_sentence: round2(avg_words_per_sentence),
        density,
    }
}
