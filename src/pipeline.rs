use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analyzer::{self, AnalysisResult};
use crate::recommender::{self, DifficultyLevel, Settings};

/// Combined output of analysis and recommendation for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub readability_score: f64,
    pub difficulty_level: DifficultyLevel,
    pub recommended_settings: Settings,
    pub actions_taken: Vec<String>,
    pub analysis_details: AnalysisResult,
}

/// Analyze `text` and recommend reading settings for it.
pub fn process(text: &str, current_settings: Option<&Settings>) -> OptimizationReport {
    let analysis_details = analyzer::analyze(text);
    let readability_score = analysis_details.readability_score;

    let recommendation = recommender::recommend(readability_score, current_settings);

    info!(
        readability_score,
        difficulty = ?recommendation.difficulty_level,
        words = analysis_details.word_count,
        "processed text"
    );

    OptimizationReport {
        readability_score,
        difficulty_level: recommendation.difficulty_level,
        recommended_settings: recommendation.recommended_settings,
        actions_taken: recommendation.actions_taken,
        analysis_details,
    }
}
