use reading_optimizer::{analyze, process, recommend, Density, DifficultyLevel, Level, Settings};
use serde_json::{json, Value};

fn settings(value: Value) -> Settings {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn empty_text_is_trivially_easy() {
    let result = analyze("");
    assert_eq!(result.readability_score, 100.0);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.sentence_count, 0);
    assert_eq!(result.avg_words_per_sentence, 0.0);
    assert_eq!(result.density, Density::Low);
}

#[test]
fn short_sentences_have_low_density() {
    let result = analyze("Hello world. This is fine.");
    assert_eq!(result.word_count, 5);
    assert_eq!(result.sentence_count, 2);
    assert_eq!(result.avg_words_per_sentence, 2.5);
    assert_eq!(result.density, Density::Low);
    assert_eq!(result.readability_score, 100.0);
}

#[test]
fn dense_academic_text_scores_low() {
    let text = "Notwithstanding considerable institutional heterogeneity, comprehensive \
                administrative reorganization necessitates extraordinarily sophisticated \
                intergovernmental coordination mechanisms, particularly regarding \
                environmental sustainability, infrastructural modernization, and \
                socioeconomic revitalization initiatives.";
    let result = analyze(text);
    assert!(
        result.readability_score < 40.0,
        "Dense text should score < 40, got {}",
        result.readability_score
    );
    assert_eq!(result.readability_score, 0.0);
    assert_eq!(result.word_count, 23);
    assert_eq!(result.sentence_count, 1);
    assert_eq!(result.density, Density::Medium);
}

#[test]
fn high_tier_applies_full_bundle() {
    let rec = recommend(20.0, Some(&Settings::new()));
    assert_eq!(rec.difficulty_level, DifficultyLevel::High);
    assert_eq!(rec.recommended_settings["font_size"], json!(24));
    assert_eq!(rec.recommended_settings["enable_focus_mode"], json!(true));
    assert_eq!(rec.recommended_settings["theme"], json!("contrast"));
    assert_eq!(rec.actions_taken.len(), 5);
}

#[test]
fn medium_tier_overwrites_theme_and_keeps_others() {
    let current = settings(json!({"theme": "dark", "language": "en"}));
    let rec = recommend(50.0, Some(&current));
    assert_eq!(rec.difficulty_level, DifficultyLevel::Medium);
    assert_eq!(rec.recommended_settings["theme"], json!("sage"));
    assert_eq!(rec.recommended_settings["font_size"], json!(22));
    assert_eq!(rec.recommended_settings["language"], json!("en"));
    assert_eq!(rec.actions_taken.len(), 4);
}

#[test]
fn low_tier_keeps_settings() {
    let current = settings(json!({"font_size": 16}));
    let rec = recommend(80.0, Some(&current));
    assert_eq!(rec.difficulty_level, DifficultyLevel::Low);
    assert_eq!(rec.recommended_settings, current);
    assert_eq!(
        rec.actions_taken,
        vec!["Text complexity is low. Kept default user settings."]
    );
}

#[test]
fn missing_settings_start_empty() {
    let rec = recommend(80.0, None);
    assert!(rec.recommended_settings.is_empty());
}

#[test]
fn tier_boundaries_are_inclusive_for_medium() {
    assert_eq!(recommend(40.0, None).difficulty_level, DifficultyLevel::Medium);
    assert_eq!(recommend(60.0, None).difficulty_level, DifficultyLevel::Medium);
}

#[test]
fn pipeline_combines_analysis_and_recommendation() {
    let current = settings(json!({"font_size": 16}));
    let report = process("The cat sat on the mat. The dog ran to the park.", Some(&current));
    assert_eq!(report.analysis_details.word_count, 12);
    assert_eq!(report.analysis_details.sentence_count, 2);
    assert_eq!(
        report.readability_score,
        report.analysis_details.readability_score
    );
    assert_eq!(report.difficulty_level, DifficultyLevel::Low);
    assert_eq!(report.recommended_settings, current);
}

#[test]
fn pipeline_is_idempotent() {
    let current = settings(json!({"theme": "dark"}));
    let text = "Photosynthesis transforms electromagnetic radiation into chemical energy.";
    assert_eq!(process(text, Some(&current)), process(text, Some(&current)));
}

#[test]
fn json_output_is_valid() {
    let report = process("Reading should be easy. Short words help.", None);
    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("readability_score").is_some());
    assert_eq!(parsed["difficulty_level"], json!("Low"));
    assert!(parsed.get("recommended_settings").is_some());
    assert!(parsed.get("actions_taken").is_some());
    assert_eq!(parsed["analysis_details"]["density"], json!("Low"));
    assert_eq!(parsed["analysis_details"]["word_count"], json!(7));
}

#[test]
fn density_and_difficulty_share_one_scale() {
    let density: Density = analyze("Hello world.").density;
    let difficulty: DifficultyLevel = recommend(80.0, None).difficulty_level;
    assert_eq!(density, Level::Low);
    assert_eq!(density, difficulty);
    assert_eq!(serde_json::to_value(Level::Medium).unwrap(), json!("Medium"));
}
