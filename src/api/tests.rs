//! Command-level tests: the end-to-end dashboard scenarios

use super::commands::*;
use crate::logic::config::DashboardConfig;
use crate::logic::dataset::DisorderLabel;
use crate::logic::features::RawAttributeRecord;
use crate::logic::health::Badge;

fn context() -> DashboardContext {
    DashboardContext::new(DashboardConfig::default()).unwrap()
}

fn raw(
    sleep: f64,
    exercise: f64,
    screen: f64,
    stress: &str,
    caffeine: f64,
    alcohol: &str,
    work: f64,
    water: f64,
    junk: &str,
    smoking: &str,
) -> RawAttributeRecord {
    RawAttributeRecord {
        sleep_hours: Some(sleep),
        exercise_hours: Some(exercise),
        screen_time: Some(screen),
        stress_level: Some(stress.to_string()),
        caffeine_intake: Some(caffeine),
        alcohol_consumption: Some(alcohol.to_string()),
        work_hours: Some(work),
        water_intake: Some(water),
        junk_food_frequency: Some(junk.to_string()),
        smoking: Some(smoking.to_string()),
    }
}

#[test]
fn test_healthy_scenario() {
    let ctx = context();
    let report = predict_and_score(
        &ctx,
        &raw(8.0, 1.0, 4.0, "Low", 1.0, "No", 7.0, 3.0, "Low", "No"),
    )
    .unwrap();

    assert_eq!(report.health.score, 100);
    assert_eq!(
        report.health.badges,
        vec![Badge::SleepChampion, Badge::HydrationHero, Badge::StepStarter]
    );
    assert!(report.health.penalties.is_empty());
    assert_eq!(report.session_id, ctx.session_id().to_string());
}

#[test]
fn test_severe_scenario() {
    let ctx = context();
    let report = predict_and_score(
        &ctx,
        &raw(3.0, 0.0, 12.0, "High", 6.0, "Yes", 13.0, 1.0, "High", "Yes"),
    )
    .unwrap();

    assert_eq!(report.health.score, 15);
    assert_eq!(report.health.penalties.len(), 9);
    assert!(report.health.badges.is_empty());
    assert_eq!(report.label(), DisorderLabel::SevereSleepApnea);
}

#[test]
fn test_unknown_category_is_reported() {
    let ctx = context();
    let err = predict_and_score(
        &ctx,
        &raw(8.0, 1.0, 4.0, "Extreme", 1.0, "No", 7.0, 3.0, "Low", "No"),
    )
    .unwrap_err();
    assert!(err.contains("stress_level"));
    assert!(err.contains("Extreme"));
}

#[test]
fn test_predict_from_json() {
    let ctx = context();
    let json = r#"{
        "sleep_hours": 3, "exercise_hours": 0, "screen_time": 12,
        "stress_level": "High", "caffeine_intake": 6, "alcohol_consumption": "Yes",
        "work_hours": 13, "water_intake": 1, "junk_food_frequency": "High", "smoking": "Yes"
    }"#;
    let report = predict_from_json(&ctx, json).unwrap();
    assert_eq!(report.health.score, 15);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["prediction"]["label"], "Severe Sleep Apnea");

    assert!(predict_from_json(&ctx, r#"{"sleep_hours": 8}"#).is_err());
    assert!(predict_from_json(&ctx, "not json").is_err());
}

#[test]
fn test_field_choices_follow_encoding_order() {
    let ctx = context();
    let choices = get_field_choices(&ctx).unwrap();
    assert_eq!(choices.len(), 4);
    assert_eq!(choices[0].field, "stress_level");
    assert_eq!(choices[0].choices, vec!["High", "Low", "Medium"]);
}

#[test]
fn test_calculator_commands() {
    let reading = calculate_bmi(60.0, 170.0).unwrap();
    assert!((reading.value - 20.761).abs() < 1e-3);
    assert!((calculate_hydration(60.0).unwrap() - 1.98).abs() < 1e-9);

    let energy = calculate_energy(60.0, 170.0, 25.0, "male", "sedentary").unwrap();
    assert!((energy.bmr - 1565.86).abs() < 1e-6);
    assert!(calculate_energy(60.0, 170.0, 25.0, "other", "sedentary").is_err());
    assert!(calculate_bmi(10.0, 170.0).is_err());
}

#[test]
fn test_meditation_uses_configured_default() {
    let ctx = context();
    let frames = get_meditation_frames(&ctx, None).unwrap();
    assert_eq!(frames.len(), 121);
    assert_eq!(frames[0].remaining_label(), "02:00");
    assert!(start_meditation(&ctx, Some(0)).is_err());
}

#[test]
fn test_model_metadata() {
    let ctx = context();
    let metadata = get_model_metadata(&ctx);
    assert_eq!(metadata.n_trees, 100);
    assert_eq!(metadata.classes, 4);
    assert_eq!(get_knowledge_base().sleep_foods.len(), 4);
}
