//! Predictor tests against the embedded corpus

use super::predictor::CategoryPredictor;
use super::Classifier;
use crate::logic::config::DashboardConfig;
use crate::logic::dataset::{DisorderLabel, TrainingCorpus};
use crate::logic::error::HealthError;
use crate::logic::features::{AttributeRecord, Level, RawAttributeRecord, YesNo};

fn predictor() -> CategoryPredictor {
    CategoryPredictor::train(TrainingCorpus::embedded(), &DashboardConfig::default()).unwrap()
}

fn severe_record() -> AttributeRecord {
    AttributeRecord {
        sleep_hours: 3,
        exercise_hours: 0.0,
        screen_time: 12.0,
        stress_level: Level::High,
        caffeine_intake: 6,
        alcohol_consumption: YesNo::Yes,
        work_hours: 13.0,
        water_intake: 1.0,
        junk_food_frequency: Level::High,
        smoking: YesNo::Yes,
    }
}

#[test]
fn test_every_corpus_row_predicts() {
    let predictor = predictor();
    for row in TrainingCorpus::embedded().rows() {
        let record = row.to_record().unwrap();
        let label = predictor.predict(&record).unwrap();
        assert!(DisorderLabel::ALL.contains(&label));
    }
}

#[test]
fn test_severe_row_predicts_severe() {
    let predictor = predictor();
    assert_eq!(
        predictor.predict(&severe_record()).unwrap(),
        DisorderLabel::SevereSleepApnea
    );
}

#[test]
fn test_detailed_prediction_shares() {
    let predictor = predictor();
    let prediction = predictor.predict_detailed(&severe_record()).unwrap();

    assert_eq!(prediction.shares.len(), 4);
    let total: f32 = prediction.shares.iter().map(|s| s.share).sum();
    assert!((total - 1.0).abs() < 1e-4);
    assert!(prediction
        .shares
        .iter()
        .all(|s| s.share <= prediction.confidence));
}

#[test]
fn test_retraining_is_deterministic() {
    let a = predictor();
    let b = predictor();
    assert_eq!(a.metadata().fingerprint, b.metadata().fingerprint);

    for row in TrainingCorpus::embedded().rows() {
        let record = row.to_record().unwrap();
        assert_eq!(a.predict(&record).unwrap(), b.predict(&record).unwrap());
    }
}

#[test]
fn test_metadata() {
    let predictor = predictor();
    let meta = predictor.metadata();
    assert_eq!(meta.n_trees, 100);
    assert_eq!(meta.seed, 42);
    assert_eq!(meta.features, 10);
    assert_eq!(meta.classes, 4);
    assert_eq!(meta.training_rows, 10);
}

#[test]
fn test_encode_value_unknown_category() {
    let predictor = predictor();
    assert_eq!(predictor.encode_value("stress_level", "High").unwrap(), 0);
    assert_eq!(predictor.encode_value("smoking", "No").unwrap(), 1);
    assert_eq!(
        predictor.encode_value("stress_level", "Extreme"),
        Err(HealthError::unknown_category("stress_level", "Extreme"))
    );
    assert!(matches!(
        predictor.encode_value("sleep_hours", "8"),
        Err(HealthError::SchemaMismatch { .. })
    ));
}

#[test]
fn test_encode_rejects_out_of_domain_record() {
    let predictor = predictor();
    let mut record = severe_record();
    record.sleep_hours = 30;
    assert!(matches!(
        predictor.encode(&record),
        Err(HealthError::SchemaMismatch { .. })
    ));
}

#[test]
fn test_raw_extreme_stress_never_reaches_model() {
    let mut raw: RawAttributeRecord = severe_record().to_raw();
    raw.stress_level = Some("Extreme".to_string());
    assert!(matches!(
        AttributeRecord::from_raw(&raw),
        Err(HealthError::UnknownCategory { .. })
    ));
}

#[test]
fn test_encoded_vector_layout() {
    let predictor = predictor();
    let vector = predictor.encode(&severe_record()).unwrap();
    assert_eq!(
        vector.values,
        [3.0, 0.0, 12.0, 0.0, 6.0, 0.0, 13.0, 1.0, 0.0, 0.0]
    );
}

#[test]
fn test_foreign_vector_rejected() {
    let predictor = predictor();
    let mut vector = predictor.encode(&severe_record()).unwrap();
    vector.version += 1;
    assert!(matches!(
        predictor.predict_vector(&vector),
        Err(HealthError::CorpusMismatch(_))
    ));
}

#[test]
fn test_single_tree_forest_fits_corpus() {
    // Without bootstrap a single fully-grown tree memorises the corpus
    let corpus = TrainingCorpus::embedded();
    let encodings = crate::logic::dataset::CategoryEncodings::from_corpus(&corpus).unwrap();
    let (x, y) = corpus.to_matrix(&encodings).unwrap();
    let params = super::ForestParams {
        n_trees: 1,
        bootstrap: false,
        ..Default::default()
    };
    let forest = super::RandomForest::fit(&x, &y, params).unwrap();

    for (i, &label) in y.iter().enumerate() {
        let row: Vec<f32> = x.row(i).to_vec();
        assert_eq!(forest.predict(&row), label, "row {}", i);
    }
}
