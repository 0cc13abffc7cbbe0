//! Dashboard Commands - API for the front end
//!
//! Every command takes the immutable `DashboardContext` by reference and
//! returns `Result<T, String>` so any presentation layer can display the error
//! as-is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::calculators::{self, ActivityLevel, BmiReading, EnergyEstimate, Sex};
use crate::logic::config::DashboardConfig;
use crate::logic::content::{self, KnowledgeBase};
use crate::logic::dataset::{DisorderLabel, TrainingCorpus};
use crate::logic::error::HealthResult;
use crate::logic::features::{AttributeRecord, RawAttributeRecord, CATEGORICAL_FEATURES};
use crate::logic::health::{self, ScoreResult};
use crate::logic::model::{CategoryPredictor, ModelMetadata, Prediction};
use crate::logic::timer::{MeditationTimer, TimerFrame};

// ============================================================================
// CONTEXT
// ============================================================================

/// Everything a request needs, built once at startup and never mutated
#[derive(Debug, Clone)]
pub struct DashboardContext {
    config: DashboardConfig,
    predictor: CategoryPredictor,
    session_id: Uuid,
}

impl DashboardContext {
    /// Train the predictor on the embedded corpus
    pub fn new(config: DashboardConfig) -> HealthResult<Self> {
        let predictor = CategoryPredictor::train(TrainingCorpus::embedded(), &config)?;
        let session_id = Uuid::new_v4();
        log::info!("Dashboard session {} ready", session_id);

        Ok(Self {
            config,
            predictor,
            session_id,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Prediction + score for one submitted record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub session_id: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub record: AttributeRecord,
    pub prediction: Prediction,
    pub health: ScoreResult,
}

impl PredictionReport {
    pub fn label(&self) -> DisorderLabel {
        self.prediction.label
    }
}

/// Selectable values for one categorical field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChoices {
    pub field: String,
    pub choices: Vec<String>,
}

// ============================================================================
// PREDICTION COMMANDS
// ============================================================================

pub fn predict_and_score(
    ctx: &DashboardContext,
    raw: &RawAttributeRecord,
) -> Result<PredictionReport, String> {
    let record = AttributeRecord::from_raw(raw).map_err(|e| e.to_string())?;
    report_for(ctx, record)
}

/// Same as `predict_and_score`, input as a JSON object
pub fn predict_from_json(ctx: &DashboardContext, json: &str) -> Result<PredictionReport, String> {
    let raw: RawAttributeRecord =
        serde_json::from_str(json).map_err(|e| format!("Invalid record JSON: {}", e))?;
    predict_and_score(ctx, &raw)
}

pub fn get_model_metadata(ctx: &DashboardContext) -> ModelMetadata {
    ctx.predictor.metadata().clone()
}

/// Corpus-observed values for every categorical input, in encoding order
pub fn get_field_choices(ctx: &DashboardContext) -> Result<Vec<FieldChoices>, String> {
    CATEGORICAL_FEATURES
        .iter()
        .map(|&field| {
            let encoding = ctx
                .predictor
                .encodings()
                .get(field)
                .ok_or_else(|| format!("No encoding for {}", field))?;
            Ok(FieldChoices {
                field: field.to_string(),
                choices: encoding.classes().to_vec(),
            })
        })
        .collect()
}

fn report_for(
    ctx: &DashboardContext,
    record: AttributeRecord,
) -> Result<PredictionReport, String> {
    let prediction = ctx
        .predictor
        .predict_detailed(&record)
        .map_err(|e| e.to_string())?;
    let health = health::score(&record);

    log::debug!(
        "Prediction {} ({:.0}%), score {}",
        prediction.label,
        prediction.confidence * 100.0,
        health.score
    );

    Ok(PredictionReport {
        session_id: ctx.session_id.to_string(),
        generated_at: chrono::Utc::now(),
        record,
        prediction,
        health,
    })
}

// ============================================================================
// CALCULATOR COMMANDS
// ============================================================================

pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReading, String> {
    calculators::bmi(weight_kg, height_cm).map_err(|e| e.to_string())
}

pub fn calculate_hydration(weight_kg: f64) -> Result<f64, String> {
    calculators::hydration_target(weight_kg).map_err(|e| e.to_string())
}

pub fn calculate_energy(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: &str,
    activity: &str,
) -> Result<EnergyEstimate, String> {
    let sex = sex.parse::<Sex>().map_err(|e| e.to_string())?;
    let activity = activity.parse::<ActivityLevel>().map_err(|e| e.to_string())?;
    calculators::energy_estimate(weight_kg, height_cm, age_years, sex, activity)
        .map_err(|e| e.to_string())
}

// ============================================================================
// MEDITATION & CONTENT
// ============================================================================

/// Timer for `minutes`, or the configured default
pub fn start_meditation(
    ctx: &DashboardContext,
    minutes: Option<u32>,
) -> Result<MeditationTimer, String> {
    let minutes = minutes.unwrap_or(ctx.config.timer_minutes);
    MeditationTimer::new(minutes).map_err(|e| e.to_string())
}

pub fn get_meditation_frames(
    ctx: &DashboardContext,
    minutes: Option<u32>,
) -> Result<Vec<TimerFrame>, String> {
    Ok(start_meditation(ctx, minutes)?.frames().collect())
}

pub fn get_knowledge_base() -> KnowledgeBase {
    content::knowledge_base()
}
