//! Attribute Records
//!
//! `RawAttributeRecord` is what the input side hands over (JSON, CLI flags,
//! prompts). `AttributeRecord` is the validated form the predictor and the
//! scorer consume.

use serde::{Deserialize, Serialize};

use crate::logic::error::{HealthError, HealthResult};

// ============================================================================
// CATEGORICAL DOMAINS
// ============================================================================

/// Low / Medium / High (stress_level, junk_food_frequency)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }

    /// Parse a raw value for `field`, failing with `UnknownCategory`
    pub fn parse(field: &str, value: &str) -> HealthResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == value)
            .ok_or_else(|| HealthError::unknown_category(field, value))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Yes / No (alcohol_consumption, smoking)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    pub fn parse(field: &str, value: &str) -> HealthResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| HealthError::unknown_category(field, value))
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VALIDATED RECORD
// ============================================================================

/// Lifestyle attributes for one prediction/scoring request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub sleep_hours: u8,
    pub exercise_hours: f32,
    pub screen_time: f32,
    pub stress_level: Level,
    pub caffeine_intake: u32,
    pub alcohol_consumption: YesNo,
    pub work_hours: f32,
    pub water_intake: f32,
    pub junk_food_frequency: Level,
    pub smoking: YesNo,
}

/// Upper bound for every hours-per-day field
pub const HOURS_PER_DAY: f32 = 24.0;

impl AttributeRecord {
    /// Check numeric domains. Fields are public, so encode re-checks.
    pub fn validate(&self) -> HealthResult<()> {
        if f32::from(self.sleep_hours) > HOURS_PER_DAY {
            return Err(HealthError::schema(
                "sleep_hours",
                format!("{} exceeds {} hours", self.sleep_hours, HOURS_PER_DAY),
            ));
        }
        check_unbounded("exercise_hours", self.exercise_hours)?;
        check_hours("screen_time", self.screen_time)?;
        check_hours("work_hours", self.work_hours)?;
        check_unbounded("water_intake", self.water_intake)?;
        Ok(())
    }

    /// Validate and convert a raw record
    pub fn from_raw(raw: &RawAttributeRecord) -> HealthResult<Self> {
        let record = Self {
            sleep_hours: integer_field("sleep_hours", raw.sleep_hours, f64::from(HOURS_PER_DAY))?
                as u8,
            exercise_hours: number_field("exercise_hours", raw.exercise_hours)?,
            screen_time: number_field("screen_time", raw.screen_time)?,
            stress_level: Level::parse(
                "stress_level",
                text_field("stress_level", &raw.stress_level)?,
            )?,
            caffeine_intake: integer_field(
                "caffeine_intake",
                raw.caffeine_intake,
                f64::from(u32::MAX),
            )? as u32,
            alcohol_consumption: YesNo::parse(
                "alcohol_consumption",
                text_field("alcohol_consumption", &raw.alcohol_consumption)?,
            )?,
            work_hours: number_field("work_hours", raw.work_hours)?,
            water_intake: number_field("water_intake", raw.water_intake)?,
            junk_food_frequency: Level::parse(
                "junk_food_frequency",
                text_field("junk_food_frequency", &raw.junk_food_frequency)?,
            )?,
            smoking: YesNo::parse("smoking", text_field("smoking", &raw.smoking)?)?,
        };

        record.validate()?;
        Ok(record)
    }

    pub fn to_raw(&self) -> RawAttributeRecord {
        RawAttributeRecord {
            sleep_hours: Some(f64::from(self.sleep_hours)),
            exercise_hours: Some(f64::from(self.exercise_hours)),
            screen_time: Some(f64::from(self.screen_time)),
            stress_level: Some(self.stress_level.as_str().to_string()),
            caffeine_intake: Some(f64::from(self.caffeine_intake)),
            alcohol_consumption: Some(self.alcohol_consumption.as_str().to_string()),
            work_hours: Some(f64::from(self.work_hours)),
            water_intake: Some(f64::from(self.water_intake)),
            junk_food_frequency: Some(self.junk_food_frequency.as_str().to_string()),
            smoking: Some(self.smoking.as_str().to_string()),
        }
    }
}

fn check_unbounded(field: &str, value: f32) -> HealthResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HealthError::schema(field, format!("{} is not a non-negative number", value)));
    }
    Ok(())
}

fn check_hours(field: &str, value: f32) -> HealthResult<()> {
    check_unbounded(field, value)?;
    if value > HOURS_PER_DAY {
        return Err(HealthError::schema(
            field,
            format!("{} exceeds {} hours", value, HOURS_PER_DAY),
        ));
    }
    Ok(())
}

// ============================================================================
// RAW RECORD
// ============================================================================

/// Unvalidated attributes as supplied by the input side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAttributeRecord {
    pub sleep_hours: Option<f64>,
    pub exercise_hours: Option<f64>,
    pub screen_time: Option<f64>,
    pub stress_level: Option<String>,
    pub caffeine_intake: Option<f64>,
    pub alcohol_consumption: Option<String>,
    pub work_hours: Option<f64>,
    pub water_intake: Option<f64>,
    pub junk_food_frequency: Option<String>,
    pub smoking: Option<String>,
}

fn required<T: Copy>(field: &str, value: Option<T>) -> HealthResult<T> {
    value.ok_or_else(|| HealthError::schema(field, "missing"))
}

fn number_field(field: &str, value: Option<f64>) -> HealthResult<f32> {
    let v = required(field, value)?;
    if !v.is_finite() || v < 0.0 {
        return Err(HealthError::schema(field, format!("{} is not a non-negative number", v)));
    }
    Ok(v as f32)
}

fn integer_field(field: &str, value: Option<f64>, max: f64) -> HealthResult<f64> {
    let v = required(field, value)?;
    if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
        return Err(HealthError::schema(field, format!("{} is not a non-negative integer", v)));
    }
    if v > max {
        return Err(HealthError::schema(field, format!("{} exceeds {}", v, max)));
    }
    Ok(v)
}

fn text_field<'a>(field: &str, value: &'a Option<String>) -> HealthResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| HealthError::schema(field, "missing"))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_healthy() -> RawAttributeRecord {
        RawAttributeRecord {
            sleep_hours: Some(8.0),
            exercise_hours: Some(1.0),
            screen_time: Some(4.0),
            stress_level: Some("Low".to_string()),
            caffeine_intake: Some(1.0),
            alcohol_consumption: Some("No".to_string()),
            work_hours: Some(7.0),
            water_intake: Some(3.0),
            junk_food_frequency: Some("Low".to_string()),
            smoking: Some("No".to_string()),
        }
    }

    #[test]
    fn test_from_raw_valid() {
        let record = AttributeRecord::from_raw(&raw_healthy()).unwrap();
        assert_eq!(record.sleep_hours, 8);
        assert_eq!(record.stress_level, Level::Low);
        assert_eq!(record.smoking, YesNo::No);
        assert_eq!(AttributeRecord::from_raw(&record.to_raw()).unwrap(), record);
    }

    #[test]
    fn test_missing_field_is_schema_mismatch() {
        let raw = RawAttributeRecord {
            water_intake: None,
            ..raw_healthy()
        };
        match AttributeRecord::from_raw(&raw) {
            Err(HealthError::SchemaMismatch { field, .. }) => assert_eq!(field, "water_intake"),
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_sleep_hours_out_of_domain() {
        for bad in [-1.0, 25.0, 7.5, f64::NAN] {
            let raw = RawAttributeRecord {
                sleep_hours: Some(bad),
                ..raw_healthy()
            };
            assert!(
                matches!(AttributeRecord::from_raw(&raw), Err(HealthError::SchemaMismatch { .. })),
                "sleep_hours {} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_screen_time_over_a_day() {
        let raw = RawAttributeRecord {
            screen_time: Some(24.5),
            ..raw_healthy()
        };
        assert!(matches!(
            AttributeRecord::from_raw(&raw),
            Err(HealthError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_category() {
        let raw = RawAttributeRecord {
            stress_level: Some("Extreme".to_string()),
            ..raw_healthy()
        };
        assert_eq!(
            AttributeRecord::from_raw(&raw),
            Err(HealthError::unknown_category("stress_level", "Extreme"))
        );
        assert!(YesNo::parse("smoking", "yes").is_err());
    }

    #[test]
    fn test_padded_category_is_unknown() {
        let raw = RawAttributeRecord {
            stress_level: Some(" Low".to_string()),
            ..raw_healthy()
        };
        assert_eq!(
            AttributeRecord::from_raw(&raw),
            Err(HealthError::unknown_category("stress_level", " Low"))
        );

        let raw = RawAttributeRecord {
            smoking: Some("No\t".to_string()),
            ..raw_healthy()
        };
        assert!(matches!(
            AttributeRecord::from_raw(&raw),
            Err(HealthError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_exercise_hours_has_no_upper_bound() {
        let raw = RawAttributeRecord {
            exercise_hours: Some(25.0),
            ..raw_healthy()
        };
        let record = AttributeRecord::from_raw(&raw).unwrap();
        assert_eq!(record.exercise_hours, 25.0);
    }

    #[test]
    fn test_validate_rejects_negative_exercise() {
        let mut record = AttributeRecord::from_raw(&raw_healthy()).unwrap();
        record.exercise_hours = -0.5;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_raw_from_json() {
        let json = r#"{"sleep_hours": 6, "exercise_hours": 0.5, "screen_time": 8,
            "stress_level": "Medium", "caffeine_intake": 2, "alcohol_consumption": "No",
            "work_hours": 9, "water_intake": 2, "junk_food_frequency": "Medium", "smoking": "No"}"#;
        let raw: RawAttributeRecord = serde_json::from_str(json).unwrap();
        let record = AttributeRecord::from_raw(&raw).unwrap();
        assert_eq!(record.junk_food_frequency, Level::Medium);
        assert_eq!(record.exercise_hours, 0.5);
    }
}
