//! Body-mass index

use serde::{Deserialize, Serialize};

use super::{check_range, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::logic::error::HealthResult;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const NORMAL_BELOW: f64 = 25.0;
pub const OVERWEIGHT_BELOW: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_value(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < NORMAL_BELOW {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
}

/// weight / (height in metres)²
pub fn bmi(weight_kg: f64, height_cm: f64) -> HealthResult<BmiReading> {
    check_range("weight_kg", weight_kg, WEIGHT_RANGE_KG)?;
    check_range("height_cm", height_cm, HEIGHT_RANGE_CM)?;

    let metres = height_cm / 100.0;
    let value = weight_kg / (metres * metres);

    Ok(BmiReading {
        value,
        category: BmiCategory::from_value(value),
    })
}
