//! Basal metabolic rate (revised Harris-Benedict) and daily calorie need

use serde::{Deserialize, Serialize};

use super::{check_range, AGE_RANGE_YEARS, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::logic::error::{HealthError, HealthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HealthError::unknown_category("sex", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = HealthError;

    /// Accepts "Very Active", "very-active" and "very_active"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| HealthError::unknown_category("activity_level", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// kcal/day at rest
    pub bmr: f64,
    pub activity: ActivityLevel,
    /// kcal/day including activity
    pub daily_calories: f64,
}

pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> HealthResult<f64> {
    check_range("weight_kg", weight_kg, WEIGHT_RANGE_KG)?;
    check_range("height_cm", height_cm, HEIGHT_RANGE_CM)?;
    check_range("age_years", age_years, AGE_RANGE_YEARS)?;

    let value = match sex {
        Sex::Male => 88.36 + 13.4 * weight_kg + 4.8 * height_cm - 5.7 * age_years,
        Sex::Female => 447.6 + 9.2 * weight_kg + 3.1 * height_cm - 4.3 * age_years,
    };
    Ok(value)
}

pub fn daily_calories(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

pub fn energy_estimate(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    activity: ActivityLevel,
) -> HealthResult<EnergyEstimate> {
    let bmr = bmr(weight_kg, height_cm, age_years, sex)?;
    Ok(EnergyEstimate {
        bmr,
        activity,
        daily_calories: daily_calories(bmr, activity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_bmr() {
        // 88.36 + 804 + 816 - 142.5
        let value = bmr(60.0, 170.0, 25.0, Sex::Male).unwrap();
        assert!((value - 1565.86).abs() < 1e-6);
    }

    #[test]
    fn test_female_bmr() {
        // 447.6 + 552 + 527 - 107.5
        let value = bmr(60.0, 170.0, 25.0, Sex::Female).unwrap();
        assert!((value - 1419.1).abs() < 1e-6);
    }

    #[test]
    fn test_daily_calories() {
        let estimate =
            energy_estimate(60.0, 170.0, 25.0, Sex::Male, ActivityLevel::Sedentary).unwrap();
        assert!((estimate.daily_calories - 1565.86 * 1.2).abs() < 1e-6);
        assert!((daily_calories(1000.0, ActivityLevel::VeryActive) - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse() {
        assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("very-active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("Very Active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert!("athlete".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_age_range() {
        assert!(bmr(60.0, 170.0, 9.0, Sex::Male).is_err());
        assert!(bmr(60.0, 170.0, 101.0, Sex::Female).is_err());
    }
}
