//! Calculators - closed-form health formulas for the sidebar tools

pub mod bmi;
pub mod bmr;
pub mod hydration;

pub use bmi::{bmi, BmiCategory, BmiReading};
pub use bmr::{bmr, daily_calories, energy_estimate, ActivityLevel, EnergyEstimate, Sex};
pub use hydration::hydration_target;

use crate::logic::error::{HealthError, HealthResult};

/// Accepted body weight (kg)
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);

/// Accepted height (cm)
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);

/// Accepted age (years)
pub const AGE_RANGE_YEARS: (f64, f64) = (10.0, 100.0);

pub(crate) fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> HealthResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(HealthError::measurement(name, value, min, max));
    }
    Ok(())
}
