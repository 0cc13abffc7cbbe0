//! Daily hydration target

use super::{check_range, WEIGHT_RANGE_KG};
use crate::logic::error::HealthResult;

/// Litres of water per kg of body weight
pub const LITRES_PER_KG: f64 = 0.033;

pub fn hydration_target(weight_kg: f64) -> HealthResult<f64> {
    check_range("weight_kg", weight_kg, WEIGHT_RANGE_KG)?;
    Ok(weight_kg * LITRES_PER_KG)
}
