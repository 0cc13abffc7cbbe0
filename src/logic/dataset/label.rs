//! Disorder labels (classifier output domain)

use serde::{Deserialize, Serialize};

use crate::logic::error::{HealthError, HealthResult};
use crate::logic::features::LABEL_COLUMN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisorderLabel {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Insomnia")]
    Insomnia,
    #[serde(rename = "Mild Sleep Apnea")]
    MildSleepApnea,
    #[serde(rename = "Severe Sleep Apnea")]
    SevereSleepApnea,
}

impl DisorderLabel {
    pub const ALL: [DisorderLabel; 4] = [
        DisorderLabel::Healthy,
        DisorderLabel::Insomnia,
        DisorderLabel::MildSleepApnea,
        DisorderLabel::SevereSleepApnea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisorderLabel::Healthy => "Healthy",
            DisorderLabel::Insomnia => "Insomnia",
            DisorderLabel::MildSleepApnea => "Mild Sleep Apnea",
            DisorderLabel::SevereSleepApnea => "Severe Sleep Apnea",
        }
    }

    pub fn parse(value: &str) -> HealthResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == value)
            .ok_or_else(|| HealthError::unknown_category(LABEL_COLUMN, value))
    }
}

impl std::fmt::Display for DisorderLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
