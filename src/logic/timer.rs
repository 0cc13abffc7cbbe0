//! Meditation Timer
//!
//! Pure frame computation: the caller decides how fast to tick. One frame per
//! elapsed second, from 0 to the full duration inclusive. Breathing follows a
//! 6-second cycle: 2s inhale, 2s hold, 2s exhale.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TIMER_MINUTES, MIN_TIMER_MINUTES};
use crate::logic::error::{HealthError, HealthResult};

pub const BREATH_CYCLE_SECS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn at(elapsed_secs: u32) -> Self {
        match elapsed_secs % BREATH_CYCLE_SECS {
            0 | 1 => BreathPhase::Inhale,
            2 | 3 => BreathPhase::Hold,
            _ => BreathPhase::Exhale,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "🌬️  Inhale slowly...",
            BreathPhase::Hold => "😌 Hold...",
            BreathPhase::Exhale => "💨 Exhale slowly...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerFrame {
    pub elapsed_secs: u32,
    pub remaining_secs: u32,
    pub phase: BreathPhase,
    /// 0.0 - 1.0
    pub progress: f32,
}

impl TimerFrame {
    /// "MM:SS"
    pub fn remaining_label(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeditationTimer {
    total_secs: u32,
}

impl MeditationTimer {
    pub fn new(minutes: u32) -> HealthResult<Self> {
        if !(MIN_TIMER_MINUTES..=MAX_TIMER_MINUTES).contains(&minutes) {
            return Err(HealthError::measurement(
                "minutes",
                f64::from(minutes),
                f64::from(MIN_TIMER_MINUTES),
                f64::from(MAX_TIMER_MINUTES),
            ));
        }
        Ok(Self {
            total_secs: minutes * 60,
        })
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Frame at `elapsed_secs`, `None` once past the end
    pub fn frame(&self, elapsed_secs: u32) -> Option<TimerFrame> {
        if elapsed_secs > self.total_secs {
            return None;
        }
        Some(TimerFrame {
            elapsed_secs,
            remaining_secs: self.total_secs - elapsed_secs,
            phase: BreathPhase::at(elapsed_secs),
            progress: elapsed_secs as f32 / self.total_secs as f32,
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = TimerFrame> + '_ {
        (0..=self.total_secs).filter_map(move |i| self.frame(i))
    }
}
