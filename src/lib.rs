//! Sleep & Lifestyle Health Dashboard - Core Library
//!
//! Category predictor, health scorer and sidebar calculators behind a small
//! command API.

pub mod api;
pub mod constants;
pub mod logic;
