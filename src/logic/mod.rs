//! Logic Module - Business Logic & Engines
//!
//! - `features/` - Attribute records, feature layout, feature vectors
//! - `dataset/` - Embedded training corpus and category encodings
//! - `model/` - Random forest and the category predictor
//! - `health/` - Rule-based wellness score and badges
//! - `calculators/`, `timer`, `content` - Sidebar tools

pub mod calculators;
pub mod config;
pub mod content;
pub mod dataset;
pub mod error;
pub mod features;
pub mod health;
pub mod model;
pub mod timer;
