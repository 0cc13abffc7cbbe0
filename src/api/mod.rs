//! API Module
//!
//! Structure:
//! - commands.rs: Current stable API implementation
//! - v1/mod.rs: Re-exports commands as v1 API
//!
//! Usage:
//! - `api::commands::predict_and_score(&ctx, &raw)` - Direct access
//! - `api::v1::predict_and_score(&ctx, &raw)` - Version 1 API

pub mod commands;
pub mod v1;

#[cfg(test)]
mod tests;

// Re-export current version as default
pub use commands::*;
