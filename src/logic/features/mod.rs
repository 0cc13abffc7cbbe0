//! Features Module - attribute schema and feature vectors
//!
//! - `record`: raw and validated attribute records, categorical domains
//! - `layout`: fixed column order + layout hash
//! - `vector`: versioned feature vector fed to the forest

pub mod layout;
pub mod record;
pub mod vector;

pub use layout::{feature_index, CATEGORICAL_FEATURES, FEATURE_COUNT, FEATURE_LAYOUT, LABEL_COLUMN};
pub use record::{AttributeRecord, Level, RawAttributeRecord, YesNo};
pub use vector::FeatureVector;
