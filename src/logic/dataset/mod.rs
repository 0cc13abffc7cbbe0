//! Dataset Module - embedded training corpus and category encodings
//!
//! - `corpus`: the ten fixed labelled rows
//! - `encoding`: first-appearance category encodings per categorical column
//! - `label`: classifier output domain

pub mod corpus;
pub mod encoding;
pub mod label;

pub use corpus::{CorpusRow, TrainingCorpus, TRAINING_ROWS};
pub use encoding::{CategoryEncoding, CategoryEncodings};
pub use label::DisorderLabel;
