//! # cvscreen-core
//!
//! Core types and traits for cvscreen, a resume screening pipeline.
//!
//! The pipeline is organized as a linear flow:
//!
//! ```text
//! PDF → TextExtractor → TfidfVectorizer → Classifier → Prediction → Decision
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LabeledRecord`] | One row of the labeled CSV dataset |
//! | [`ClassProbability`] | A class label with its predicted probability |
//! | [`Prediction`] | Per-class probabilities for a single text |
//!
//! ## Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`TextExtractor`] | Extract plain text from a document file |
//! | [`Vectorizer`] | Map raw text to a fixed-length feature vector |
//! | [`Classifier`] | Map a feature vector to per-class probabilities |
//!
//! Concrete implementations live in the `cvscreen-extract` and
//! `cvscreen-model` crates; `cvscreen-triage` coordinates them.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DatasetError, Error, ExtractError, ModelError};
pub use traits::{Classifier, TextExtractor, Vectorizer};
pub use types::{ClassProbability, LabeledRecord, Prediction};

/// Convenience result type using the crate-level [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
