//! Trait seams for the cvscreen pipeline components.
//!
//! - [`TextExtractor`]: extract plain text from a document file
//! - [`Vectorizer`]: map raw text to a fixed-length feature vector
//! - [`Classifier`]: map a feature vector to per-class probabilities
//!
//! Every invocation of the tool is a single synchronous pass, so the
//! seams are synchronous as well.

use ndarray::{Array1, ArrayView1};
use std::path::Path;

use crate::error::{ExtractError, ModelError};
use crate::types::Prediction;

/// Trait for extracting plain text from a file.
pub trait TextExtractor: Send + Sync {
    /// Check if this extractor handles the given file, by extension.
    fn can_extract(&self, path: &Path) -> bool;

    /// Extract the full text of a document as a single string.
    ///
    /// A document with no extractable text yields an empty string; only
    /// an unreadable or malformed file is an error.
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Trait for converting raw text into a fixed-length feature vector.
pub trait Vectorizer: Send + Sync {
    /// Number of features produced per text.
    fn dimension(&self) -> usize;

    /// Vectorize a single text.
    fn vectorize(&self, text: &str) -> Array1<f64>;
}

/// Trait for classifying a feature vector into per-class probabilities.
pub trait Classifier: Send + Sync {
    /// The trained class labels, in prediction order.
    fn classes(&self) -> &[String];

    /// Per-class probabilities for one feature vector; probabilities are
    /// non-negative and sum to 1.
    fn classify(&self, features: ArrayView1<'_, f64>) -> Result<Prediction, ModelError>;
}
