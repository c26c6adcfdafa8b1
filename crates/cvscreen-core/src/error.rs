//! Error types for cvscreen.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cvscreen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Text extraction failed
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// Dataset loading or persistence failed
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Model training, inference, or persistence failed
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Text extraction errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document could not be opened or parsed at all.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Labeled dataset errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A required column is absent from the CSV header.
    #[error("missing column '{0}' in dataset")]
    MissingColumn(String),

    /// Malformed CSV content.
    #[error("malformed dataset: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Model training and inference errors.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Training was attempted on a dataset with no records.
    #[error("cannot fit on an empty dataset")]
    EmptyDataset,

    /// Training failed (e.g. fewer than two distinct labels).
    #[error("training failed: {0}")]
    Training(String),

    /// Inference failed (e.g. feature dimension mismatch).
    #[error("inference failed: {0}")]
    Inference(String),

    /// The persisted pipeline artifact does not exist.
    #[error("model artifact not found at {0}")]
    ArtifactNotFound(PathBuf),

    /// Artifact serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
