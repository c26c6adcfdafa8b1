//! Core types shared across the cvscreen pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the labeled dataset.
///
/// The field names match the CSV column headers (`ruta`, `etiqueta`,
/// `texto`), which are part of the dataset's external contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Path to the resume PDF
    pub ruta: PathBuf,
    /// Suitability label (e.g. "Alto", "Bajo")
    pub etiqueta: String,
    /// Extracted text; `None` until the dataset is materialized
    #[serde(default)]
    pub texto: Option<String>,
}

/// A class label paired with its predicted probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: String,
    pub probability: f64,
}

/// Per-class probabilities for a single classified text.
///
/// Probabilities are kept in the pipeline's class ordering and sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub probabilities: Vec<ClassProbability>,
}

impl Prediction {
    /// The class with the maximum probability.
    ///
    /// Ties resolve to the class that appears first in class ordering,
    /// which keeps the result stable across runs.
    #[must_use]
    pub fn top(&self) -> Option<&ClassProbability> {
        self.probabilities.iter().fold(None, |best, cp| match best {
            Some(b) if cp.probability > b.probability => Some(cp),
            None => Some(cp),
            _ => best,
        })
    }

    /// Probability of a specific class, if it is part of the trained label set.
    #[must_use]
    pub fn probability_of(&self, label: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|cp| cp.label == label)
            .map(|cp| cp.probability)
    }
}
