//! The fitted vectorizer + classifier pipeline and its persisted artifact.

use cvscreen_core::{Classifier, ModelError, Prediction};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::logistic::{LogisticParams, OneVsRestLogistic};
use crate::tfidf::TfidfVectorizer;

/// Parameters for fitting a [`TextPipeline`].
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Maximum retained vocabulary size.
    pub max_features: usize,
    pub logistic: LogisticParams,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            max_features: 5000,
            logistic: LogisticParams::default(),
        }
    }
}

/// A fitted text-classification pipeline.
///
/// Bundles the fitted [`TfidfVectorizer`] and [`OneVsRestLogistic`] so they
/// are always persisted and loaded together. The JSON artifact is replaced
/// wholesale on every save; loading a saved pipeline yields a behaviorally
/// identical one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPipeline {
    vectorizer: TfidfVectorizer,
    classifier: OneVsRestLogistic,
}

impl TextPipeline {
    /// Fit the pipeline on parallel (text, label) sequences.
    pub fn fit(texts: &[&str], labels: &[&str], params: &PipelineParams) -> Result<Self, ModelError> {
        let vectorizer = TfidfVectorizer::fit(texts, params.max_features)?;

        let mut features = Array2::zeros((texts.len(), vectorizer.vocabulary_size()));
        for (row, text) in texts.iter().enumerate() {
            features.row_mut(row).assign(&vectorizer.transform(text));
        }

        let classifier = OneVsRestLogistic::fit(&features, labels, &params.logistic)?;
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Per-class probabilities for one text.
    pub fn predict(&self, text: &str) -> Result<Prediction, ModelError> {
        let features = self.vectorizer.transform(text);
        self.classifier.classify(features.view())
    }

    /// The trained class labels, in prediction order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Persist the pipeline, replacing any prior artifact at `path`.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let bytes = serde_json::to_vec(self)?;
        fs::write(path, bytes)?;
        info!("Saved pipeline artifact to {:?}", path);
        Ok(())
    }

    /// Load a persisted pipeline.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        let pipeline = serde_json::from_slice(&bytes)?;
        debug!("Loaded pipeline artifact from {:?}", path);
        Ok(pipeline)
    }
}
