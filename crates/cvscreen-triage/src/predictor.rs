//! Prediction coordination: load the artifact, extract, classify, decide.

use cvscreen_core::{ClassProbability, Error, Prediction, TextExtractor};
use cvscreen_model::TextPipeline;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::decision::{decide, Decision, DecisionThresholds};

/// Outcome of classifying one resume.
#[derive(Debug, Clone)]
pub struct PredictReport {
    /// Per-class probabilities, in the pipeline's class ordering.
    pub prediction: Prediction,
    /// The class with the maximum probability.
    pub top: Option<ClassProbability>,
    /// The automated threshold decision. Independent of `top`: the rule
    /// checks "Alto" first regardless of which class won.
    pub decision: Decision,
}

/// Classifies a single resume PDF against the persisted pipeline.
pub struct Predictor {
    model_path: PathBuf,
    extractor: Arc<dyn TextExtractor>,
    thresholds: DecisionThresholds,
}

impl Predictor {
    /// Create a predictor over the given artifact location.
    pub fn new(
        model_path: impl Into<PathBuf>,
        extractor: Arc<dyn TextExtractor>,
        thresholds: DecisionThresholds,
    ) -> Self {
        Self {
            model_path: model_path.into(),
            extractor,
            thresholds,
        }
    }

    /// Whether a trained pipeline artifact exists.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.model_path.exists()
    }

    /// Classify one resume.
    ///
    /// Returns `Ok(None)` when no trained artifact exists: predicting
    /// before training is a reported condition, not a failure. Everything
    /// else (unreadable PDF, corrupt artifact) propagates as an error.
    pub fn predict(&self, pdf_path: &Path) -> Result<Option<PredictReport>, Error> {
        if !self.is_trained() {
            warn!("No pipeline artifact at {:?}; nothing to predict", self.model_path);
            return Ok(None);
        }

        let pipeline = TextPipeline::load(&self.model_path)?;
        let text = self.extractor.extract(pdf_path)?;
        debug!("Extracted {} characters from {:?}", text.len(), pdf_path);

        let prediction = pipeline.predict(&text)?;
        let top = prediction.top().cloned();
        let decision = decide(&prediction, &self.thresholds);

        Ok(Some(PredictReport {
            prediction,
            top,
            decision,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvscreen_core::ExtractError;
    use cvscreen_model::{PipelineParams, TextPipeline};
    use tempfile::tempdir;

    struct FixedTextExtractor(&'static str);

    impl TextExtractor for FixedTextExtractor {
        fn can_extract(&self, _path: &Path) -> bool {
            true
        }

        fn extract(&self, _path: &Path) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    fn save_fitted_pipeline(path: &Path) {
        let texts = [
            "amplia experiencia liderando equipos de desarrollo",
            "experiencia liderando proyectos de software",
            "sin experiencia previa en el sector",
            "perfil junior sin estudios en el sector",
        ];
        let labels = ["Alto", "Alto", "Bajo", "Bajo"];
        TextPipeline::fit(&texts, &labels, &PipelineParams::default())
            .unwrap()
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_predict_without_artifact_reports_none() {
        let dir = tempdir().unwrap();
        let predictor = Predictor::new(
            dir.path().join("absent.json"),
            Arc::new(FixedTextExtractor("da igual")),
            DecisionThresholds::default(),
        );

        assert!(!predictor.is_trained());
        let report = predictor.predict(Path::new("cv.pdf")).unwrap();
        assert!(report.is_none());
    }

    #[test]
    fn test_predict_returns_probabilities_and_decision() {
        let dir = tempdir().unwrap();
        let model_path = dir.path().join("cv_pipeline.json");
        save_fitted_pipeline(&model_path);

        let predictor = Predictor::new(
            &model_path,
            Arc::new(FixedTextExtractor(
                "candidato con experiencia liderando equipos",
            )),
            DecisionThresholds::default(),
        );

        let report = predictor.predict(Path::new("cv.pdf")).unwrap().unwrap();

        let sum: f64 = report
            .prediction
            .probabilities
            .iter()
            .map(|cp| cp.probability)
            .sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(report.top.as_ref().unwrap().label, "Alto");
        assert_eq!(report.decision, Decision::Approved);
    }

    #[test]
    fn test_predict_propagates_extraction_failure() {
        struct FailingExtractor;

        impl TextExtractor for FailingExtractor {
            fn can_extract(&self, _path: &Path) -> bool {
                true
            }

            fn extract(&self, _path: &Path) -> Result<String, ExtractError> {
                Err(ExtractError::Parse("broken file".to_string()))
            }
        }

        let dir = tempdir().unwrap();
        let model_path = dir.path().join("cv_pipeline.json");
        save_fitted_pipeline(&model_path);

        let predictor = Predictor::new(
            &model_path,
            Arc::new(FailingExtractor),
            DecisionThresholds::default(),
        );

        assert!(predictor.predict(Path::new("cv.pdf")).is_err());
    }
}
