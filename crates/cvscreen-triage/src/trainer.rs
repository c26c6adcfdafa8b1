//! Training coordination: materialize the dataset, fit, persist.

use cvscreen_core::{Error, TextExtractor};
use cvscreen_dataset::Dataset;
use cvscreen_model::{PipelineParams, TextPipeline};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Fits the text-classification pipeline from the labeled dataset and
/// persists the artifact.
pub struct Trainer {
    dataset_path: PathBuf,
    model_path: PathBuf,
    extractor: Arc<dyn TextExtractor>,
    params: PipelineParams,
}

impl Trainer {
    /// Create a trainer over the given dataset and artifact locations.
    pub fn new(
        dataset_path: impl Into<PathBuf>,
        model_path: impl Into<PathBuf>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            model_path: model_path.into(),
            extractor,
            params: PipelineParams::default(),
        }
    }

    /// Override the default fitting parameters.
    #[must_use]
    pub fn with_params(mut self, params: PipelineParams) -> Self {
        self.params = params;
        self
    }

    /// Run the full training pass.
    ///
    /// Loads the dataset, materializes extracted text if the `texto` column
    /// is absent or empty, fits the pipeline on (texto, etiqueta) pairs and
    /// persists it, replacing any prior artifact. Returns the artifact path.
    pub fn train(&self) -> Result<PathBuf, Error> {
        let mut dataset = Dataset::load(&self.dataset_path)?;

        if dataset.materialize(self.extractor.as_ref())? {
            info!("Materialized extracted text for {:?}", self.dataset_path);
        }

        let texts = dataset.texts();
        let labels = dataset.labels();
        let pipeline = TextPipeline::fit(&texts, &labels, &self.params)?;
        pipeline.save(&self.model_path)?;

        info!(
            "Trained pipeline on {} records ({} classes)",
            dataset.len(),
            pipeline.classes().len()
        );
        Ok(self.model_path.clone())
    }
}
