//! # cvscreen-dataset
//!
//! CSV-backed labeled dataset for the cvscreen training pipeline.
//!
//! The dataset is a single CSV file with columns `ruta` (path to a resume
//! PDF), `etiqueta` (suitability label) and, once materialized, `texto`
//! (the extracted text). Materialization runs the text extractor over every
//! record and rewrites the backing file in full, so training never has to
//! re-extract on subsequent runs.

use cvscreen_core::{DatasetError, Error, LabeledRecord, TextExtractor};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A labeled dataset bound to its backing CSV file.
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
    records: Vec<LabeledRecord>,
}

impl Dataset {
    /// Load a dataset from a CSV file.
    ///
    /// The `ruta` and `etiqueta` columns are required; `texto` is optional
    /// and defaults to `None` when the column is absent.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let path = path.into();
        let mut reader =
            csv::Reader::from_path(&path).map_err(|e| DatasetError::Malformed(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::Malformed(e.to_string()))?;
        for required in ["ruta", "etiqueta"] {
            if !headers.iter().any(|h| h == required) {
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }

        let mut records = Vec::new();
        for record in reader.deserialize() {
            let record: LabeledRecord =
                record.map_err(|e| DatasetError::Malformed(e.to_string()))?;
            records.push(record);
        }

        debug!("Loaded {} records from {:?}", records.len(), path);
        Ok(Self { path, records })
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The records, in file order.
    #[must_use]
    pub fn records(&self) -> &[LabeledRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether extracted text must be (re)computed.
    ///
    /// True when the `texto` column is absent, entirely null, or has zero
    /// total character length. Partial or stale text is never detected;
    /// only wholesale absence triggers re-extraction.
    #[must_use]
    pub fn needs_materialization(&self) -> bool {
        self.records
            .iter()
            .filter_map(|r| r.texto.as_deref())
            .map(str::len)
            .sum::<usize>()
            == 0
    }

    /// Ensure every record has extracted text.
    ///
    /// When materialization is needed, runs `extractor` over every record's
    /// `ruta`, assigns the results, and rewrites the backing CSV in full.
    /// Returns whether the dataset was rewritten; a dataset that already
    /// carries text is left untouched, on disk and in memory.
    pub fn materialize(&mut self, extractor: &dyn TextExtractor) -> Result<bool, Error> {
        if !self.needs_materialization() {
            debug!("Dataset already materialized, leaving {:?} as-is", self.path);
            return Ok(false);
        }

        info!("Materializing text for {} records", self.records.len());
        for record in &mut self.records {
            let text = extractor.extract(&record.ruta)?;
            record.texto = Some(text);
        }

        self.save()?;
        Ok(true)
    }

    /// Overwrite the backing CSV with the current records.
    pub fn save(&self) -> Result<(), DatasetError> {
        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|e| DatasetError::Malformed(e.to_string()))?;
        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| DatasetError::Malformed(e.to_string()))?;
        }
        writer.flush()?;
        debug!("Wrote {} records to {:?}", self.records.len(), self.path);
        Ok(())
    }

    /// The text of every record, in order. Unmaterialized records yield "".
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.texto.as_deref().unwrap_or(""))
            .collect()
    }

    /// The label of every record, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.etiqueta.as_str()).collect()
    }
}
