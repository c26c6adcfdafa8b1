//! # cvscreen-triage
//!
//! Coordination layer of the cvscreen pipeline: the [`Trainer`] drives
//! dataset materialization and pipeline fitting, the [`Predictor`] drives
//! extraction and classification of a single resume, and the decision rule
//! turns per-class probabilities into an automated screening decision.

pub mod decision;
pub mod predictor;
pub mod trainer;

pub use decision::{decide, Decision, DecisionThresholds, ALTO_LABEL, BAJO_LABEL};
pub use predictor::{PredictReport, Predictor};
pub use trainer::Trainer;
