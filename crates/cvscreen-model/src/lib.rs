//! # cvscreen-model
//!
//! The statistical half of the cvscreen pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TfidfVectorizer`] | Unigram+bigram TF-IDF text vectorizer |
//! | [`OneVsRestLogistic`] | One-vs-rest logistic regression classifier |
//! | [`TextPipeline`] | Fitted vectorizer + classifier, persisted as one JSON artifact |
//!
//! Both components implement the seams from `cvscreen-core`
//! ([`Vectorizer`](cvscreen_core::Vectorizer) and
//! [`Classifier`](cvscreen_core::Classifier)), and [`TextPipeline`] bundles
//! fitted instances of each so they can only ever be saved and loaded as a
//! unit. The artifact is overwritten wholesale on retraining; there is no
//! versioning and no cross-version compatibility guarantee.

pub mod logistic;
pub mod pipeline;
pub mod tfidf;

pub use logistic::{LogisticParams, OneVsRestLogistic};
pub use pipeline::{PipelineParams, TextPipeline};
pub use tfidf::TfidfVectorizer;
