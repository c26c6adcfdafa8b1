//! # cvscreen-extract
//!
//! Text extraction from resume PDFs for the cvscreen pipeline.
//!
//! [`PdfExtractor`] implements the
//! [`TextExtractor`](cvscreen_core::TextExtractor) seam: it reads every
//! page's extractable text and concatenates it into a single string for
//! downstream vectorization. Text-only extraction; no OCR, no layout
//! analysis.

pub mod pdf;

pub use pdf::PdfExtractor;
