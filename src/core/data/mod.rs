//! Core data types produced by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `message`: Extraction output types (TranslationShape, MessageEntry, PluralEntry, FileExtraction)

pub mod message;

pub use message::{FileExtraction, MessageEntry, PluralEntry, TranslationShape};
