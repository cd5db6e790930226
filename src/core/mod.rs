//! Core extraction engine.
//!
//! ## Pipeline
//!
//! For every C# file:
//!
//! 1. **Parse** (`parsers`): source text to a tree-sitter syntax tree
//! 2. **Collect** (`collect`): comment index and type/using registry
//! 3. **Extract** (`extract`): resolve calls through the `semantic` model,
//!    classify them, correlate translator notes, pull constant arguments
//!
//! `context` scans the files, parses them all, and builds one project-wide
//! type index from their declarations. Step 3 then runs on each file in
//! parallel against that index.
//!
//! ## Module Structure
//!
//! - `collect`: Phase 1 - comments and declarations
//! - `context`: Per-run configuration and parallel extraction
//! - `data`: Output types
//! - `extract`: Phase 2 - per-call classification and extraction
//! - `file_scanner`: C# file discovery
//! - `parsers`: tree-sitter C# parsing
//! - `semantic`: Call and constant resolution

pub mod collect;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod semantic;

pub use context::{ExtractContext, ExtractedFile, ExtractionRun, FailedFile};
pub use data::{FileExtraction, MessageEntry, PluralEntry, TranslationShape};
pub use extract::{FileExtractor, extract_file, extract_source};
