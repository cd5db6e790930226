//! Phase 1: Collection - Comments and declarations.
//!
//! This module handles the first phase of the extraction pipeline:
//! - Collecting every comment with its line span (for translator notes and suppression)
//! - Collecting type declarations and `using` directives (for call resolution)
//!
//! Both are gathered from the parsed tree once per file and are read-only
//! during Phase 2 (Extraction).

pub mod comments;
pub mod registry;
pub mod types;

pub use comments::collector::CommentCollector;
pub use registry::RegistryCollector;
pub use types::*;
