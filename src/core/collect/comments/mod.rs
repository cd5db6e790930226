//! Comment collection.
//!
//! Builds the per-file `CommentIndex` used to correlate translator notes and
//! `NO_TRANSLATE` markers with call sites.
//!
//! ## Module Structure
//!
//! - `collector`: CommentCollector implementation

pub mod collector;
