//! Source file parsers.
//!
//! - `csharp`: C# source loading and parsing (uses tree-sitter for the syntax tree)

pub mod csharp;
