//! Trawl - translatable string extractor for Godot C# scripts
//!
//! Trawl is a CLI tool and library that finds calls to the engine's
//! translation API (`Tr`, `TrN`, `TranslationServer.Translate`,
//! `TranslationServer.TranslatePlural`) in C# sources and collects their
//! constant message ids, contexts, plural forms and translator notes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parse, collect, extract)

pub mod cli;
pub mod config;
pub mod core;
