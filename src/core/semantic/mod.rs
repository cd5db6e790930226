//! Semantic model - resolving calls to method symbols and expressions to constants.
//!
//! The extraction pipeline only needs two questions answered about a
//! compilation unit, captured by the [`SemanticModel`] trait:
//!
//! 1. Which method does this call expression bind to?
//! 2. Is this expression a compile-time string constant, and if so, what is it?
//!
//! [`SyntacticModel`] answers both from the file's own syntax tree, the
//! run's [`ProjectIndex`] and the shared [`EngineCatalog`]. Any other
//! backend (a full compiler, a language server) can be plugged in by
//! implementing the trait.
//!
//! ## Module Structure
//!
//! - `engine`: Engine type catalog (Godot class hierarchy, lazily built)
//! - `literals`: String literal decoding
//! - `project`: Types declared across all files of a run
//! - `syntactic`: Tree-sitter based SemanticModel implementation

pub mod engine;
pub mod literals;
pub mod project;
pub mod syntactic;

use tree_sitter::Node;

pub use engine::{ENGINE_OBJECT_TYPE, EngineCatalog, TRANSLATION_SERVER_TYPE};
pub use project::ProjectIndex;
pub use syntactic::SyntacticModel;

/// Kind of method a call resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// A regular named method.
    Ordinary,
    /// A user-defined operator or conversion.
    Operator,
}

/// The method symbol a call expression binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    /// Fully qualified type declaring the method.
    pub declaring_type: String,
    /// Fully qualified type of the instance the method is invoked on.
    /// `None` for static calls.
    pub receiver_type: Option<String>,
    /// Base types of the receiver type (or of the declaring type when there
    /// is no receiver), from the immediate base to the root.
    pub base_type_chain: Vec<String>,
    pub is_static: bool,
    pub kind: MethodKind,
}

impl MethodDescriptor {
    /// Returns true if the receiver type (or declaring type when there is no
    /// receiver) is `type_name` or transitively derives from it.
    pub fn derives_from(&self, type_name: &str) -> bool {
        let own = self.receiver_type.as_deref().unwrap_or(&self.declaring_type);
        own == type_name || self.base_type_chain.iter().any(|t| t == type_name)
    }
}

/// Capability the extractor needs from a syntax/semantic backend.
pub trait SemanticModel<'tree> {
    /// Resolve an `invocation_expression` to the method it calls.
    ///
    /// Returns `None` when the symbol cannot be resolved.
    fn resolve_call(&self, call: Node<'tree>) -> Option<MethodDescriptor>;

    /// Evaluate an expression as a compile-time string constant.
    ///
    /// Returns `None` for anything that is not a string constant.
    fn constant_string(&self, expr: Node<'tree>) -> Option<String>;
}
