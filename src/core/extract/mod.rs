//! Extraction - per-file translation call discovery.
//!
//! This module turns one parsed file into a [`FileExtraction`]:
//!
//! 1. `FileExtractor` walks every invocation in document order
//! 2. the semantic model resolves the invoked method
//! 3. `classifier` decides whether it is a translation call and its shape
//! 4. `correlator` finds the translator note (or a suppression marker)
//! 5. `arguments` pulls the constant strings out of the argument list
//!
//! Every per-call failure is a silent skip; only loading and parsing errors
//! reach the caller.
//!
//! [`FileExtraction`]: crate::core::data::FileExtraction

pub mod arguments;
pub mod classifier;
pub mod correlator;
pub mod file_extractor;

use tree_sitter::Node;

use crate::core::parsers::csharp::{ParsedSource, start_line};

pub use arguments::{ExtractedData, extract_arguments};
pub use classifier::classify;
pub use correlator::{CommentCorrelator, Correlation};
pub use file_extractor::{FileExtractor, extract_file, extract_source};

/// One argument of a call: `name: value` or just `value`.
#[derive(Debug, Clone, Copy)]
pub struct Argument<'tree> {
    pub name: Option<&'tree str>,
    pub value: Node<'tree>,
}

/// An invocation expression with its arguments split out.
#[derive(Debug, Clone)]
pub struct CallSite<'tree> {
    pub node: Node<'tree>,
    pub arguments: Vec<Argument<'tree>>,
    /// 1-indexed line the call expression starts on.
    pub line: usize,
}

impl<'tree> CallSite<'tree> {
    /// Build a call site from an `invocation_expression` node.
    pub fn from_node(parsed: &'tree ParsedSource, node: Node<'tree>) -> Option<Self> {
        let argument_list = node.child_by_field_name("arguments")?;

        let mut cursor = argument_list.walk();
        let arguments = argument_list
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "argument")
            .filter_map(|arg| Self::argument(parsed, arg))
            .collect();

        Some(Self {
            node,
            arguments,
            line: start_line(node),
        })
    }

    fn argument(parsed: &'tree ParsedSource, arg: Node<'tree>) -> Option<Argument<'tree>> {
        let mut name = None;
        let mut value = None;

        let mut cursor = arg.walk();
        for child in arg.named_children(&mut cursor) {
            match child.kind() {
                "name_colon" => {
                    let mut inner = child.walk();
                    name = child
                        .named_children(&mut inner)
                        .find(|c| c.kind() == "identifier")
                        .map(|ident| parsed.text(ident));
                }
                "comment" => {}
                _ => value = Some(child),
            }
        }

        Some(Argument {
            name,
            value: value?,
        })
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}
