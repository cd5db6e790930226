//! Extraction orchestrator for a single file.
//!
//! Walks every `invocation_expression` in document order exactly once:
//!
//! ```text
//! call ──resolve──> MethodDescriptor ──classify──> TranslationShape
//!                                                        │
//!      correlate(line) ──suppressed?──> skip             │
//!                      └─note──> extract_arguments ──────┴──> FileExtraction
//! ```
//!
//! Nothing here is fallible: a call that cannot be resolved, classified or
//! extracted is skipped and logged at debug level.

use std::path::Path;

use anyhow::Result;

use crate::core::collect::{CommentCollector, CommentIndex};
use crate::core::data::{FileExtraction, MessageEntry, PluralEntry};
use crate::core::extract::{CallSite, CommentCorrelator, classify, extract_arguments};
use crate::core::parsers::csharp::{ParsedSource, Preorder, parse_csharp_file, parse_csharp_source};
use crate::core::semantic::{ProjectIndex, SemanticModel, SyntacticModel};

/// Extracts translatable strings from one parsed file.
pub struct FileExtractor<'tree, M> {
    parsed: &'tree ParsedSource,
    model: M,
    comments: CommentIndex,
}

impl<'tree> FileExtractor<'tree, SyntacticModel<'tree>> {
    /// Extractor backed by the built-in syntactic model.
    pub fn new(parsed: &'tree ParsedSource) -> Self {
        Self::with_model(parsed, SyntacticModel::new(parsed))
    }

    /// Extractor that also sees the types declared in other files.
    pub fn with_project(parsed: &'tree ParsedSource, project: &'tree ProjectIndex) -> Self {
        Self::with_model(parsed, SyntacticModel::with_project(parsed, project))
    }
}

impl<'tree, M> FileExtractor<'tree, M>
where
    M: SemanticModel<'tree>,
{
    pub fn with_model(parsed: &'tree ParsedSource, model: M) -> Self {
        Self {
            parsed,
            model,
            comments: CommentCollector::collect(parsed),
        }
    }

    pub fn extract(&self) -> FileExtraction {
        let correlator = CommentCorrelator::new(&self.comments);
        let mut extraction = FileExtraction::default();

        for node in Preorder::new(self.parsed.root()) {
            if node.kind() != "invocation_expression" {
                continue;
            }
            let Some(call) = CallSite::from_node(self.parsed, node) else {
                continue;
            };
            let Some(method) = self.model.resolve_call(node) else {
                continue;
            };
            let Some(shape) = classify(&call, &method) else {
                continue;
            };

            let correlation = correlator.correlate(call.line);
            if correlation.suppressed {
                tracing::debug!(line = call.line, method = %method.name, "suppressed translation call");
                continue;
            }

            let Some(data) = extract_arguments(shape, &call, &self.model) else {
                tracing::debug!(
                    line = call.line,
                    method = %method.name,
                    %shape,
                    "skipped translation call with non-constant arguments"
                );
                continue;
            };

            if shape.is_contextual() {
                extraction.plurals.push(PluralEntry {
                    singular: data.singular,
                    context: data.context,
                    plural: data.plural,
                    comment: correlation.comment,
                    line: call.line,
                });
            } else {
                extraction.messages.push(MessageEntry {
                    id: data.singular,
                    comment: correlation.comment,
                    line: call.line,
                });
            }
        }

        extraction
    }
}

/// Extract translatable strings from C# source text.
pub fn extract_source(source: String) -> Result<FileExtraction> {
    let parsed = parse_csharp_source(source)?;
    Ok(FileExtractor::new(&parsed).extract())
}

/// Load, parse and extract a C# file.
pub fn extract_file(path: &Path) -> Result<FileExtraction> {
    let parsed = parse_csharp_file(path)?;
    if parsed.has_syntax_errors() {
        tracing::debug!(path = %path.display(), "file has syntax errors, extracting what parsed");
    }
    Ok(FileExtractor::new(&parsed).extract())
}
