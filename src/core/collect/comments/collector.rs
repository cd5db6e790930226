//! Comment collector.
//!
//! Walks the syntax tree once and records every comment together with its
//! line span. A comment is *own-line* when no real syntax node begins on the
//! line where the comment starts:
//!
//! ```csharp
//! // own-line comment
//! Tr("Start"); // trailing comment, not own-line
//! /* not own-line either */ Tr("Quit");
//! ```
//!
//! Only own-line comments take part in the upward note scan; trailing ones
//! are only matched against the call on their own line.

use std::collections::HashSet;

use crate::core::collect::types::{CommentIndex, CommentRecord};
use crate::core::parsers::csharp::{ParsedSource, Preorder, end_line, start_line};

/// Collects all comments from a parsed file.
pub struct CommentCollector;

impl CommentCollector {
    /// Build the comment index of a parsed file in a single traversal.
    pub fn collect(parsed: &ParsedSource) -> CommentIndex {
        let mut comments = Vec::new();
        let mut code_lines: HashSet<usize> = HashSet::new();

        for node in Preorder::new(parsed.root()) {
            if node.kind() == "comment" {
                comments.push(node);
            } else if node.child_count() == 0 && !node.is_missing() && node.byte_range().len() > 0
            {
                // Only leaf tokens count: a parent node "begins" where its
                // first token does, which may itself be a comment.
                code_lines.insert(start_line(node));
            }
        }

        let records = comments
            .into_iter()
            .map(|node| {
                let start = start_line(node);
                CommentRecord {
                    text: parsed.text(node).to_string(),
                    start_line: start,
                    end_line: end_line(node),
                    is_own_line: !code_lines.contains(&start),
                }
            })
            .collect();

        CommentIndex::new(records)
    }
}
