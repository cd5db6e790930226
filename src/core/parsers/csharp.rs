use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Node, Parser, Tree, TreeCursor};

/// File extensions recognized as C# scripts.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["cs"];

/// A parsed C# compilation unit.
///
/// Owns both the source text and the tree so that nodes can be resolved
/// back to text for as long as the parse lives.
pub struct ParsedSource {
    pub source: String,
    pub tree: Tree,
}

impl ParsedSource {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by a node of this tree.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// Returns true if tree-sitter had to recover from syntax errors.
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Pre-order (document order) traversal over a subtree.
///
/// Uses a tree cursor instead of recursion so deeply nested expressions
/// cannot overflow the stack.
pub struct Preorder<'tree> {
    cursor: TreeCursor<'tree>,
    done: bool,
}

impl<'tree> Preorder<'tree> {
    pub fn new(node: Node<'tree>) -> Self {
        Self {
            cursor: node.walk(),
            done: false,
        }
    }
}

impl<'tree> Iterator for Preorder<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.cursor.node();
        if self.cursor.goto_first_child() {
            return Some(node);
        }
        loop {
            if self.cursor.goto_next_sibling() {
                return Some(node);
            }
            if !self.cursor.goto_parent() {
                self.done = true;
                return Some(node);
            }
        }
    }
}

/// 1-indexed line on which a node starts.
pub fn start_line(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

/// 1-indexed line on which a node ends.
pub fn end_line(node: Node<'_>) -> usize {
    node.end_position().row + 1
}

/// Returns true if the path has a recognized C# extension.
pub fn is_csharp_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext))
}

/// Resolve a file path to its source text.
pub fn load_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Parse C# source text into a syntax tree.
///
/// tree-sitter recovers from syntax errors, so this only fails when the
/// grammar cannot be loaded or parsing is aborted.
pub fn parse_csharp_source(source: String) -> Result<ParsedSource> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
        .map_err(|e| anyhow!("Failed to load C# grammar: {}", e))?;

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| anyhow!("Failed to parse C# source"))?;

    Ok(ParsedSource { source, tree })
}

/// Load and parse a C# file.
pub fn parse_csharp_file(path: &Path) -> Result<ParsedSource> {
    let source = load_source(path)?;
    parse_csharp_source(source).with_context(|| format!("Failed to parse {}", path.display()))
}
