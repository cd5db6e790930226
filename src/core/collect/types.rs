//! Type definitions for the collection phase.
//!
//! Everything here is built once per parsed file by `CommentCollector` and
//! `RegistryCollector`, and is read-only afterwards. `ProjectType` is the
//! owned subset of a `TypeDecl` that outlives its tree.

use std::collections::HashMap;

use tree_sitter::Node;

// ============================================================
// Comments
// ============================================================

/// A single comment (`// ...` or `/* ... */`) found in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    /// Raw comment text including its delimiters.
    pub text: String,
    /// Line where the comment starts (1-indexed).
    pub start_line: usize,
    /// Line where the comment ends (1-indexed).
    pub end_line: usize,
    /// True when no real (non-comment) syntax node begins on `start_line`,
    /// i.e. the comment is not trailing code on the same line.
    pub is_own_line: bool,
}

impl CommentRecord {
    /// Returns true for a block comment spanning more than one line.
    pub fn is_multiline(&self) -> bool {
        self.start_line != self.end_line
    }
}

/// Line-addressable index over all comments of a file.
///
/// Lookups go through two line maps so that correlating a call site never
/// rescans the file.
#[derive(Debug, Default)]
pub struct CommentIndex {
    records: Vec<CommentRecord>,
    /// Start line -> last record starting on that line.
    by_start_line: HashMap<usize, usize>,
    /// End line -> last own-line record ending on that line.
    own_line_by_end_line: HashMap<usize, usize>,
}

impl CommentIndex {
    /// Build the index from records given in document order.
    pub fn new(records: Vec<CommentRecord>) -> Self {
        let mut by_start_line = HashMap::new();
        let mut own_line_by_end_line = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            by_start_line.insert(record.start_line, idx);
            if record.is_own_line {
                own_line_by_end_line.insert(record.end_line, idx);
            }
        }

        Self {
            records,
            by_start_line,
            own_line_by_end_line,
        }
    }

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The rightmost comment starting on `line`, own-line or not.
    pub fn starting_on(&self, line: usize) -> Option<&CommentRecord> {
        self.by_start_line.get(&line).map(|&idx| &self.records[idx])
    }

    /// The rightmost own-line comment ending on `line`.
    pub fn own_line_ending_on(&self, line: usize) -> Option<&CommentRecord> {
        self.own_line_by_end_line
            .get(&line)
            .map(|&idx| &self.records[idx])
    }
}

// ============================================================
// Declarations
// ============================================================

/// Kind of a user-declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Record,
    Interface,
}

impl TypeKind {
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(TypeKind::Class),
            "struct_declaration" => Some(TypeKind::Struct),
            "record_declaration" | "record_struct_declaration" => Some(TypeKind::Record),
            "interface_declaration" => Some(TypeKind::Interface),
            _ => None,
        }
    }
}

/// A type declared in the parsed file.
#[derive(Debug, Clone)]
pub struct TypeDecl<'tree> {
    /// Declaration node (e.g. `class_declaration`).
    pub node: Node<'tree>,
    pub kind: TypeKind,
    /// Simple name (e.g. "Player").
    pub name: String,
    /// Namespace- and outer-type-qualified name (e.g. "MyGame.Actors.Player").
    pub full_name: String,
    /// Base list entries as written, generic arguments stripped.
    pub bases: Vec<String>,
}

/// Owned summary of a type declaration, kept after its file's tree is gone.
///
/// Produced for every file of a run so that types can be resolved across
/// files. Each part of a `partial` type yields its own summary.
#[derive(Debug, Clone)]
pub struct ProjectType {
    pub kind: TypeKind,
    pub full_name: String,
    /// Base list entries as written, generic arguments stripped.
    pub bases: Vec<String>,
    /// Methods declared in this part: (name, is_static).
    pub methods: Vec<(String, bool)>,
    /// `using` directives of the declaring file.
    pub usings: Usings,
}

/// Normalize a type reference as written in source.
///
/// Drops `global::`, whitespace, generic arguments, primary-constructor
/// arguments and nullable markers: `global::Godot.Node<T>?` -> `Godot.Node`.
pub fn normalize_type_name(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let name = compact.strip_prefix("global::").unwrap_or(&compact);
    let end = name.find(['<', '(', '?', '[']).unwrap_or(name.len());
    name[..end].to_string()
}

/// `using` directives of the file.
#[derive(Debug, Clone, Default)]
pub struct Usings {
    /// Imported namespaces (`using Godot;`).
    pub namespaces: Vec<String>,
    /// Types whose static members are imported (`using static Godot.TranslationServer;`).
    pub static_types: Vec<String>,
    /// Aliases (`using TS = Godot.TranslationServer;`).
    pub aliases: HashMap<String, String>,
}

/// All declarations of a single file that the semantic model needs.
#[derive(Debug, Default)]
pub struct TypeRegistry<'tree> {
    pub types: Vec<TypeDecl<'tree>>,
    pub usings: Usings,
    /// Namespace of a file-scoped `namespace X;` declaration.
    pub file_namespace: Option<String>,
}

impl<'tree> TypeRegistry<'tree> {
    /// Find a declared type by its fully qualified name.
    pub fn by_full_name(&self, full_name: &str) -> Option<&TypeDecl<'tree>> {
        self.types.iter().find(|t| t.full_name == full_name)
    }

    /// Find a declared type by the name it is referenced with.
    ///
    /// Accepts simple names ("Player") as well as partially or fully
    /// qualified ones ("Actors.Player", "MyGame.Actors.Player").
    pub fn by_reference(&self, name: &str) -> Option<&TypeDecl<'tree>> {
        self.by_full_name(name).or_else(|| {
            let suffix = format!(".{}", name);
            self.types
                .iter()
                .find(|t| t.name == name || t.full_name.ends_with(&suffix))
        })
    }

    /// Find the declared type whose declaration node is `node`.
    pub fn by_node(&self, node: Node<'tree>) -> Option<&TypeDecl<'tree>> {
        self.types.iter().find(|t| t.node.id() == node.id())
    }
}
