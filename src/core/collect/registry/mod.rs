//! Registry collection - Type declarations and `using` directives.
//!
//! The `RegistryCollector` gathers, in a single pass over the tree, what the
//! semantic model needs to resolve a call's receiver and method:
//!
//! - every class/struct/record/interface with its qualified name and base list
//! - `using` namespaces, `using static` types and `using` aliases
//! - a file-scoped namespace, if any
//!
//! Members (methods, fields, constants) are not copied out; the semantic
//! model reads them straight from the declaration nodes on demand.
//! `summarize` is the exception: it copies names, bases and method
//! signatures into owned `ProjectType`s for cross-file resolution.

use tree_sitter::Node;

use crate::core::collect::types::{
    ProjectType, TypeDecl, TypeKind, TypeRegistry, Usings, normalize_type_name,
};
use crate::core::parsers::csharp::{ParsedSource, Preorder};

/// Collects type declarations and usings from a parsed file.
pub struct RegistryCollector;

impl RegistryCollector {
    pub fn collect(parsed: &ParsedSource) -> TypeRegistry<'_> {
        let mut registry = TypeRegistry::default();

        for node in Preorder::new(parsed.root()) {
            match node.kind() {
                "using_directive" => Self::collect_using(parsed.text(node), &mut registry.usings),
                "file_scoped_namespace_declaration" => {
                    registry.file_namespace = node
                        .child_by_field_name("name")
                        .map(|name| normalize_type_name(parsed.text(name)));
                }
                kind => {
                    if let Some(type_kind) = TypeKind::from_node_kind(kind)
                        && let Some(decl) = Self::type_decl(
                            parsed,
                            node,
                            type_kind,
                            registry.file_namespace.as_deref(),
                        )
                    {
                        registry.types.push(decl);
                    }
                }
            }
        }

        registry
    }

    /// Owned summaries of every type declared in the file.
    pub fn summarize(parsed: &ParsedSource) -> Vec<ProjectType> {
        let registry = Self::collect(parsed);
        registry
            .types
            .iter()
            .map(|decl| ProjectType {
                kind: decl.kind,
                full_name: decl.full_name.clone(),
                bases: decl.bases.clone(),
                methods: Self::methods(parsed, decl.node),
                usings: registry.usings.clone(),
            })
            .collect()
    }

    /// Methods declared directly in a type body: (name, is_static).
    fn methods(parsed: &ParsedSource, node: Node<'_>) -> Vec<(String, bool)> {
        let mut cursor = node.walk();
        let body = node.child_by_field_name("body").or_else(|| {
            node.named_children(&mut cursor)
                .find(|c| c.kind() == "declaration_list")
        });
        let Some(body) = body else {
            return Vec::new();
        };
        let mut cursor = body.walk();
        body.named_children(&mut cursor)
            .filter(|member| member.kind() == "method_declaration")
            .filter_map(|member| {
                let name = parsed.text(member.child_by_field_name("name")?).to_string();
                let mut modifiers = member.walk();
                let is_static = member
                    .children(&mut modifiers)
                    .any(|c| c.kind() == "modifier" && parsed.text(c) == "static");
                Some((name, is_static))
            })
            .collect()
    }

    fn type_decl<'tree>(
        parsed: &'tree ParsedSource,
        node: Node<'tree>,
        kind: TypeKind,
        file_namespace: Option<&str>,
    ) -> Option<TypeDecl<'tree>> {
        let name = parsed.text(node.child_by_field_name("name")?).to_string();

        let mut cursor = node.walk();
        let bases = node
            .children(&mut cursor)
            .find(|c| c.kind() == "base_list")
            .map(|base_list| {
                let mut base_cursor = base_list.walk();
                base_list
                    .named_children(&mut base_cursor)
                    .filter(|c| c.kind() != "comment")
                    .map(|c| normalize_type_name(parsed.text(c)))
                    .filter(|b| !b.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let full_name = Self::qualified_name(parsed, node, &name, file_namespace);

        Some(TypeDecl {
            node,
            kind,
            name,
            full_name,
            bases,
        })
    }

    /// Qualify a type name with its enclosing types and namespaces.
    fn qualified_name(
        parsed: &ParsedSource,
        node: Node<'_>,
        name: &str,
        file_namespace: Option<&str>,
    ) -> String {
        let mut segments = vec![name.to_string()];
        let mut in_file_namespace = false;
        let mut current = node.parent();

        while let Some(ancestor) = current {
            let kind = ancestor.kind();
            if kind == "file_scoped_namespace_declaration" {
                in_file_namespace = true;
            }
            if (kind == "namespace_declaration"
                || kind == "file_scoped_namespace_declaration"
                || TypeKind::from_node_kind(kind).is_some())
                && let Some(name_node) = ancestor.child_by_field_name("name")
            {
                segments.push(normalize_type_name(parsed.text(name_node)));
            }
            current = ancestor.parent();
        }

        if !in_file_namespace && let Some(ns) = file_namespace {
            segments.push(ns.to_string());
        }

        segments.reverse();
        segments.join(".")
    }

    fn collect_using(text: &str, usings: &mut Usings) {
        let text = text.trim().trim_end_matches(';').trim();
        let text = text
            .strip_prefix("global ")
            .map(str::trim_start)
            .unwrap_or(text);
        let Some(rest) = text.strip_prefix("using") else {
            return;
        };
        let rest = rest.trim();

        if let Some(target) = rest.strip_prefix("static ") {
            usings.static_types.push(normalize_type_name(target));
        } else if let Some((alias, target)) = rest.split_once('=') {
            usings
                .aliases
                .insert(alias.trim().to_string(), normalize_type_name(target));
        } else if !rest.is_empty() {
            usings.namespaces.push(normalize_type_name(rest));
        }
    }
}
