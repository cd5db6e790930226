//! Project-wide type index.
//!
//! A script often derives from a class declared in another file:
//!
//! ```csharp
//! // scripts/BaseCharacter.cs
//! public partial class BaseCharacter : CharacterBody2D { }
//!
//! // scripts/Player.cs
//! public partial class Player : BaseCharacter
//! {
//!     public override void _Ready() => Tr("Jump");
//! }
//! ```
//!
//! `ProjectIndex` is built once per run from the `ProjectType` summaries of
//! every file, merges the parts of partial types, and resolves each type's
//! class base up front. It is frozen afterwards and shared by all per-file
//! models.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use super::engine::{ENGINE_NAMESPACE, EngineCatalog};
use crate::core::collect::{ProjectType, TypeKind, Usings, normalize_type_name};

/// A user type merged from all of its declarations.
#[derive(Debug)]
struct IndexedType {
    kind: TypeKind,
    /// Resolved class base, if any part declares one.
    base: Option<String>,
    /// Method name -> is_static.
    methods: HashMap<String, bool>,
}

/// Read-only index of the types declared across a project.
#[derive(Debug, Default)]
pub struct ProjectIndex {
    types: HashMap<String, IndexedType>,
}

impl ProjectIndex {
    /// An index with no types, for models working on a single file.
    pub fn empty() -> &'static ProjectIndex {
        static EMPTY: LazyLock<ProjectIndex> = LazyLock::new(ProjectIndex::default);
        &EMPTY
    }

    pub fn build(declarations: Vec<ProjectType>) -> Self {
        let mut index = ProjectIndex::default();
        for decl in &declarations {
            let entry = index
                .types
                .entry(decl.full_name.clone())
                .or_insert_with(|| IndexedType {
                    kind: decl.kind,
                    base: None,
                    methods: HashMap::new(),
                });
            for (name, is_static) in &decl.methods {
                entry.methods.entry(name.clone()).or_insert(*is_static);
            }
        }

        // Names are all known now; bases can refer to any of them.
        let engine = EngineCatalog::get();
        let resolved: Vec<(String, String)> = declarations
            .iter()
            .filter_map(|decl| {
                let scopes = lookup_scopes(&decl.full_name, &decl.usings);
                let engine_in_scope = engine_in_scope(&decl.full_name, &decl.usings);
                decl.bases
                    .iter()
                    .filter_map(|raw| {
                        index.resolve_base(raw, &decl.usings, &scopes, engine_in_scope, engine)
                    })
                    .find(|base| index.is_class(base).unwrap_or(false))
                    .map(|base| (decl.full_name.clone(), base))
            })
            .collect();

        for (full_name, base) in resolved {
            if let Some(entry) = index.types.get_mut(&full_name)
                && entry.base.is_none()
            {
                entry.base = Some(base);
            }
        }
        index
    }

    fn resolve_base(
        &self,
        raw: &str,
        usings: &Usings,
        scopes: &[String],
        engine_in_scope: bool,
        engine: &EngineCatalog,
    ) -> Option<String> {
        let name = apply_alias(&normalize_type_name(raw), usings);
        if name.is_empty() {
            return None;
        }
        if let Some(found) = self.resolve(&name, scopes) {
            return Some(found);
        }
        if engine.contains(&name) {
            return Some(name);
        }
        let qualified = format!("{}.{}", ENGINE_NAMESPACE, name);
        (engine_in_scope && engine.contains(&qualified)).then_some(qualified)
    }

    /// Resolve a type reference against the project, trying each scope
    /// prefix in order and finally the name as written.
    pub fn resolve(&self, name: &str, scopes: &[String]) -> Option<String> {
        scopes
            .iter()
            .map(|scope| format!("{}.{}", scope, name))
            .find(|candidate| self.types.contains_key(candidate))
            .or_else(|| self.types.contains_key(name).then(|| name.to_string()))
    }

    /// Whether `full_name` is a class-like type; `None` when the type is unknown.
    pub fn is_class(&self, full_name: &str) -> Option<bool> {
        if let Some(ty) = self.types.get(full_name) {
            return Some(ty.kind != TypeKind::Interface);
        }
        EngineCatalog::get().contains(full_name).then_some(true)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.types.contains_key(full_name)
    }

    /// Resolved class base of a project type.
    pub fn base_of(&self, full_name: &str) -> Option<&str> {
        self.types.get(full_name)?.base.as_deref()
    }

    /// A method declared on any part of `full_name`: its `is_static` flag.
    pub fn method(&self, full_name: &str, name: &str) -> Option<bool> {
        self.types.get(full_name)?.methods.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Namespaces a reference inside `full_name` is looked up in, innermost
/// first: the enclosing namespaces and types, then the file's usings.
pub fn lookup_scopes(full_name: &str, usings: &Usings) -> Vec<String> {
    let mut scopes = Vec::new();
    let mut seen = HashSet::new();
    let mut current = full_name;
    while let Some((outer, _)) = current.rsplit_once('.') {
        if seen.insert(outer.to_string()) {
            scopes.push(outer.to_string());
        }
        current = outer;
    }
    for ns in &usings.namespaces {
        if seen.insert(ns.clone()) {
            scopes.push(ns.clone());
        }
    }
    scopes
}

/// Engine types may be named unqualified under `using Godot;` or inside the
/// engine namespace.
pub fn engine_in_scope(full_name: &str, usings: &Usings) -> bool {
    usings.namespaces.iter().any(|ns| ns == ENGINE_NAMESPACE)
        || full_name.starts_with(&format!("{}.", ENGINE_NAMESPACE))
}

/// Substitute a `using X = ...;` alias at the head of `name`.
pub fn apply_alias(name: &str, usings: &Usings) -> String {
    match name.split_once('.') {
        Some((head, tail)) => match usings.aliases.get(head) {
            Some(target) => format!("{}.{}", target, tail),
            None => name.to_string(),
        },
        None => usings
            .aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string()),
    }
}
