//! Tree-sitter based semantic model.
//!
//! Resolves calls using what one file declares, the project-wide type index
//! and the engine catalog:
//!
//! ```csharp
//! using Godot;
//!
//! public partial class Menu : Control
//! {
//!     private const string Title = "Main Menu";
//!     private Label _label;
//!
//!     public override void _Ready()
//!     {
//!         Tr(Title);                            // Menu -> Control -> ... -> GodotObject.Tr
//!         _label.TrN("apple", "apples", 3);     // field typed Label
//!         TranslationServer.Translate("Quit");  // static TranslationServer.Translate
//!     }
//! }
//! ```
//!
//! Names that cannot be tied to a known type resolve to nothing, which the
//! extractor treats as "not a translation call". Types from other files are
//! known by name, base and method signatures only, so their fields and
//! constants are not followed.

use std::collections::HashSet;

use tree_sitter::Node;

use super::engine::{ENGINE_NAMESPACE, EngineCatalog};
use super::literals;
use super::project::{ProjectIndex, apply_alias, engine_in_scope, lookup_scopes};
use super::{MethodDescriptor, MethodKind, SemanticModel};
use crate::core::collect::{RegistryCollector, TypeKind, TypeRegistry, normalize_type_name};
use crate::core::parsers::csharp::ParsedSource;

/// Nesting limit when following constants that refer to other constants.
const MAX_CONSTANT_DEPTH: usize = 16;

/// Engine methods returning an instance of their single type argument.
const GENERIC_NODE_GETTERS: &[&str] = &[
    "GetNode",
    "GetNodeOrNull",
    "GetParent",
    "GetParentOrNull",
    "GetOwner",
    "GetOwnerOrNull",
    "GetChild",
    "GetChildOrNull",
    "Instantiate",
    "InstantiateOrNull",
];

/// What a member access is performed on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Receiver {
    /// An instance of the given type.
    Instance(String),
    /// The type itself (static access).
    Static(String),
}

/// A name bound in the scope of some expression.
struct Binding<'tree> {
    /// Resolved type, when known.
    type_name: Option<String>,
    /// Initializer of a `const` declaration.
    constant: Option<Node<'tree>>,
}

/// Semantic model answering from one file's syntax tree and the project index.
pub struct SyntacticModel<'tree> {
    parsed: &'tree ParsedSource,
    registry: TypeRegistry<'tree>,
    project: &'tree ProjectIndex,
    engine: &'static EngineCatalog,
    engine_in_scope: bool,
    /// Namespaces project types are looked up in, innermost first.
    scopes: Vec<String>,
}

impl<'tree> SyntacticModel<'tree> {
    /// Model that only knows the file itself and the engine.
    pub fn new(parsed: &'tree ParsedSource) -> Self {
        Self::with_project(parsed, ProjectIndex::empty())
    }

    /// Model that also resolves types declared elsewhere in `project`.
    pub fn with_project(parsed: &'tree ParsedSource, project: &'tree ProjectIndex) -> Self {
        let registry = RegistryCollector::collect(parsed);
        let usings = &registry.usings;
        let engine_in_scope = engine_in_scope("", usings)
            || registry
                .types
                .iter()
                .any(|t| engine_in_scope(&t.full_name, usings));

        let mut scopes: Vec<String> = Vec::new();
        for scope in registry
            .types
            .iter()
            .flat_map(|t| lookup_scopes(&t.full_name, usings))
            .chain(usings.namespaces.iter().cloned())
        {
            if !scopes.contains(&scope) {
                scopes.push(scope);
            }
        }

        Self {
            parsed,
            registry,
            project,
            engine: EngineCatalog::get(),
            engine_in_scope,
            scopes,
        }
    }

    fn text(&self, node: Node<'tree>) -> &'tree str {
        self.parsed.text(node)
    }

    // ============================================================
    // Types
    // ============================================================

    /// Resolve a type reference to the fully qualified name of a known type.
    fn resolve_type(&self, raw: &str) -> Option<String> {
        let name = normalize_type_name(raw);
        if name.is_empty() {
            return None;
        }

        let name = apply_alias(&name, &self.registry.usings);

        if let Some(decl) = self.registry.by_reference(&name) {
            return Some(decl.full_name.clone());
        }
        if let Some(full_name) = self.project.resolve(&name, &self.scopes) {
            return Some(full_name);
        }
        if self.engine.contains(&name) {
            return Some(name);
        }
        if self.engine_in_scope {
            let qualified = format!("{}.{}", ENGINE_NAMESPACE, name);
            if self.engine.contains(&qualified) {
                return Some(qualified);
            }
        }
        None
    }

    fn is_class(&self, full_name: &str) -> bool {
        match self.registry.by_full_name(full_name) {
            Some(decl) => decl.kind != TypeKind::Interface,
            None => self.project.is_class(full_name).unwrap_or(false),
        }
    }

    /// Class base of `full_name`. A partial part without a base list defers
    /// to the parts declared in other files.
    fn direct_base(&self, full_name: &str) -> Option<String> {
        if let Some(decl) = self.registry.by_full_name(full_name) {
            let local = decl
                .bases
                .iter()
                .filter_map(|base| self.resolve_type(base))
                .find(|base| self.is_class(base));
            if local.is_some() {
                return local;
            }
        }
        if let Some(base) = self.project.base_of(full_name) {
            return Some(base.to_string());
        }
        self.engine.base_of(full_name)
    }

    /// Base types of `full_name`, from the immediate base to the root.
    fn base_chain(&self, full_name: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([full_name.to_string()]);
        let mut current = full_name.to_string();

        while let Some(base) = self.direct_base(&current) {
            if !seen.insert(base.clone()) {
                break;
            }
            chain.push(base.clone());
            current = base;
        }
        chain
    }

    /// `full_name` followed by its base chain.
    fn type_and_bases(&self, full_name: &str) -> Vec<String> {
        let mut types = vec![full_name.to_string()];
        types.extend(self.base_chain(full_name));
        types
    }

    /// Fully qualified name of the innermost type declaration containing `node`.
    fn enclosing_type(&self, node: Node<'tree>) -> Option<String> {
        let mut current = node.parent();
        while let Some(ancestor) = current {
            if TypeKind::from_node_kind(ancestor.kind()).is_some() {
                return self
                    .registry
                    .by_node(ancestor)
                    .map(|decl| decl.full_name.clone());
            }
            current = ancestor.parent();
        }
        None
    }

    /// Member declarations of a user-declared type.
    fn type_members(&self, full_name: &str) -> Vec<Node<'tree>> {
        let Some(decl) = self.registry.by_full_name(full_name) else {
            return Vec::new();
        };
        let Some(body) = field_or_kind(decl.node, "body", "declaration_list") else {
            return Vec::new();
        };
        let mut cursor = body.walk();
        body.named_children(&mut cursor).collect()
    }

    // ============================================================
    // Methods
    // ============================================================

    /// A method declared directly on `full_name`: (is_static, kind).
    fn declared_method(&self, full_name: &str, name: &str) -> Option<(bool, MethodKind)> {
        let local = self
            .type_members(full_name)
            .into_iter()
            .filter(|member| member.kind() == "method_declaration")
            .find(|member| {
                member
                    .child_by_field_name("name")
                    .is_some_and(|n| self.text(n) == name)
            })
            .map(|member| self.has_modifier(member, "static"));
        if let Some(is_static) = local.or_else(|| self.project.method(full_name, name)) {
            return Some((is_static, MethodKind::Ordinary));
        }
        if self.registry.by_full_name(full_name).is_some() || self.project.contains(full_name) {
            return None;
        }
        self.engine
            .method(full_name, name)
            .map(|m| (m.is_static, MethodKind::Ordinary))
    }

    /// Look `name` up on `full_name` and its bases: (declaring type, is_static, kind).
    fn find_method(&self, full_name: &str, name: &str) -> Option<(String, bool, MethodKind)> {
        self.type_and_bases(full_name)
            .into_iter()
            .find_map(|ty| {
                self.declared_method(&ty, name)
                    .map(|(is_static, kind)| (ty, is_static, kind))
            })
    }

    fn bind(&self, receiver: &Receiver, name: &str) -> Option<MethodDescriptor> {
        let (receiver_type, on_instance) = match receiver {
            Receiver::Instance(ty) => (ty, true),
            Receiver::Static(ty) => (ty, false),
        };
        let (declaring_type, is_static, kind) = self.find_method(receiver_type, name)?;

        if !on_instance && !is_static {
            // instance method accessed through a type name does not bind
            return None;
        }

        let receiver_type = (!is_static).then(|| receiver_type.clone());
        let base_type_chain = self.base_chain(receiver_type.as_deref().unwrap_or(&declaring_type));

        Some(MethodDescriptor {
            name: name.to_string(),
            declaring_type,
            receiver_type,
            base_type_chain,
            is_static,
            kind,
        })
    }

    // ============================================================
    // Receivers
    // ============================================================

    fn receiver_of(&self, expr: Node<'tree>) -> Option<Receiver> {
        match expr.kind() {
            "this_expression" | "this" => self.enclosing_type(expr).map(Receiver::Instance),
            "base_expression" | "base" => {
                let own = self.enclosing_type(expr)?;
                self.direct_base(&own).map(Receiver::Instance)
            }
            "identifier" => {
                let name = self.text(expr);
                match self.lookup(name, expr) {
                    Some(binding) => binding.type_name.map(Receiver::Instance),
                    None => self.resolve_type(name).map(Receiver::Static),
                }
            }
            "member_access_expression" => {
                let inner = expr.child_by_field_name("expression")?;
                let member = self.text(expr.child_by_field_name("name")?);
                let via_member = match self.receiver_of(inner) {
                    Some(Receiver::Instance(ty) | Receiver::Static(ty)) => {
                        self.member_type(&ty, member).map(Receiver::Instance)
                    }
                    None => None,
                };
                via_member.or_else(|| self.resolve_type(self.text(expr)).map(Receiver::Static))
            }
            "qualified_name" | "alias_qualified_name" => {
                self.resolve_type(self.text(expr)).map(Receiver::Static)
            }
            "parenthesized_expression" => self.receiver_of(first_named_child(expr)?),
            _ => self.expression_type(expr).map(Receiver::Instance),
        }
    }

    /// Static type of expressions that name their type explicitly.
    fn expression_type(&self, expr: Node<'tree>) -> Option<String> {
        match expr.kind() {
            "object_creation_expression" | "cast_expression" => {
                self.resolve_type(self.text(expr.child_by_field_name("type")?))
            }
            "as_expression" => {
                let ty = expr
                    .child_by_field_name("right")
                    .or_else(|| last_named_child(expr))?;
                self.resolve_type(self.text(ty))
            }
            "parenthesized_expression" => self.expression_type(first_named_child(expr)?),
            "invocation_expression" => self.generic_getter_type(expr),
            _ => None,
        }
    }

    /// `GetNode<Label>("Title")` is a `Label`.
    fn generic_getter_type(&self, call: Node<'tree>) -> Option<String> {
        let function = call.child_by_field_name("function")?;
        let generic = match function.kind() {
            "generic_name" => function,
            "member_access_expression" => function.child_by_field_name("name")?,
            _ => return None,
        };
        if generic.kind() != "generic_name" {
            return None;
        }
        let method = simple_name(self.parsed, generic)?;
        if !GENERIC_NODE_GETTERS.contains(&method) {
            return None;
        }

        let mut cursor = generic.walk();
        let type_args = generic
            .named_children(&mut cursor)
            .find(|c| c.kind() == "type_argument_list")?;
        let ty = first_named_child(type_args)?;
        self.resolve_type(self.text(ty))
    }

    /// Type of a field or property declared on a user type or its bases.
    fn member_type(&self, full_name: &str, member: &str) -> Option<String> {
        self.type_and_bases(full_name).iter().find_map(|ty| {
            self.type_members(ty)
                .into_iter()
                .find_map(|decl| self.member_binding(decl, member))
                .and_then(|binding| binding.type_name)
        })
    }

    // ============================================================
    // Scopes
    // ============================================================

    /// Find the declaration `name` refers to at `at`, innermost scope first.
    fn lookup(&self, name: &str, at: Node<'tree>) -> Option<Binding<'tree>> {
        let mut current = at;

        while let Some(scope) = current.parent() {
            let found = match scope.kind() {
                "block" | "switch_section" => self.block_binding(scope, name, at),
                "method_declaration"
                | "constructor_declaration"
                | "local_function_statement"
                | "operator_declaration"
                | "conversion_operator_declaration"
                | "anonymous_method_expression"
                | "lambda_expression" => self.parameter_binding(scope, name),
                "foreach_statement" => self.foreach_binding(scope, name),
                "for_statement" | "using_statement" | "fixed_statement" => {
                    let mut cursor = scope.walk();
                    let declarations: Vec<Node<'tree>> = scope
                        .named_children(&mut cursor)
                        .filter(|c| c.kind() == "variable_declaration")
                        .collect();
                    declarations
                        .into_iter()
                        .find_map(|decl| self.declaration_binding(decl, name, false))
                }
                kind if TypeKind::from_node_kind(kind).is_some() => {
                    let full_name = self.registry.by_node(scope).map(|d| d.full_name.clone());
                    full_name.and_then(|ty| {
                        self.type_and_bases(&ty).iter().find_map(|t| {
                            self.type_members(t)
                                .into_iter()
                                .find_map(|decl| self.member_binding(decl, name))
                        })
                    })
                }
                _ => None,
            };
            if found.is_some() {
                return found;
            }
            current = scope;
        }
        None
    }

    /// Locals declared in `block` before `at`.
    fn block_binding(&self, block: Node<'tree>, name: &str, at: Node<'tree>) -> Option<Binding<'tree>> {
        let mut cursor = block.walk();
        let statements: Vec<Node<'tree>> = block
            .named_children(&mut cursor)
            .filter(|s| s.kind() == "local_declaration_statement" && s.end_byte() <= at.start_byte())
            .collect();

        statements.into_iter().rev().find_map(|statement| {
            let is_const = self.has_modifier(statement, "const");
            let mut cursor = statement.walk();
            let declarations: Vec<Node<'tree>> = statement
                .named_children(&mut cursor)
                .filter(|c| c.kind() == "variable_declaration")
                .collect();
            declarations
                .into_iter()
                .find_map(|decl| self.declaration_binding(decl, name, is_const))
        })
    }

    /// Binding for `name` in a field or property member declaration.
    fn member_binding(&self, member: Node<'tree>, name: &str) -> Option<Binding<'tree>> {
        match member.kind() {
            "field_declaration" => {
                let is_const = self.has_modifier(member, "const");
                let mut cursor = member.walk();
                let declarations: Vec<Node<'tree>> = member
                    .named_children(&mut cursor)
                    .filter(|c| c.kind() == "variable_declaration")
                    .collect();
                declarations
                    .into_iter()
                    .find_map(|decl| self.declaration_binding(decl, name, is_const))
            }
            "property_declaration" => {
                let prop_name = member.child_by_field_name("name")?;
                if self.text(prop_name) != name {
                    return None;
                }
                let ty = member.child_by_field_name("type")?;
                Some(Binding {
                    type_name: self.resolve_type(self.text(ty)),
                    constant: None,
                })
            }
            _ => None,
        }
    }

    /// Binding for `name` among the declarators of a `variable_declaration`.
    fn declaration_binding(&self, declaration: Node<'tree>, name: &str, is_const: bool) -> Option<Binding<'tree>> {
        let mut cursor = declaration.walk();
        let declarator = declaration
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "variable_declarator")
            .find(|d| declarator_name(*d).is_some_and(|n| self.text(n) == name))?;

        let value = declarator_value(declarator);
        let ty = declaration.child_by_field_name("type");
        let type_name = match ty {
            Some(ty) if !is_implicit_type(self.text(ty)) => self.resolve_type(self.text(ty)),
            _ => value.and_then(|v| self.expression_type(v)),
        };

        Some(Binding {
            type_name,
            constant: if is_const { value } else { None },
        })
    }

    fn parameter_binding(&self, owner: Node<'tree>, name: &str) -> Option<Binding<'tree>> {
        let parameters = owner
            .child_by_field_name("parameters")
            .or_else(|| {
                let mut cursor = owner.walk();
                owner
                    .named_children(&mut cursor)
                    .find(|c| c.kind() == "parameter_list")
            })?;

        // `x => ...` has a bare identifier for a parameter list
        if parameters.kind() == "identifier" {
            return (self.text(parameters) == name).then_some(Binding {
                type_name: None,
                constant: None,
            });
        }

        let mut cursor = parameters.walk();
        let parameter = parameters
            .named_children(&mut cursor)
            .find(|p| {
                p.child_by_field_name("name")
                    .is_some_and(|n| self.text(n) == name)
            })?;

        Some(Binding {
            type_name: parameter
                .child_by_field_name("type")
                .and_then(|ty| self.resolve_type(self.text(ty))),
            constant: None,
        })
    }

    fn foreach_binding(&self, statement: Node<'tree>, name: &str) -> Option<Binding<'tree>> {
        let left = statement.child_by_field_name("left")?;
        if self.text(left) != name {
            return None;
        }
        let type_name = statement
            .child_by_field_name("type")
            .filter(|ty| !is_implicit_type(self.text(*ty)))
            .and_then(|ty| self.resolve_type(self.text(ty)));
        Some(Binding {
            type_name,
            constant: None,
        })
    }

    fn has_modifier(&self, node: Node<'tree>, modifier: &str) -> bool {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .any(|c| c.kind() == "modifier" && self.text(c) == modifier)
    }

    // ============================================================
    // Constants
    // ============================================================

    fn evaluate(&self, expr: Node<'tree>, depth: usize) -> Option<String> {
        if depth > MAX_CONSTANT_DEPTH {
            return None;
        }
        match expr.kind() {
            "string_literal" => literals::decode_regular(self.text(expr)),
            "verbatim_string_literal" => literals::decode_verbatim(self.text(expr)),
            "raw_string_literal" => literals::decode_raw(self.text(expr)),
            "parenthesized_expression" => self.evaluate(first_named_child(expr)?, depth + 1),
            "identifier" => {
                let value = self.lookup(self.text(expr), expr)?.constant?;
                self.evaluate(value, depth + 1)
            }
            "member_access_expression" => {
                let owner = self.resolve_type(self.text(expr.child_by_field_name("expression")?))?;
                let member = self.text(expr.child_by_field_name("name")?);
                let value = self.type_and_bases(&owner).iter().find_map(|ty| {
                    self.type_members(ty)
                        .into_iter()
                        .find_map(|decl| self.member_binding(decl, member))
                        .and_then(|binding| binding.constant)
                })?;
                self.evaluate(value, depth + 1)
            }
            _ => None,
        }
    }
}

impl<'tree> SemanticModel<'tree> for SyntacticModel<'tree> {
    fn resolve_call(&self, call: Node<'tree>) -> Option<MethodDescriptor> {
        let function = call.child_by_field_name("function")?;

        let (name, receivers) = match function.kind() {
            "identifier" | "generic_name" => {
                let mut receivers = Vec::new();
                if let Some(own) = self.enclosing_type(call) {
                    receivers.push(Receiver::Instance(own));
                }
                receivers.extend(
                    self.registry
                        .usings
                        .static_types
                        .iter()
                        .filter_map(|ty| self.resolve_type(ty))
                        .map(Receiver::Static),
                );
                (simple_name(self.parsed, function)?, receivers)
            }
            "member_access_expression" => {
                let name = simple_name(self.parsed, function.child_by_field_name("name")?)?;
                let receiver = self.receiver_of(function.child_by_field_name("expression")?)?;
                (name, vec![receiver])
            }
            _ => return None,
        };

        receivers
            .iter()
            .find_map(|receiver| self.bind(receiver, name))
    }

    fn constant_string(&self, expr: Node<'tree>) -> Option<String> {
        self.evaluate(expr, 0)
    }
}

// ============================================================
// Node helpers
// ============================================================

fn field_or_kind<'tree>(node: Node<'tree>, field: &str, kind: &str) -> Option<Node<'tree>> {
    node.child_by_field_name(field).or_else(|| {
        let mut cursor = node.walk();
        node.named_children(&mut cursor).find(|c| c.kind() == kind)
    })
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find(|c| c.kind() != "comment")
}

fn last_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .last()
}

/// Identifier of a simple or generic name: `Tr` for `Tr`, `GetNode` for `GetNode<Label>`.
fn simple_name<'tree>(parsed: &'tree ParsedSource, node: Node<'tree>) -> Option<&'tree str> {
    match node.kind() {
        "identifier" => Some(parsed.text(node)),
        "generic_name" => {
            let mut cursor = node.walk();
            let ident = node
                .named_children(&mut cursor)
                .find(|c| c.kind() == "identifier")?;
            Some(parsed.text(ident))
        }
        _ => None,
    }
}

fn declarator_name(declarator: Node<'_>) -> Option<Node<'_>> {
    declarator.child_by_field_name("name").or_else(|| {
        let mut cursor = declarator.walk();
        declarator
            .named_children(&mut cursor)
            .find(|c| c.kind() == "identifier")
    })
}

/// Initializer expression of a `variable_declarator`, if any.
fn declarator_value(declarator: Node<'_>) -> Option<Node<'_>> {
    let name_id = declarator_name(declarator).map(|n| n.id());
    let mut cursor = declarator.walk();
    let value = declarator
        .named_children(&mut cursor)
        .filter(|c| {
            Some(c.id()) != name_id
                && !matches!(c.kind(), "comment" | "bracketed_argument_list" | "tuple_pattern")
        })
        .last()?;

    if value.kind() == "equals_value_clause" {
        first_named_child(value)
    } else {
        Some(value)
    }
}

fn is_implicit_type(text: &str) -> bool {
    text == "var"
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::parsers::csharp::{Preorder, parse_csharp_source};
    use crate::core::semantic::{ENGINE_OBJECT_TYPE, TRANSLATION_SERVER_TYPE};

    /// Resolve `call_text` in the first file, with every file in the project index.
    fn resolve_in_project(files: &[&str], call_text: &str) -> Option<MethodDescriptor> {
        let parsed: Vec<ParsedSource> = files
            .iter()
            .map(|source| parse_csharp_source(source.to_string()).unwrap())
            .collect();
        let project = ProjectIndex::build(
            parsed
                .iter()
                .flat_map(RegistryCollector::summarize)
                .collect(),
        );
        let model = SyntacticModel::with_project(&parsed[0], &project);
        let call = Preorder::new(parsed[0].root())
            .find(|n| n.kind() == "invocation_expression" && parsed[0].text(*n) == call_text)
            .unwrap_or_else(|| panic!("call {} not found", call_text));
        model.resolve_call(call)
    }

    /// Resolve every invocation in `source`, keyed by its source text.
    fn resolve_all(source: &str) -> Vec<(String, Option<MethodDescriptor>)> {
        let parsed = parse_csharp_source(source.to_string()).unwrap();
        let model = SyntacticModel::new(&parsed);
        Preorder::new(parsed.root())
            .filter(|n| n.kind() == "invocation_expression")
            .map(|n| (parsed.text(n).to_string(), model.resolve_call(n)))
            .collect()
    }

    fn resolve_one(source: &str, call_text: &str) -> Option<MethodDescriptor> {
        resolve_all(source)
            .into_iter()
            .find(|(text, _)| text == call_text)
            .unwrap_or_else(|| panic!("call {} not found", call_text))
            .1
    }

    fn constants(source: &str) -> Vec<Option<String>> {
        let parsed = parse_csharp_source(source.to_string()).unwrap();
        let model = SyntacticModel::new(&parsed);
        Preorder::new(parsed.root())
            .filter(|n| n.kind() == "invocation_expression")
            .filter_map(|n| n.child_by_field_name("arguments"))
            .filter_map(|args| {
                let mut cursor = args.walk();
                let first = args
                    .named_children(&mut cursor)
                    .find(|c| c.kind() == "argument")?;
                last_named_child(first)
            })
            .map(|expr| model.constant_string(expr))
            .collect()
    }

    #[test]
    fn test_implicit_this_tr_on_engine_subclass() {
        let source = r#"
using Godot;

public partial class Menu : Control
{
    public override void _Ready()
    {
        Tr("Start");
    }
}
"#;
        let method = resolve_one(source, "Tr(\"Start\")").unwrap();

        assert_eq!(method.name, "Tr");
        assert_eq!(method.declaring_type, ENGINE_OBJECT_TYPE);
        assert_eq!(method.receiver_type.as_deref(), Some("Menu"));
        assert!(!method.is_static);
        assert_eq!(
            method.base_type_chain,
            vec![
                "Godot.Control",
                "Godot.CanvasItem",
                "Godot.Node",
                "Godot.GodotObject"
            ]
        );
        assert!(method.derives_from(ENGINE_OBJECT_TYPE));
    }

    #[test]
    fn test_static_translation_server_call() {
        let source = r#"
using Godot;

public static class Texts
{
    public static string Quit() => TranslationServer.Translate("Quit");
}
"#;
        let method = resolve_one(source, "TranslationServer.Translate(\"Quit\")").unwrap();

        assert_eq!(method.declaring_type, TRANSLATION_SERVER_TYPE);
        assert!(method.is_static);
        assert!(method.receiver_type.is_none());
    }

    #[test]
    fn test_fully_qualified_translation_server_without_using() {
        let source = r#"
public static class Texts
{
    public static string Quit() => Godot.TranslationServer.Translate("Quit");
}
"#;
        let method = resolve_one(source, "Godot.TranslationServer.Translate(\"Quit\")").unwrap();
        assert_eq!(method.declaring_type, TRANSLATION_SERVER_TYPE);
    }

    #[test]
    fn test_engine_types_need_godot_in_scope() {
        let source = r#"
public static class Texts
{
    public static string Quit() => TranslationServer.Translate("Quit");
}
"#;
        assert_eq!(resolve_one(source, "TranslationServer.Translate(\"Quit\")"), None);
    }

    #[test]
    fn test_using_alias_and_using_static() {
        let source = r#"
using TS = Godot.TranslationServer;
using static Godot.TranslationServer;

public static class Texts
{
    public static void Load()
    {
        TS.Translate("Aliased");
        Translate("Imported");
    }
}
"#;
        let aliased = resolve_one(source, "TS.Translate(\"Aliased\")").unwrap();
        assert_eq!(aliased.declaring_type, TRANSLATION_SERVER_TYPE);

        let imported = resolve_one(source, "Translate(\"Imported\")").unwrap();
        assert_eq!(imported.declaring_type, TRANSLATION_SERVER_TYPE);
        assert!(imported.is_static);
    }

    #[test]
    fn test_unrelated_class_with_same_method_name() {
        let source = r#"
public class Localizer
{
    public string Tr(string message) => message;
}

public class Game
{
    private Localizer _loc = new Localizer();

    public void Run()
    {
        _loc.Tr("Not engine");
    }
}
"#;
        let method = resolve_one(source, "_loc.Tr(\"Not engine\")").unwrap();

        assert_eq!(method.declaring_type, "Localizer");
        assert_eq!(method.receiver_type.as_deref(), Some("Localizer"));
        assert!(method.base_type_chain.is_empty());
        assert!(!method.derives_from(ENGINE_OBJECT_TYPE));
    }

    #[test]
    fn test_typed_locals_fields_and_parameters() {
        let source = r#"
using Godot;

public partial class Hud : CanvasLayer
{
    private Label _title;
    public Button Confirm { get; set; }

    public void Refresh(RichTextLabel body)
    {
        var dialog = new AcceptDialog();
        Label local = _title;
        _title.Tr("field");
        Confirm.Tr("property");
        body.Tr("parameter");
        dialog.Tr("var");
        local.Tr("local");
        GetNode<Label>("Score").Tr("generic");
        ((Control)body).Tr("cast");
        this.Tr("this");
    }
}
"#;
        let receivers: Vec<Option<String>> = resolve_all(source)
            .into_iter()
            .filter(|(text, _)| text.contains(".Tr("))
            .map(|(_, method)| method.and_then(|m| m.receiver_type))
            .collect();

        assert_eq!(
            receivers,
            vec![
                Some("Godot.Label".to_string()),
                Some("Godot.Button".to_string()),
                Some("Godot.RichTextLabel".to_string()),
                Some("Godot.AcceptDialog".to_string()),
                Some("Godot.Label".to_string()),
                Some("Godot.Label".to_string()),
                Some("Godot.Control".to_string()),
                Some("Hud".to_string()),
            ]
        );
    }

    #[test]
    fn test_user_static_tr_shadows_engine_method() {
        let source = r#"
using Godot;

public partial class Menu : Control
{
    private static string Tr(string s) => s;

    public void Show()
    {
        Tr("Shadowed");
    }
}
"#;
        let method = resolve_one(source, "Tr(\"Shadowed\")").unwrap();

        assert_eq!(method.declaring_type, "Menu");
        assert!(method.is_static);
    }

    #[test]
    fn test_user_class_chain_through_other_user_class() {
        let source = r#"
using Godot;

namespace Game
{
    public partial class BaseScreen : Control { }

    public partial class Options : BaseScreen
    {
        public void Show() => Tr("Options");
    }
}
"#;
        let method = resolve_one(source, "Tr(\"Options\")").unwrap();

        assert_eq!(method.receiver_type.as_deref(), Some("Game.Options"));
        assert_eq!(method.base_type_chain[0], "Game.BaseScreen");
        assert!(method.derives_from(ENGINE_OBJECT_TYPE));
    }

    #[test]
    fn test_base_class_declared_in_another_file() {
        let player = r#"
using Godot;

public partial class Player : BaseCharacter
{
    public override void _Ready() => Tr("Jump");
}
"#;
        let base = "using Godot;\npublic partial class BaseCharacter : CharacterBody2D { }\n";

        let method = resolve_in_project(&[player, base], "Tr(\"Jump\")").unwrap();
        assert_eq!(method.receiver_type.as_deref(), Some("Player"));
        assert_eq!(
            &method.base_type_chain[..3],
            &["BaseCharacter", "Godot.CharacterBody2D", "Godot.PhysicsBody2D"]
        );
        assert!(method.derives_from(ENGINE_OBJECT_TYPE));

        // the file alone does not know its base
        assert_eq!(resolve_one(player, "Tr(\"Jump\")"), None);
    }

    #[test]
    fn test_partial_part_takes_base_from_other_file() {
        let menu = "public partial class Menu { void Show() => Tr(\"Options\"); }";
        let rest = "using Godot;\npublic partial class Menu : Control { }";

        let method = resolve_in_project(&[menu, rest], "Tr(\"Options\")").unwrap();
        assert_eq!(method.declaring_type, ENGINE_OBJECT_TYPE);
        assert_eq!(method.base_type_chain[0], "Godot.Control");
    }

    #[test]
    fn test_static_tr_in_other_part_shadows_engine_method() {
        let menu = "public partial class Menu { void Show() => Tr(\"Shadowed\"); }";
        let rest =
            "using Godot;\npublic partial class Menu : Control { static string Tr(string s) => s; }";

        let method = resolve_in_project(&[menu, rest], "Tr(\"Shadowed\")").unwrap();
        assert_eq!(method.declaring_type, "Menu");
        assert!(method.is_static);
    }

    #[test]
    fn test_field_typed_with_type_from_other_file() {
        let hud = r#"
namespace Game
{
    public class Hud
    {
        private Banner _banner;
        public void Show() => _banner.Tr("Welcome");
    }
}
"#;
        let banner = "using Godot;\nnamespace Game.Widgets { public partial class Banner : Label { } }";
        let imported = format!("using Game.Widgets;\n{}", hud);

        assert_eq!(resolve_in_project(&[hud, banner], "_banner.Tr(\"Welcome\")"), None);
        let method =
            resolve_in_project(&[imported.as_str(), banner], "_banner.Tr(\"Welcome\")").unwrap();
        assert_eq!(method.receiver_type.as_deref(), Some("Game.Widgets.Banner"));
    }

    #[test]
    fn test_unknown_receiver_does_not_resolve() {
        let source = r#"
public class Game
{
    public void Run(dynamic thing)
    {
        thing.Tr("dynamic");
        Unknown.Tr("unknown");
    }
}
"#;
        assert_eq!(resolve_one(source, "thing.Tr(\"dynamic\")"), None);
        assert_eq!(resolve_one(source, "Unknown.Tr(\"unknown\")"), None);
    }

    #[test]
    fn test_instance_method_through_type_name_does_not_bind() {
        let source = r#"
using Godot;

public class Game
{
    public void Run() => Node.Tr("static access");
}
"#;
        assert_eq!(resolve_one(source, "Node.Tr(\"static access\")"), None);
    }

    #[test]
    fn test_constant_string_literals() {
        let source = r#"
class A
{
    void F()
    {
        G("plain");
        G(@"verbatim ""quoted""");
        G("""raw""");
        G(("parenthesized"));
        G($"interpolated {x}");
        G("con" + "cat");
        G(42);
    }
}
"#;
        assert_eq!(
            constants(source),
            vec![
                Some("plain".to_string()),
                Some("verbatim \"quoted\"".to_string()),
                Some("raw".to_string()),
                Some("parenthesized".to_string()),
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_constant_identifiers() {
        let source = r#"
class Texts
{
    public const string Title = "Main Menu";
    public const string Alias = Title;
}

class A
{
    private const string Field = "field";
    private string _mutable = "mutable";

    void F(string param)
    {
        const string Local = "local";
        string notConst = "not const";
        G(Field);
        G(Local);
        G(Texts.Title);
        G(Texts.Alias);
        G(_mutable);
        G(notConst);
        G(param);
    }
}
"#;
        assert_eq!(
            constants(source),
            vec![
                Some("field".to_string()),
                Some("local".to_string()),
                Some("Main Menu".to_string()),
                Some("Main Menu".to_string()),
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_self_referencing_constant_terminates() {
        let source = r#"
class A
{
    const string Loop = Loop;

    void F()
    {
        G(Loop);
    }
}
"#;
        assert_eq!(constants(source), vec![None]);
    }
}
