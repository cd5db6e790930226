//! Argument extraction for classified translation calls.

use tree_sitter::Node;

use crate::core::data::TranslationShape;
use crate::core::extract::CallSite;
use crate::core::semantic::SemanticModel;

/// Parameters of `Tr` / `Translate`.
const SINGULAR_PARAMETERS: &[&str] = &["message", "context"];
/// Parameters of `TrN` / `TranslatePlural`.
const PLURAL_PARAMETERS: &[&str] = &["message", "pluralMessage", "n", "context"];

/// Constant strings pulled from a translation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedData {
    pub singular: String,
    /// Empty when the shape carries no context.
    pub context: String,
    /// Empty for singular shapes.
    pub plural: String,
}

/// Pull the constant strings `shape` needs out of `call`.
///
/// Returns `None` when a required argument is not a compile-time string
/// constant, or named arguments do not map onto the method's parameters.
pub fn extract_arguments<'tree, M>(
    shape: TranslationShape,
    call: &CallSite<'tree>,
    model: &M,
) -> Option<ExtractedData>
where
    M: SemanticModel<'tree>,
{
    let slots = bind_parameters(shape, call)?;
    let constant = |slot: usize| -> Option<String> { model.constant_string(slots.get(slot).copied().flatten()?) };

    let data = match shape {
        TranslationShape::Singular => ExtractedData {
            singular: constant(0)?,
            ..Default::default()
        },
        TranslationShape::SingularWithContext => ExtractedData {
            singular: constant(0)?,
            context: constant(1)?,
            plural: String::new(),
        },
        TranslationShape::Plural => ExtractedData {
            singular: constant(0)?,
            context: String::new(),
            plural: constant(1)?,
        },
        TranslationShape::PluralWithContext => ExtractedData {
            singular: constant(0)?,
            context: constant(3)?,
            plural: constant(1)?,
        },
    };
    Some(data)
}

/// Place each argument in its parameter slot, honoring `name:` arguments.
fn bind_parameters<'tree>(shape: TranslationShape, call: &CallSite<'tree>) -> Option<Vec<Option<Node<'tree>>>> {
    let parameters = match shape {
        TranslationShape::Singular | TranslationShape::SingularWithContext => SINGULAR_PARAMETERS,
        TranslationShape::Plural | TranslationShape::PluralWithContext => PLURAL_PARAMETERS,
    };

    let mut slots: Vec<Option<Node<'tree>>> = vec![None; parameters.len()];
    for (position, argument) in call.arguments.iter().enumerate() {
        let slot = match argument.name {
            Some(name) => parameters.iter().position(|p| *p == name)?,
            None => position,
        };
        let target = slots.get_mut(slot)?;
        if target.is_some() {
            return None;
        }
        *target = Some(argument.value);
    }

    Some(slots)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::parsers::csharp::{Preorder, parse_csharp_source};
    use crate::core::semantic::SyntacticModel;

    fn extract(shape: TranslationShape, args: &str) -> Option<ExtractedData> {
        let source = format!(
            "class A {{ const string Ctx = \"menu\"; void F(int n, string s) {{ X({}); }} }}",
            args
        );
        let parsed = parse_csharp_source(source).unwrap();
        let model = SyntacticModel::new(&parsed);
        let node = Preorder::new(parsed.root())
            .find(|n| n.kind() == "invocation_expression")
            .unwrap();
        let call = CallSite::from_node(&parsed, node).unwrap();
        extract_arguments(shape, &call, &model)
    }

    fn data(singular: &str, context: &str, plural: &str) -> Option<ExtractedData> {
        Some(ExtractedData {
            singular: singular.to_string(),
            context: context.to_string(),
            plural: plural.to_string(),
        })
    }

    #[test]
    fn test_positional_shapes() {
        assert_eq!(extract(TranslationShape::Singular, "\"Start\""), data("Start", "", ""));
        assert_eq!(
            extract(TranslationShape::SingularWithContext, "\"Open\", \"door\""),
            data("Open", "door", "")
        );
        assert_eq!(
            extract(TranslationShape::Plural, "\"apple\", \"apples\", n"),
            data("apple", "", "apples")
        );
        assert_eq!(
            extract(TranslationShape::PluralWithContext, "\"file\", \"files\", n, \"disk\""),
            data("file", "disk", "files")
        );
    }

    #[test]
    fn test_constant_field_as_context() {
        assert_eq!(
            extract(TranslationShape::SingularWithContext, "\"Open\", Ctx"),
            data("Open", "menu", "")
        );
    }

    #[test]
    fn test_non_constant_required_argument_skips() {
        assert_eq!(extract(TranslationShape::Singular, "s"), None);
        assert_eq!(extract(TranslationShape::Singular, "$\"Hi {s}\""), None);
        assert_eq!(extract(TranslationShape::Singular, "\"a\" + \"b\""), None);
        assert_eq!(extract(TranslationShape::Plural, "\"apple\", s, n"), None);
    }

    #[test]
    fn test_non_constant_context_skips_whole_plural() {
        assert_eq!(
            extract(TranslationShape::PluralWithContext, "\"file\", \"files\", n, s"),
            None
        );
    }

    #[test]
    fn test_count_argument_need_not_be_constant() {
        assert_eq!(
            extract(TranslationShape::Plural, "\"apple\", \"apples\", n * 2"),
            data("apple", "", "apples")
        );
    }

    #[test]
    fn test_named_arguments() {
        assert_eq!(
            extract(TranslationShape::SingularWithContext, "context: \"door\", message: \"Open\""),
            data("Open", "door", "")
        );
        assert_eq!(
            extract(
                TranslationShape::PluralWithContext,
                "\"file\", \"files\", context: \"disk\", n: n"
            ),
            data("file", "disk", "files")
        );
    }

    #[test]
    fn test_unknown_or_duplicate_names_skip() {
        assert_eq!(
            extract(TranslationShape::SingularWithContext, "\"Open\", ctx: \"door\""),
            None
        );
        assert_eq!(
            extract(TranslationShape::SingularWithContext, "\"Open\", message: \"door\""),
            None
        );
    }
}
