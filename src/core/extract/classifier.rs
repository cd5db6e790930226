//! Call-site classification.
//!
//! | method                  | args | shape                 |
//! |-------------------------|------|-----------------------|
//! | `Translate` / `Tr`      | 1    | `Singular`            |
//! | `Translate` / `Tr`      | 2    | `SingularWithContext` |
//! | `TranslatePlural`/`TrN` | 3    | `Plural`              |
//! | `TranslatePlural`/`TrN` | 4    | `PluralWithContext`   |

use crate::core::data::TranslationShape;
use crate::core::extract::CallSite;
use crate::core::semantic::{ENGINE_OBJECT_TYPE, MethodDescriptor, MethodKind, TRANSLATION_SERVER_TYPE};

/// Which family of translation API a method belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiFamily {
    Singular,
    Plural,
}

impl ApiFamily {
    /// Shapes a call of this family can take, one per accepted argument count.
    fn shapes(self) -> [TranslationShape; 2] {
        match self {
            ApiFamily::Singular => [
                TranslationShape::Singular,
                TranslationShape::SingularWithContext,
            ],
            ApiFamily::Plural => [
                TranslationShape::Plural,
                TranslationShape::PluralWithContext,
            ],
        }
    }
}

/// Decide whether `call` is a translation call, and with which shape.
pub fn classify(call: &CallSite<'_>, method: &MethodDescriptor) -> Option<TranslationShape> {
    api_family(method)?
        .shapes()
        .into_iter()
        .find(|shape| shape.arity() == call.arity())
}

fn api_family(method: &MethodDescriptor) -> Option<ApiFamily> {
    match method.name.as_str() {
        "Translate" | "TranslatePlural" if method.declaring_type == TRANSLATION_SERVER_TYPE => {
            Some(if method.name == "Translate" {
                ApiFamily::Singular
            } else {
                ApiFamily::Plural
            })
        }
        "Tr" | "TrN"
            if method.kind == MethodKind::Ordinary
                && !method.is_static
                && method.derives_from(ENGINE_OBJECT_TYPE) =>
        {
            Some(if method.name == "Tr" {
                ApiFamily::Singular
            } else {
                ApiFamily::Plural
            })
        }
        _ => None,
    }
}
