use std::fmt;

use serde::Serialize;

/// Extraction shape of a recognized translation call.
///
/// Determined by the matched method name and the call's argument count:
///
/// | method                 | args | shape                 |
/// |------------------------|------|-----------------------|
/// | `Translate` / `Tr`     | 1    | `Singular`            |
/// | `Translate` / `Tr`     | 2    | `SingularWithContext` |
/// | `TranslatePlural` / `TrN` | 3 | `Plural`              |
/// | `TranslatePlural` / `TrN` | 4 | `PluralWithContext`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationShape {
    /// `Tr("message")`
    Singular,
    /// `Tr("message", "context")`
    SingularWithContext,
    /// `TrN("message", "plural", n)`
    Plural,
    /// `TrN("message", "plural", n, "context")`
    PluralWithContext,
}

impl TranslationShape {
    /// Number of call arguments this shape requires.
    pub fn arity(self) -> usize {
        match self {
            TranslationShape::Singular => 1,
            TranslationShape::SingularWithContext => 2,
            TranslationShape::Plural => 3,
            TranslationShape::PluralWithContext => 4,
        }
    }

    /// Returns true if entries of this shape go to the context/plural sequence.
    pub fn is_contextual(self) -> bool {
        !matches!(self, TranslationShape::Singular)
    }
}

impl fmt::Display for TranslationShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationShape::Singular => write!(f, "singular"),
            TranslationShape::SingularWithContext => write!(f, "singular+context"),
            TranslationShape::Plural => write!(f, "plural"),
            TranslationShape::PluralWithContext => write!(f, "plural+context"),
        }
    }
}

/// A singular translatable string and its translator note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    pub id: String,
    /// Translator note, empty when none applies.
    pub comment: String,
    /// Line of the call site (1-indexed).
    pub line: usize,
}

/// A contextual and/or plural translatable string.
///
/// `context` is empty when the call carries none, `plural` is empty for
/// `Tr("message", "context")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralEntry {
    pub singular: String,
    pub context: String,
    pub plural: String,
    pub comment: String,
    pub line: usize,
}

impl PluralEntry {
    /// The `(singular, context, plural)` triple as stored in catalogs.
    pub fn triple(&self) -> [&str; 3] {
        [&self.singular, &self.context, &self.plural]
    }
}

/// Everything extracted from one source file, in document order.
///
/// Each entry carries its own comment, so the message ids and their comments
/// (and likewise the plural triples and their comments) always stay
/// positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileExtraction {
    pub messages: Vec<MessageEntry>,
    pub plurals: Vec<PluralEntry>,
}

impl FileExtraction {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.plurals.is_empty()
    }

    /// Total number of extracted entries.
    pub fn len(&self) -> usize {
        self.messages.len() + self.plurals.len()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn ids_comment(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.comment.as_str()).collect()
    }

    pub fn plural_entries(&self) -> Vec<[&str; 3]> {
        self.plurals.iter().map(PluralEntry::triple).collect()
    }

    pub fn plural_comments(&self) -> Vec<&str> {
        self.plurals.iter().map(|p| p.comment.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shape_arity() {
        assert_eq!(TranslationShape::Singular.arity(), 1);
        assert_eq!(TranslationShape::SingularWithContext.arity(), 2);
        assert_eq!(TranslationShape::Plural.arity(), 3);
        assert_eq!(TranslationShape::PluralWithContext.arity(), 4);
    }

    #[test]
    fn test_shape_is_contextual() {
        assert!(!TranslationShape::Singular.is_contextual());
        assert!(TranslationShape::SingularWithContext.is_contextual());
        assert!(TranslationShape::Plural.is_contextual());
        assert!(TranslationShape::PluralWithContext.is_contextual());
    }

    #[test]
    fn test_parallel_sequences_stay_aligned() {
        let extraction = FileExtraction {
            messages: vec![
                MessageEntry {
                    id: "Start".to_string(),
                    comment: "".to_string(),
                    line: 3,
                },
                MessageEntry {
                    id: "Quit".to_string(),
                    comment: "menu button".to_string(),
                    line: 5,
                },
            ],
            plurals: vec![PluralEntry {
                singular: "apple".to_string(),
                context: "".to_string(),
                plural: "apples".to_string(),
                comment: "fruit".to_string(),
                line: 9,
            }],
        };

        assert_eq!(extraction.len(), 3);
        assert_eq!(extraction.ids(), vec!["Start", "Quit"]);
        assert_eq!(extraction.ids_comment(), vec!["", "menu button"]);
        assert_eq!(extraction.plural_entries(), vec![["apple", "", "apples"]]);
        assert_eq!(extraction.plural_comments(), vec!["fruit"]);
    }
}
