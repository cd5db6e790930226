//! Translator note correlation.
//!
//! Given the line a call starts on, finds the comment meant for translators:
//!
//! ```csharp
//! // TRANSLATORS: Shown on the title screen.
//! // Keep it short.
//! Tr("Start");
//!
//! Tr("Quit"); // Trailing comments win over anything above.
//!
//! // NO_TRANSLATE: debug only
//! Tr("Frame time");
//! ```
//!
//! Rules, first match wins:
//!
//! 1. A comment starting on the call's own line is the note.
//! 2. Otherwise own-line comments ending on the lines directly above are read
//!    bottom-up. The scan stops at a line without such a comment, after a
//!    multi-line block comment, or at a line starting with `TRANSLATORS:`
//!    (whose prefix is stripped).
//!
//! A `NO_TRANSLATE` / `NO_TRANSLATE:<reason>` line seen on the way suppresses
//! the call and discards whatever was accumulated.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::collect::CommentIndex;

const NOTE_PREFIX: &str = "TRANSLATORS:";
const SUPPRESS_MARKER: &str = "NO_TRANSLATE";

static LINE_COMMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//+").unwrap());
static BLOCK_COMMENT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/\*+").unwrap());
static BLOCK_COMMENT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+/\s*$").unwrap());
static BLOCK_LINE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*+").unwrap());

/// Note found for a call site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correlation {
    /// Translator note, empty when there is none.
    pub comment: String,
    /// The call carries a `NO_TRANSLATE` marker and must not be extracted.
    pub suppressed: bool,
}

impl Correlation {
    fn note(lines: Vec<String>) -> Self {
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(start, |i| i + 1);

        Self {
            comment: lines[start..end].join("\n").trim().to_string(),
            suppressed: false,
        }
    }

    fn suppressed() -> Self {
        Self {
            comment: String::new(),
            suppressed: true,
        }
    }
}

/// What a single comment line means to the scan.
#[derive(Debug, PartialEq, Eq)]
enum Marker<'a> {
    Suppress,
    /// `TRANSLATORS:` line; holds the text after the prefix.
    NoteStart(&'a str),
    Plain,
}

impl<'a> Marker<'a> {
    fn of(line: &'a str) -> Self {
        if line == SUPPRESS_MARKER || line.starts_with("NO_TRANSLATE:") {
            Marker::Suppress
        } else if let Some(rest) = line.strip_prefix(NOTE_PREFIX) {
            Marker::NoteStart(rest.trim())
        } else {
            Marker::Plain
        }
    }
}

/// Outcome of reading one comment into the accumulated note.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
    Suppress,
}

/// Correlates call lines with translator notes of one file.
pub struct CommentCorrelator<'a> {
    index: &'a CommentIndex,
}

impl<'a> CommentCorrelator<'a> {
    pub fn new(index: &'a CommentIndex) -> Self {
        Self { index }
    }

    /// Find the note (or suppression) for a call starting on `call_line`.
    pub fn correlate(&self, call_line: usize) -> Correlation {
        let mut note = Vec::new();

        if let Some(trailing) = self.index.starting_on(call_line) {
            return match read_upward(&comment_lines(&trailing.text), &mut note) {
                Step::Suppress => Correlation::suppressed(),
                Step::Continue | Step::Stop => Correlation::note(note),
            };
        }

        let mut line = call_line;
        while line > 1 {
            line -= 1;
            let Some(record) = self.index.own_line_ending_on(line) else {
                break;
            };

            match read_upward(&comment_lines(&record.text), &mut note) {
                Step::Suppress => return Correlation::suppressed(),
                Step::Stop => break,
                Step::Continue if record.is_multiline() => break,
                Step::Continue => {}
            }
        }

        Correlation::note(note)
    }
}

/// Prepend the lines of one comment to `note`, bottom line first.
fn read_upward(lines: &[String], note: &mut Vec<String>) -> Step {
    for line in lines.iter().rev() {
        match Marker::of(line) {
            Marker::Suppress => return Step::Suppress,
            Marker::NoteStart(rest) => {
                note.insert(0, rest.to_string());
                return Step::Stop;
            }
            Marker::Plain => note.insert(0, line.clone()),
        }
    }
    Step::Continue
}

/// Comment text without delimiters, one entry per physical line, each trimmed.
fn comment_lines(text: &str) -> Vec<String> {
    if let Some(marker) = LINE_COMMENT_MARKER.find(text) {
        return vec![text[marker.end()..].trim().to_string()];
    }

    let body = BLOCK_COMMENT_CLOSE.replace(text, "");
    let body = BLOCK_COMMENT_OPEN.replace(&body, "");
    body.lines()
        .map(|line| BLOCK_LINE_DECORATION.replace(line, "").trim().to_string())
        .collect()
}
