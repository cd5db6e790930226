//! Report formatting and printing utilities.
//!
//! Kept apart from the extraction engine so `trawl` can be used as a library.
//! Every printer has a `*_to` variant taking a writer, used by the tests.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::core::{ExtractedFile, ExtractionRun};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// One printable line of the text report.
struct TextRow {
    location: String,
    line: usize,
    body: String,
}

/// Print the extracted strings, one per line, followed by a summary.
pub fn print_text(run: &ExtractionRun) {
    print_text_to(run, &mut io::stdout().lock());
}

pub fn print_text_to<W: Write>(run: &ExtractionRun, writer: &mut W) {
    let rows: Vec<TextRow> = run.files.iter().flat_map(file_rows).collect();
    let width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.location.as_str()))
        .max()
        .unwrap_or(0);

    for row in &rows {
        let padding = width - UnicodeWidthStr::width(row.location.as_str());
        let _ = writeln!(
            writer,
            "{}{}  {}",
            row.location.cyan(),
            " ".repeat(padding),
            row.body
        );
    }

    print_summary(run, writer);
}

/// Rows of one file, ordered by source line.
fn file_rows(file: &ExtractedFile) -> Vec<TextRow> {
    let messages = file.extraction.messages.iter().map(|m| TextRow {
        location: format!("{}:{}", file.path, m.line),
        line: m.line,
        body: with_comment(format!("{:?}", m.id), &m.comment),
    });
    let plurals = file.extraction.plurals.iter().map(|p| {
        let mut body = format!("{:?}", p.singular);
        if !p.context.is_empty() {
            body.push_str(&format!("  {} {:?}", "context:".dimmed(), p.context));
        }
        if !p.plural.is_empty() {
            body.push_str(&format!("  {} {:?}", "plural:".dimmed(), p.plural));
        }
        TextRow {
            location: format!("{}:{}", file.path, p.line),
            line: p.line,
            body: with_comment(body, &p.comment),
        }
    });

    let mut rows: Vec<TextRow> = messages.chain(plurals).collect();
    rows.sort_by_key(|r| r.line);
    rows
}

fn with_comment(body: String, comment: &str) -> String {
    if comment.is_empty() {
        body
    } else {
        let flat = comment.replace('\n', "\\n");
        format!("{}  {}", body, format!("# {}", flat).dimmed())
    }
}

fn print_summary<W: Write>(run: &ExtractionRun, writer: &mut W) {
    let total = run.message_count() + run.plural_count();
    let scanned = run.scanned_count();
    let files_word = if scanned == 1 { "file" } else { "files" };

    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No translatable strings found in {} {}",
                scanned, files_word
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} ({} plain, {} with context or plural) from {} {}",
            total,
            if total == 1 { "string" } else { "strings" },
            run.message_count(),
            run.plural_count(),
            scanned,
            files_word
        )
        .green()
    );
}

/// Print a warning for every file that could not be extracted.
pub fn print_failures(run: &ExtractionRun) {
    print_failures_to(run, &mut io::stderr().lock());
}

pub fn print_failures_to<W: Write>(run: &ExtractionRun, writer: &mut W) {
    if run.failures.is_empty() {
        return;
    }

    for failure in &run.failures {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            "warning:".bold().yellow(),
            failure.path,
            failure.error
        );
    }

    let count = run.failures.len();
    let _ = writeln!(
        writer,
        "{} {} {} could not be extracted",
        FAILURE_MARK.red(),
        count,
        if count == 1 { "file" } else { "files" }
    );
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFile<'a> {
    path: &'a str,
    ids: Vec<&'a str>,
    ids_comment: Vec<&'a str>,
    plural_entries: Vec<[&'a str; 3]>,
    plural_comments: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    path: &'a str,
    error: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    errors: Vec<JsonError<'a>>,
}

/// Print the run as a JSON document.
///
/// Files without any translatable string are left out.
pub fn print_json(run: &ExtractionRun) -> Result<()> {
    print_json_to(run, &mut io::stdout().lock())
}

pub fn print_json_to<W: Write>(run: &ExtractionRun, writer: &mut W) -> Result<()> {
    let report = JsonReport {
        files: run
            .files
            .iter()
            .filter(|f| !f.extraction.is_empty())
            .map(|f| JsonFile {
                path: &f.path,
                ids: f.extraction.ids(),
                ids_comment: f.extraction.ids_comment(),
                plural_entries: f.extraction.plural_entries(),
                plural_comments: f.extraction.plural_comments(),
            })
            .collect(),
        errors: run
            .failures
            .iter()
            .map(|f| JsonError {
                path: &f.path,
                error: &f.error,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to write JSON report")?;
    writeln!(writer)?;
    Ok(())
}
