//! Miette diagnostic wrapper for malformed JSON data files.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use varfill::LoadError;

/// A miette-compatible diagnostic for JSON data errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON data: {message}")]
#[diagnostic(code(varfill::json))]
pub struct JsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl JsonDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let (line, column, message) = match err {
            LoadError::Json {
                line,
                column,
                message,
                ..
            } => (*line, *column, message.clone()),
            LoadError::Io { .. } => (1, 1, err.to_string()),
        };

        JsonDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help: Some("data files must be valid JSON".to_string()),
        }
    }
}

/// Convert a 1-based line:column into a byte offset clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);

    // Clamp offset to content length to avoid miette panic on out-of-bounds
    offset.min(content.len())
}
