//! Placeholder scanner using winnow.
//!
//! Finds `start(name)end` tokens left to right. The capture is non-greedy: a
//! token ends at the first end marker after its start marker. A capture may
//! not span a line break; when it would, the scan resumes one character after
//! the rejected start marker.

use winnow::combinator::delimited;
use winnow::prelude::*;
use winnow::token::take_until;

/// A delimited token found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// The full token including both markers, e.g. `{user.name}`.
    pub raw: &'t str,
    /// The text between the markers, e.g. `user.name`.
    pub name: &'t str,
    /// Byte offset of the token in the scanned template.
    pub offset: usize,
}

impl Placeholder<'_> {
    /// Whether the name is a plain path: ASCII letters, digits, `_` and `.` only.
    pub fn is_identifier(&self) -> bool {
        is_path_name(self.name)
    }
}

/// Check that `name` is non-empty and made of ASCII word characters and dots.
pub fn is_path_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_path_char)
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Scan a template for every `start(name)end` token.
///
/// Tokens do not overlap. Names are returned whether or not they are valid
/// path names; see [`Placeholder::is_identifier`]. Empty markers yield no
/// tokens.
///
/// # Example
///
/// ```
/// use varfill::scan_placeholders;
///
/// let found = scan_placeholders("Hi {name}, {not valid}", "{", "}");
/// let names: Vec<&str> = found.iter().map(|p| p.name).collect();
/// assert_eq!(names, vec!["name", "not valid"]);
/// assert!(found[0].is_identifier());
/// assert!(!found[1].is_identifier());
/// ```
pub fn scan_placeholders<'t>(template: &'t str, start: &str, end: &str) -> Vec<Placeholder<'t>> {
    let mut found = Vec::new();
    if start.is_empty() || end.is_empty() {
        return found;
    }

    let mut remaining = template;
    while skip_to(&mut remaining, start).is_ok() {
        let candidate = remaining;
        match token(&mut remaining, start, end) {
            Ok(name) if !name.contains('\n') => {
                let consumed = candidate.len() - remaining.len();
                found.push(Placeholder {
                    raw: &candidate[..consumed],
                    name,
                    offset: template.len() - candidate.len(),
                });
            }
            Ok(_) => remaining = skip_one_char(candidate),
            // No end marker after this start, so none after any later start either.
            Err(_) => break,
        }
    }
    found
}

/// Advance the input to the next occurrence of `marker`.
fn skip_to(input: &mut &str, marker: &str) -> ModalResult<()> {
    take_until(0.., marker).void().parse_next(input)
}

/// Parse `start name end`, returning the name.
fn token<'i>(input: &mut &'i str, start: &str, end: &str) -> ModalResult<&'i str> {
    delimited(start, take_until(0.., end), end).parse_next(input)
}

fn skip_one_char(input: &str) -> &str {
    let mut chars = input.chars();
    chars.next();
    chars.as_str()
}
