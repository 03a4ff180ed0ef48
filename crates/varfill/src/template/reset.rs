//! Placeholder reset: erase placeholders that were never filled.

use tracing::debug;

use crate::template::options::{DEFAULT_END, DEFAULT_START};
use crate::template::scan::scan_placeholders;

/// Remove every placeholder whose name is a plain path from `template`.
///
/// Tokens are found with [`scan_placeholders`]. Those with names made only of
/// ASCII letters, digits, `_` and `.` are removed everywhere they occur; all
/// other `start…end` text (for example `{not valid}` or JSON-like blocks)
/// stays. Removal repeats until nothing more can be removed, so applying the
/// function twice gives the same result as applying it once. Empty markers
/// leave the template unchanged.
///
/// # Example
///
/// ```
/// use varfill::reset_placeholders;
///
/// let out = reset_placeholders("{valid.name} {not valid}", "{", "}");
/// assert_eq!(out, " {not valid}");
/// ```
pub fn reset_placeholders(template: &str, start: &str, end: &str) -> String {
    let mut text = template.to_string();
    loop {
        let mut tokens: Vec<String> = Vec::new();
        for placeholder in scan_placeholders(&text, start, end) {
            if placeholder.is_identifier() && !tokens.iter().any(|t| t == placeholder.raw) {
                tokens.push(placeholder.raw.to_string());
            }
        }
        if tokens.is_empty() {
            return text;
        }

        debug!(count = tokens.len(), "removing unresolved placeholders");
        text = tokens
            .iter()
            .fold(text, |text, token| text.replace(token.as_str(), ""));
    }
}

/// [`reset_placeholders`] with the default `{` and `}` markers.
pub fn reset_default(template: &str) -> String {
    reset_placeholders(template, DEFAULT_START, DEFAULT_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_that_exposes_a_new_token_is_repeated() {
        // "{x}" sits inside the rejected "{a{x}" span, and removing it forms "{ab}".
        assert_eq!(reset_default("{a{x}b} {x}"), " ");
    }

    #[test]
    fn repeated_tokens_are_all_removed() {
        assert_eq!(reset_default("{a}-{a}-{a}"), "--");
    }
}
