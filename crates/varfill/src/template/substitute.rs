//! Flattening substitution.
//!
//! Walks a nested [`Value`], naming every scalar leaf by its dotted path, and
//! replaces the matching placeholders in a template with the leaf's text.

use tracing::{debug, trace};

use crate::template::SubstituteOptions;
use crate::types::Value;

/// Fill every placeholder in `template` that names a scalar leaf of `data`.
///
/// Leaves are applied in walk order (maps by insertion order, lists by index),
/// each replacing all exact occurrences of its placeholder in the text built so
/// far. Placeholders without data are left as they are, data without
/// placeholders is ignored, and containers nested at or beyond
/// `options.max_depth()` are skipped. This function never fails.
///
/// # Example
///
/// ```
/// use varfill::{SubstituteOptions, map, substitute};
///
/// let data = map! { "user" => map! { "city" => "Tatooine" } };
/// let out = substitute("{user.city}", &data, &SubstituteOptions::default());
/// assert_eq!(out, "Tatooine");
/// ```
pub fn substitute(template: &str, data: &Value, options: &SubstituteOptions) -> String {
    flatten(data, options)
        .into_iter()
        .fold(template.to_string(), |text, (path, replacement)| {
            let needle = options.placeholder(&path);
            // An empty needle would match between every character.
            if needle.is_empty() || !text.contains(&needle) {
                return text;
            }
            trace!(path = %path, "substituting placeholder");
            text.replace(&needle, &replacement)
        })
}

/// Substitute with the default options: `{`/`}` markers and depth 3.
pub fn fill(template: &str, data: &Value) -> String {
    substitute(template, data, &SubstituteOptions::default())
}

/// List the `(path, text)` pairs [`substitute`] applies, in the order it applies them.
///
/// # Example
///
/// ```
/// use varfill::{SubstituteOptions, flatten, map};
///
/// let data = map! { "a" => 1, "b" => map! { "c" => true }, "d" => vec!["x"] };
/// let leaves = flatten(&data, &SubstituteOptions::default());
/// assert_eq!(
///     leaves,
///     vec![
///         ("a".to_string(), "1".to_string()),
///         ("b.c".to_string(), "true".to_string()),
///         ("d.0".to_string(), "x".to_string()),
///     ]
/// );
/// ```
pub fn flatten(data: &Value, options: &SubstituteOptions) -> Vec<(String, String)> {
    let mut leaves = Vec::new();
    collect_leaves(data, options.path_prefix(), 1, options.max_depth(), &mut leaves);
    leaves
}

fn collect_leaves(
    data: &Value,
    prefix: Option<&str>,
    depth: usize,
    max_depth: usize,
    leaves: &mut Vec<(String, String)>,
) {
    for (key, value) in data.entries() {
        let path = match prefix {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}.{key}"),
            _ => key,
        };

        match value {
            Value::Null => {}
            Value::Map(_) | Value::List(_) => {
                if depth < max_depth {
                    collect_leaves(value, Some(path.as_str()), depth + 1, max_depth, leaves);
                } else {
                    debug!(path = %path, depth, max_depth, "skipping container beyond depth limit");
                }
            }
            Value::Bool(_) | Value::Number(_) | Value::Float(_) | Value::String(_) => {
                leaves.push((path, value.to_string()));
            }
        }
    }
}
