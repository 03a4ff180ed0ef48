//! Reporting of placeholders left unresolved after substitution.

use serde::Serialize;
use strsim::levenshtein;

use crate::template::scan::scan_placeholders;
use crate::template::substitute::{flatten, substitute};
use crate::template::SubstituteOptions;
use crate::types::Value;

/// The result of [`check`]: the rendered text and what it still contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// The template after substitution.
    pub rendered: String,
    /// Path-like placeholders still present, in order of first occurrence.
    pub unresolved: Vec<Unresolved>,
}

impl CheckReport {
    /// True when every path-like placeholder was filled.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// A placeholder that substitution did not fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unresolved {
    pub name: String,
    /// The data has a leaf at this path, but it is nested beyond the depth limit.
    pub beyond_depth: bool,
    /// Known leaf paths with similar names, closest first.
    pub suggestions: Vec<String>,
}

/// Substitute `data` into `template` and report the placeholders that remain.
///
/// Only placeholders whose names are plain paths are reported, the same ones
/// [`reset_placeholders`](crate::reset_placeholders) would remove.
///
/// # Example
///
/// ```
/// use varfill::{SubstituteOptions, check, map};
///
/// let data = map! { "name" => "Luke" };
/// let report = check("Hello {nme}", &data, &SubstituteOptions::default());
/// assert!(!report.is_complete());
/// assert_eq!(report.unresolved[0].name, "nme");
/// assert_eq!(report.unresolved[0].suggestions, vec!["name"]);
/// ```
pub fn check(template: &str, data: &Value, options: &SubstituteOptions) -> CheckReport {
    let rendered = substitute(template, data, options);

    let reachable: Vec<String> = flatten(data, options)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    let all_paths: Vec<String> = flatten(data, &options.with_max_depth(usize::MAX))
        .into_iter()
        .map(|(path, _)| path)
        .collect();

    let mut unresolved: Vec<Unresolved> = Vec::new();
    for placeholder in scan_placeholders(&rendered, options.start_marker(), options.end_marker()) {
        if !placeholder.is_identifier() || unresolved.iter().any(|u| u.name == placeholder.name) {
            continue;
        }
        let name = placeholder.name.to_string();
        unresolved.push(Unresolved {
            beyond_depth: all_paths.contains(&name),
            suggestions: compute_suggestions(&name, &reachable),
            name,
        });
    }

    CheckReport {
        rendered,
        unresolved,
    }
}

/// Compute typo suggestions for `name` from `available` path names.
///
/// Names up to three characters allow an edit distance of 1, longer names 2.
/// Exact matches are excluded. At most three suggestions are returned,
/// closest first.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
