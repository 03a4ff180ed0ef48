//! Variable stack for resolving names against several ordered sources.

use std::env;

use crate::types::{Map, Value};

/// A named source of variables.
#[derive(Debug, Clone, PartialEq)]
struct Source {
    name: String,
    vars: Map,
}

/// An ordered list of variable sources where the first source holding a name wins.
///
/// Sources are passed in explicitly, so the same stack can merge command-line
/// parameters, data files and environment variables without any global state.
///
/// # Example
///
/// ```
/// use varfill::{Map, Value, VarStack};
///
/// let mut stack = VarStack::new();
/// stack.push_source("params", [("name", "Luke")].into_iter().collect::<Map>());
/// stack.push_source("defaults", [("name", "Anon"), ("planet", "Tatooine")].into_iter().collect::<Map>());
///
/// assert_eq!(stack.get("name"), Some(&Value::from("Luke")));
/// assert_eq!(stack.source_of("planet"), Some("defaults"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarStack {
    sources: Vec<Source>,
}

impl VarStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower priority than every source already pushed.
    pub fn push_source(&mut self, name: impl Into<String>, vars: Map) {
        self.sources.push(Source {
            name: name.into(),
            vars,
        });
    }

    /// Builder-style [`push_source`](Self::push_source).
    pub fn with_source(mut self, name: impl Into<String>, vars: Map) -> Self {
        self.push_source(name, vars);
        self
    }

    /// Look up a name in each source in order.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.sources.iter().find_map(|s| s.vars.get(name))
    }

    /// Look up a name, falling back to `default` when it is missing, `Null`,
    /// or a blank string.
    pub fn get_or(&self, name: &str, default: impl Into<Value>) -> Value {
        match self.get(name) {
            Some(value) if !value.is_blank() => value.clone(),
            _ => default.into(),
        }
    }

    /// The name of the source that answers for `name`.
    pub fn source_of(&self, name: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.vars.contains_key(name))
            .map(|s| s.name.as_str())
    }

    /// Names of the sources in priority order.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sources.iter().all(|s| s.vars.is_empty())
    }

    /// Merge all sources into one map value usable as substitution data.
    ///
    /// Each key holds the value of the first source containing it. Keys are
    /// ordered by first appearance.
    pub fn to_value(&self) -> Value {
        let mut merged = Map::new();
        for source in &self.sources {
            for (key, value) in source.vars.iter() {
                if !merged.contains_key(key) {
                    merged.insert(key, value.clone());
                }
            }
        }
        Value::Map(merged)
    }
}

/// Build a source from the process environment.
///
/// Variables whose names or values are not valid Unicode are skipped.
pub fn env_source() -> Map {
    env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> Map {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn first_source_wins() {
        let stack = VarStack::new()
            .with_source("a", source(&[("x", "1")]))
            .with_source("b", source(&[("x", "2"), ("y", "3")]));
        assert_eq!(stack.get("x"), Some(&Value::from("1")));
        assert_eq!(stack.get("y"), Some(&Value::from("3")));
        assert_eq!(stack.get("z"), None);
    }

    #[test]
    fn get_or_treats_blank_as_missing() {
        let stack = VarStack::new().with_source("a", source(&[("blank", "  "), ("set", "v")]));
        assert_eq!(stack.get_or("blank", "fallback"), Value::from("fallback"));
        assert_eq!(stack.get_or("missing", 7), Value::Number(7));
        assert_eq!(stack.get_or("set", "fallback"), Value::from("v"));
    }

    #[test]
    fn merged_value_keeps_first_appearance_order() {
        let stack = VarStack::new()
            .with_source("a", source(&[("b", "1"), ("a", "2")]))
            .with_source("b", source(&[("c", "3"), ("b", "4")]));
        let merged = stack.to_value();
        let map = merged.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(map.get("b"), Some(&Value::from("1")));
    }

    #[test]
    fn empty_stack() {
        let stack = VarStack::new().with_source("empty", Map::new());
        assert!(stack.is_empty());
        assert_eq!(stack.source_names().collect::<Vec<_>>(), vec!["empty"]);
    }
}
