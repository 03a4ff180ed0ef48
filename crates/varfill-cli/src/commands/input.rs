//! Arguments shared by the commands: where the template and the data come from.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Result};
use tracing::{debug, warn};
use varfill::template::{DEFAULT_END, DEFAULT_MAX_DEPTH, DEFAULT_START};
use varfill::{env_source, load_json_file, LoadError, Map, SubstituteOptions, Value, VarStack};

use crate::output::JsonDiagnostic;

/// Template text and its placeholder markers.
#[derive(Debug, clap::Args)]
pub struct TemplateArgs {
    /// Template string
    #[arg(long, conflicts_with = "template_file", required_unless_present = "template_file")]
    pub template: Option<String>,

    /// Read the template from a file
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Placeholder start marker
    #[arg(long, env = "VARFILL_START", default_value = DEFAULT_START)]
    pub start: String,

    /// Placeholder end marker
    #[arg(long, env = "VARFILL_END", default_value = DEFAULT_END)]
    pub end: String,
}

impl TemplateArgs {
    /// Return the template text from the argument or the file.
    pub fn read(&self) -> Result<String> {
        match (&self.template, &self.template_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_to_string(path)
                .into_diagnostic()
                .map_err(|e| miette!("Cannot read template file {}: {}", path.display(), e)),
            (None, None) => Err(miette!("either --template or --template-file is required")),
        }
    }
}

/// Data sources and substitution settings.
#[derive(Debug, clap::Args)]
pub struct DataArgs {
    /// JSON data files (repeatable, earlier files take priority)
    #[arg(long = "data")]
    pub data: Vec<PathBuf>,

    /// Parameters in name=value format (repeatable, highest priority)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Also resolve names from environment variables (lowest priority)
    #[arg(long)]
    pub env: bool,

    /// Match bare names instead of delimited placeholders
    #[arg(long)]
    pub simple_match: bool,

    /// Maximum nesting depth of data to walk
    #[arg(long, env = "VARFILL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl DataArgs {
    /// Build the variable stack: parameters, then data files in order, then the environment.
    pub fn var_stack(&self) -> Result<VarStack> {
        let mut stack = VarStack::new();

        let params: Map = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), param_value(v)))
            .collect();
        stack.push_source("params", params);

        for path in &self.data {
            let value = load_data_file(path)?;
            stack.push_source(path.display().to_string(), into_source(path, value));
        }

        if self.env {
            stack.push_source("env", env_source());
        }

        debug!(sources = ?stack.source_names().collect::<Vec<_>>(), "built variable stack");
        Ok(stack)
    }

    /// Substitution options for the given markers.
    pub fn options(&self, template: &TemplateArgs) -> SubstituteOptions {
        SubstituteOptions::builder()
            .simple_match(self.simple_match)
            .start_marker(template.start.clone())
            .end_marker(template.end.clone())
            .max_depth(self.max_depth)
            .build()
    }
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Integers become numbers, everything else stays a string.
fn param_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(raw),
    }
}

fn load_data_file(path: &Path) -> Result<Value> {
    match load_json_file(path) {
        Ok(value) => Ok(value),
        Err(err @ LoadError::Json { .. }) => {
            let content = read_to_string(path).unwrap_or_default();
            Err(JsonDiagnostic::from_load_error(path, &content, &err).into())
        }
        Err(err) => Err(miette!("{}", err)),
    }
}

/// Turn a loaded document into a stack source. Lists become index-keyed maps.
fn into_source(path: &Path, value: Value) -> Map {
    match value {
        Value::Map(map) => map,
        Value::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Float(_) | Value::String(_) => {
            warn!(path = %path.display(), "data file has no object or array at its root, ignoring");
            Map::new()
        }
    }
}
