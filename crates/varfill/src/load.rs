//! Loading data values from JSON.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::types::Value;

/// Origin reported for JSON that did not come from a file.
pub const INPUT_ORIGIN: &str = "<input>";

/// Parse a JSON document into a [`Value`].
///
/// Object key order is preserved. Any JSON document is accepted; a scalar
/// root is valid data that simply fills nothing.
///
/// # Example
///
/// ```
/// use varfill::{fill, load_json_str};
///
/// let data = load_json_str(r#"{"user": {"city": "Tatooine"}}"#).unwrap();
/// assert_eq!(fill("{user.city}", &data), "Tatooine");
/// ```
pub fn load_json_str(content: &str) -> Result<Value, LoadError> {
    parse_json(content, INPUT_ORIGIN)
}

/// Read and parse a JSON file into a [`Value`].
pub fn load_json_file(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = parse_json(&content, &path.display().to_string())?;
    debug!(path = %path.display(), "loaded data file");
    Ok(value)
}

fn parse_json(content: &str, origin: &str) -> Result<Value, LoadError> {
    serde_json::from_str::<serde_json::Value>(content)
        .map(Value::from)
        .map_err(|e| {
            let full = e.to_string();
            // serde_json appends " at line L column C", which the error carries separately.
            let message = full
                .split(" at line ")
                .next()
                .unwrap_or(full.as_str())
                .to_string();
            LoadError::Json {
                origin: origin.to_string(),
                line: e.line(),
                column: e.column(),
                message,
            }
        })
}
