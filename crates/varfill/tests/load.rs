//! Tests for loading data from JSON and the error types involved.

use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use varfill::{LoadError, Map, Value, VarStack, fill, load_json_file, load_json_str, map};

// =========================================================================
// JSON conversion
// =========================================================================

#[test]
fn object_key_order_is_preserved() {
    let data = load_json_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let keys: Vec<&str> = data.as_map().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn json_kinds_map_to_values() {
    let data = load_json_str(
        r#"{"s": "text", "i": 7, "f": 0.5, "big": 18446744073709551615, "b": true, "n": null, "l": [1]}"#,
    )
    .unwrap();
    let expected = map! {
        "s" => "text",
        "i" => 7,
        "f" => 0.5,
        "big" => 18446744073709551615_u64,
        "b" => true,
        "n" => Value::Null,
        "l" => vec![1],
    };
    assert_eq!(data, expected);
}

#[test]
fn loaded_data_fills_templates() {
    let data = load_json_str(r#"{"user": {"name": "Luke", "tags": ["jedi"]}}"#).unwrap();
    assert_eq!(fill("{user.name} the {user.tags.0}", &data), "Luke the jedi");
}

#[test]
fn scalar_root_is_accepted() {
    assert_eq!(load_json_str("42").unwrap(), Value::Number(42));
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn malformed_json_reports_location() {
    let err = load_json_str("{\n  \"a\": }").unwrap_err();
    match err {
        LoadError::Json {
            origin,
            line,
            column,
            ..
        } => {
            assert_eq!(origin, "<input>");
            assert_eq!(line, 2);
            assert!(column > 0);
        }
        LoadError::Io { .. } => panic!("expected Json error"),
    }
}

#[test]
fn load_error_io_displays_path() {
    let err = LoadError::Io {
        path: PathBuf::from("/path/to/data.json"),
        source: io::Error::new(ErrorKind::NotFound, "file not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/path/to/data.json"));
    assert!(msg.contains("file not found"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"planet": "Tatooine"}}"#).unwrap();
    file.flush().unwrap();

    let data = load_json_file(file.path()).unwrap();
    assert_eq!(fill("{planet}", &data), "Tatooine");
}

#[test]
fn file_errors_name_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    file.flush().unwrap();

    let err = load_json_file(file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with(&file.path().display().to_string()));
}

// =========================================================================
// Variable stack as data
// =========================================================================

#[test]
fn var_stack_feeds_substitution() {
    let params: Map = [("name", "Luke")].into_iter().collect();
    let Value::Map(file) = load_json_str(r#"{"name": "Anon", "home": {"planet": "Tatooine"}}"#)
        .unwrap()
    else {
        panic!("expected a map");
    };

    let stack = VarStack::new()
        .with_source("params", params)
        .with_source("file", file);
    let data = stack.to_value();
    assert_eq!(fill("{name} of {home.planet}", &data), "Luke of Tatooine");
}
