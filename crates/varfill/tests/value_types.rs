//! Tests for Value and Map.

use varfill::{Map, Value, map};

#[test]
fn value_from_primitives() {
    assert_eq!(Value::from(3), Value::Number(3));
    assert_eq!(Value::from(3_u64), Value::Number(3));
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert_eq!(Value::from(2.5), Value::Float(2.5));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("s"), Value::String("s".into()));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn value_kinds() {
    assert!(Value::from(1).is_scalar());
    assert!(!Value::Null.is_scalar());
    assert!(!Value::Null.is_container());
    assert!(Value::from(vec![1, 2]).is_container());
    assert!(map!().is_container());
}

#[test]
fn value_accessors() {
    assert_eq!(Value::from(5).as_number(), Some(5));
    assert_eq!(Value::from("x").as_number(), None);
    assert_eq!(Value::from("x").as_string(), Some("x"));
    assert!(Value::from(1).as_map().is_none());
}

#[test]
fn blank_values() {
    assert!(Value::Null.is_blank());
    assert!(Value::from("  \t").is_blank());
    assert!(!Value::from("a").is_blank());
    assert!(!Value::from(0).is_blank());
}

#[test]
fn display_of_values() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(Value::from(10.0).to_string(), "10");
    assert_eq!(Value::from(vec![1, 2]).to_string(), "[list of 2]");
}

#[test]
fn entries_of_containers() {
    let list = Value::from(vec!["a", "b"]);
    let keys: Vec<String> = list.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["0", "1"]);

    let data = map! { "x" => 1, "y" => 2 };
    let keys: Vec<String> = data.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["x", "y"]);

    assert_eq!(Value::from("scalar").entries().count(), 0);
}

#[test]
fn map_insert_replaces_in_place() {
    let mut map = Map::new();
    assert_eq!(map.insert("a", 1), None);
    map.insert("b", 2);
    assert_eq!(map.insert("a", 3), Some(Value::Number(1)));

    let entries: Vec<(String, Value)> = map.clone().into_iter().collect();
    assert_eq!(
        entries,
        vec![("a".to_string(), Value::Number(3)), ("b".to_string(), Value::Number(2))]
    );
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("b"));
    assert!(!map.is_empty());
}

#[test]
fn map_from_iterator_keeps_last_value_for_duplicates() {
    let map: Map = [("k", 1), ("j", 2), ("k", 3)].into_iter().collect();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["k", "j"]);
    assert_eq!(map.get("k"), Some(&Value::Number(3)));
}
