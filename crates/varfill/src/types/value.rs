use super::Map;

/// A data value that can fill placeholders in a template.
///
/// The `Value` enum is the single place where the shape of incoming data is
/// decided: scalars are substituted, containers are walked, and `Null` is
/// ignored everywhere.
///
/// # Example
///
/// ```
/// use varfill::{Value, map};
///
/// // Numbers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "Luke".into();
///
/// // Nested data
/// let user = map! { "name" => "Luke", "home" => map! { "city" => "Tatooine" } };
/// assert!(user.is_container());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or unrecognized data. Never substituted.
    #[default]
    Null,

    /// A boolean, rendered as `true` or `false`.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// An ordered mapping from key to value.
    Map(Map),

    /// A sequence of values, addressed by index.
    List(Vec<Value>),
}

impl Value {
    /// Returns true for `Bool`, `Number`, `Float` and `String`.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Number(_) | Value::Float(_) | Value::String(_)
        )
    }

    /// Returns true for `Map` and `List`.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_))
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// True for `Null` and for strings that are empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Iterate over `(key, value)` entries of a container.
    ///
    /// Maps yield their keys in insertion order, lists yield their indices.
    /// Scalars and `Null` have no entries.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (String, &Value)> + '_> {
        match self {
            Value::Map(m) => Box::new(m.iter().map(|(k, v)| (k.to_string(), v))),
            Value::List(items) => Box::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v)),
            ),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::Float(_)
            | Value::String(_) => Box::new(std::iter::empty()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Map(m) => write!(f, "[map of {}]", m.len()),
            Value::List(items) => write!(f, "[list of {}]", items.len()),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(object) => {
                Value::Map(object.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
