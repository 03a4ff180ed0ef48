pub mod error;
pub mod load;
pub mod template;
pub mod types;
pub mod vars;

pub use error::LoadError;
pub use load::{load_json_file, load_json_str};
pub use template::{
    CheckReport, Placeholder, SubstituteOptions, Unresolved, check, compute_suggestions, fill,
    flatten, reset_default, reset_placeholders, scan_placeholders, substitute,
};
pub use types::{Map, Value};
pub use vars::{VarStack, env_source};

/// Creates a `Value::Map` from key-value pairs, keeping their order.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans, strings, vectors, or nested `map!` values.
///
/// # Example
///
/// ```
/// use varfill::{Value, map};
///
/// let data = map! { "count" => 3, "user" => map! { "name" => "Alice" } };
/// let user = data.as_map().unwrap().get("user").unwrap();
/// assert_eq!(user.as_map().unwrap().get("name"), Some(&Value::from("Alice")));
/// ```
#[macro_export]
macro_rules! map {
    {} => {
        $crate::Value::Map($crate::Map::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Map::new();
            $(
                map.insert($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            $crate::Value::Map(map)
        }
    };
}
