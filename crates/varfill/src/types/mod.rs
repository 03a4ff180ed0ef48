mod map;
mod value;

pub use map::Map;
pub use value::Value;
