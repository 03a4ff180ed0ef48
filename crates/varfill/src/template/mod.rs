//! Placeholder substitution and reset.
//!
//! [`substitute`] fills `{path}` placeholders from a nested [`Value`](crate::Value),
//! [`reset_placeholders`] erases the ones nothing filled, and [`check`] reports
//! them. None of these functions fail: malformed input degrades to returning
//! the text unchanged.

mod check;
mod options;
mod reset;
mod scan;
mod substitute;

pub use check::{CheckReport, Unresolved, check, compute_suggestions};
pub use options::{DEFAULT_END, DEFAULT_MAX_DEPTH, DEFAULT_START, SubstituteOptions};
pub use reset::{reset_default, reset_placeholders};
pub use scan::{Placeholder, is_path_name, scan_placeholders};
pub use substitute::{fill, flatten, substitute};
