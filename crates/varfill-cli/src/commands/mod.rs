//! CLI command implementations.

mod check;
mod input;
mod render;
mod reset;

pub use check::{run_check, CheckArgs};
pub use render::{run_render, RenderArgs};
pub use reset::{run_reset, ResetArgs};
