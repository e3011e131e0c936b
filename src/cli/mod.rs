//! CLI commands
//!
//! Command implementations for the `clarity` binary.

mod catalog;
mod list;
mod notify;
mod render;
mod status;
pub mod style;
mod submit;

pub use catalog::run_catalog;
pub use list::run_list;
pub use status::run_status;
pub use submit::{SubmitArgs, run_submit};
