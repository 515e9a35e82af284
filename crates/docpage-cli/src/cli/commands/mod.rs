//! CLI command handlers, one per file.

mod fetch;
mod load;
mod target;

pub use fetch::run_fetch;
pub use load::run_load;
pub use target::run_target;
