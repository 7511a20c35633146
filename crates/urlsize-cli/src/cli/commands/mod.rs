//! CLI command handlers.

mod inspect;

pub use inspect::run_inspect;
