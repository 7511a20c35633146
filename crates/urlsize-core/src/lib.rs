pub mod config;
pub mod logging;

pub mod error;
pub mod format;
pub mod probe;
pub mod report;
pub mod source;
pub mod target;
