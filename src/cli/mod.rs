pub mod args;
pub mod commands;

pub use args::{Cli, Commands, SourceArgs};
pub use commands::{lookup_summary, run, setup_logging};
