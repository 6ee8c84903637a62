//! admitgen CLI - command-line interface for the admit card generator.
//!
//! The binary wraps [`app::run_cli`]; the commands are also exposed as
//! library functions so integration tests can drive them directly.

pub mod app;

pub use app::{batch_command, run_cli, schedule_command, single_command};
