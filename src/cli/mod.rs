//! CLI argument parsing and command handling.

mod args;
pub mod help;

pub use args::{Cli, Command, ConfigAction, FetchArgs};
