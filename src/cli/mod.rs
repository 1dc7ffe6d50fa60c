pub mod commands;
pub mod context;
pub mod format;
pub mod output;
mod shell;
pub mod style;
pub mod table;
pub mod views;

pub use shell::{run_cli, SCRIPT_ENV};
