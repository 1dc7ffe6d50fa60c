use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::unit::Unit;

/// Unified error type for domain, storage, and configuration layers.
///
/// Report computation itself never fails; these variants cover record
/// parsing, persistence, and caller-supplied arguments.
#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Cannot convert {from} into {to}: units measure different things")]
    UnitFamilyMismatch { from: Unit, to: Unit },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, PantryError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] PantryError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for PantryError {
    fn from(err: std::io::Error) -> Self {
        PantryError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for PantryError {
    fn from(err: serde_json::Error) -> Self {
        PantryError::StorageError(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Command(err.to_string())
    }
}
