//! Engine core: error types, filesystem helpers, and the report services.

pub mod errors;
pub mod services;
pub mod utils;
