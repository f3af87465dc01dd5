//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`InvalidInput`] thrown when a value cannot be interpreted.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidInput`]: EngineError::InvalidInput
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
