//! Error types for Scape operations.
//!
//! This module provides the main error type [`ScapeError`] which wraps
//! the model errors raised by generation and serialization together with the
//! failures of the surrounding I/O and configuration.

use std::io;

use thiserror::Error;

use scape_core::error::ModelError;

/// The main error type for Scape operations.
#[derive(Debug, Error)]
pub enum ScapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),
}
