//! Error types for the Categorist library.
//!
//! All errors are represented by the [`CategoristError`] enum. Engine errors
//! are raised synchronously at the point of violation, before any state is
//! mutated.
//!
//! # Examples
//!
//! ```
//! use categorist::error::{CategoristError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CategoristError::invalid_config("k_value must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Categorist operations.
#[derive(Error, Debug)]
pub enum CategoristError {
    /// A category with this name already exists.
    #[error("Category with name '{0}' already exists")]
    DuplicateCategory(String),

    /// Train/untrain referenced a category that was never added.
    #[error("Category with name '{0}' does not exist")]
    UnknownCategory(String),

    /// Untrain referenced content never trained into the category.
    #[error("Document is not found in '{category}' documents")]
    DocumentNotFound { category: String },

    /// Classification needs at least two categories, all of them trained.
    #[error("Insufficient training: {0}")]
    InsufficientTraining(String),

    /// Analysis-related errors (invalid token patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A model snapshot whose counters disagree with its contents
    #[error("Corrupt model: {0}")]
    CorruptModel(String),

    /// I/O errors (model and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with CategoristError.
pub type Result<T> = std::result::Result<T, CategoristError>;

impl CategoristError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CategoristError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        CategoristError::InvalidConfig(msg.into())
    }

    /// Create a new corrupt model error.
    pub fn corrupt_model<S: Into<String>>(msg: S) -> Self {
        CategoristError::CorruptModel(msg.into())
    }

    /// Create a new insufficient training error.
    pub fn insufficient_training<S: Into<String>>(msg: S) -> Self {
        CategoristError::InsufficientTraining(msg.into())
    }

    /// Create a new document not found error.
    pub fn document_not_found<S: Into<String>>(category: S) -> Self {
        CategoristError::DocumentNotFound {
            category: category.into(),
        }
    }
}
