//! # Categorist
//!
//! An incremental, multi-category Naive Bayes text classifier.
//!
//! ## Features
//!
//! - Incremental training and untraining without recomputing statistics
//! - Smoothed multinomial scoring with percentage-normalized results
//! - Optional auto-retraining of the winning category
//! - Configurable pattern-based tokenization
//! - Lossless JSON snapshots of the full model state
//!
//! ## Example
//!
//! ```
//! use categorist::prelude::*;
//!
//! let config = ClassifierConfig::default();
//! let mut bayes = Bayes::new(&config).unwrap();
//! bayes.add_category("positive").unwrap();
//! bayes.add_category("negative").unwrap();
//! bayes.train("positive", "good job").unwrap();
//! bayes.train("negative", "bad work").unwrap();
//! bayes.train("negative", "work").unwrap();
//!
//! let result = bayes.classify("bad words").unwrap();
//! assert_eq!(result.top_score().key, "negative");
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::classifier::{
        Bayes, Classification, Classifier, ModelSnapshot, Score, Strategy,
    };
    pub use crate::config::{AutoTrain, ClassifierConfig};
    pub use crate::error::{CategoristError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
