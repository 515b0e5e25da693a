//! Configuration for the classifier.
//!
//! Controls the smoothing constant, the auto-retrain policy and the token
//! patterns and exclusion list the analyzer is built from.
//!
//! # Examples
//!
//! ```
//! use categorist::config::{AutoTrain, ClassifierConfig};
//!
//! let config = ClassifierConfig::default();
//! assert_eq!(config.k_value, 1.0);
//! assert_eq!(config.auto_train, AutoTrain::Off);
//!
//! let config = ClassifierConfig::from_json_str(
//!     r#"{ "auto_train": "unique", "exclude_tokens": ["are", "at", "by"] }"#,
//! ).unwrap();
//! assert_eq!(config.auto_train, AutoTrain::Unique);
//! assert_eq!(config.exclude_tokens.len(), 3);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::{ExcludeFilter, LowercaseFilter};
use crate::analysis::tokenizer::PatternTokenizer;
use crate::error::{CategoristError, Result};

/// Policy for feeding a classified document back into its winning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoTrain {
    /// Never retrain.
    #[default]
    Off,
    /// Always train the winning category with the classified content.
    #[serde(alias = "continues")]
    Continuous,
    /// Train the winning category only if it does not hold the content yet.
    Unique,
}

/// Regular expression groups used by the tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPatterns {
    /// Matches replaced by whitespace before tokens are extracted.
    #[serde(default)]
    pub minus: Vec<String>,
    /// Matches that become tokens.
    #[serde(default)]
    pub plus: Vec<String>,
}

impl Default for TokenPatterns {
    fn default() -> Self {
        Self {
            minus: vec![r"[\s]+".to_string(), r"(@[\w\d]+)".to_string()],
            plus: vec![
                r"[\p{L}0-9-]{2,}".to_string(),
                r"[!?]".to_string(),
                r"[:)(;|-]{2,3}".to_string(),
            ],
        }
    }
}

/// Configuration for a classifier and its analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Auto-retrain policy applied after each classification.
    pub auto_train: AutoTrain,
    /// Additive smoothing constant.
    pub k_value: f64,
    /// Tokenizer pattern groups.
    pub token_patterns: TokenPatterns,
    /// Tokens dropped after tokenization.
    pub exclude_tokens: Vec<String>,
    /// Fold tokens to lowercase before exclusion.
    pub lowercase: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            auto_train: AutoTrain::Off,
            k_value: 1.0,
            token_patterns: TokenPatterns::default(),
            exclude_tokens: Vec::new(),
            lowercase: false,
        }
    }
}

impl ClassifierConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Set the auto-retrain policy.
    pub fn with_auto_train(mut self, auto_train: AutoTrain) -> Self {
        self.auto_train = auto_train;
        self
    }

    /// Set the exclusion list.
    pub fn with_exclude_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.k_value.is_finite() || self.k_value <= 0.0 {
            return Err(CategoristError::invalid_config(format!(
                "k_value must be a positive finite number, got {}",
                self.k_value
            )));
        }
        if self.token_patterns.plus.is_empty() {
            return Err(CategoristError::invalid_config(
                "at least one plus token pattern is required",
            ));
        }
        Ok(())
    }

    /// Build the analyzer described by this configuration.
    ///
    /// Precedence: minus patterns, plus patterns, lowercasing, exclusion.
    pub fn build_analyzer(&self) -> Result<PipelineAnalyzer> {
        let tokenizer =
            PatternTokenizer::new(&self.token_patterns.minus, &self.token_patterns.plus)?;

        let mut analyzer = PipelineAnalyzer::new(Arc::new(tokenizer));
        if self.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if !self.exclude_tokens.is_empty() {
            analyzer = analyzer.add_filter(Arc::new(ExcludeFilter::from_words(
                self.exclude_tokens.iter().cloned(),
            )));
        }
        Ok(analyzer)
    }
}
