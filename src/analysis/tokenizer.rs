//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`pattern::PatternTokenizer`] - Strips text with "minus" patterns, then
//!   extracts tokens with "plus" patterns
//!
//! # Examples
//!
//! ```
//! use categorist::analysis::tokenizer::Tokenizer;
//! use categorist::analysis::tokenizer::pattern::PatternTokenizer;
//!
//! let tokenizer = PatternTokenizer::new(&[r"\s+"], &[r"\w{2,}"]).unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("good job").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod pattern;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared behind an `Arc`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub use pattern::PatternTokenizer;
