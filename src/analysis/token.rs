//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline. The
//! classifier itself only ever sees the folded form, [`TokenCounts`], which
//! maps each token text to its number of occurrences in one document.
//!
//! # Examples
//!
//! ```
//! use categorist::analysis::token::{Token, count_tokens};
//!
//! let tokens = vec![Token::new("good", 0), Token::new("job", 1), Token::new("good", 2)];
//! let counts = count_tokens(Box::new(tokens.into_iter()));
//!
//! assert_eq!(counts.get("good"), Some(&2));
//! assert_eq!(counts.get("job"), Some(&1));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the analyzed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the analyzed text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token without offset information.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Replace the text of this token, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Token text mapped to its occurrence count.
///
/// Ordered so that anything derived from it (snapshots, debug output) is
/// deterministic.
pub type TokenCounts = BTreeMap<String, u64>;

/// Fold a token stream into per-token occurrence counts.
pub fn count_tokens(tokens: TokenStream) -> TokenCounts {
    let mut counts = TokenCounts::new();
    for token in tokens {
        *counts.entry(token.text).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);

        let token = Token::with_offsets("world", 1, 6, 11).with_text("World");
        assert_eq!(token.text, "World");
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_count_tokens() {
        let tokens = vec![
            Token::new("?", 0),
            Token::new("how", 1),
            Token::new("?", 2),
        ];
        let counts = count_tokens(Box::new(tokens.into_iter()));

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["?"], 2);
        assert_eq!(counts["how"], 1);
    }

    #[test]
    fn test_count_empty_stream() {
        let counts = count_tokens(Box::new(std::iter::empty()));
        assert!(counts.is_empty());
    }
}
