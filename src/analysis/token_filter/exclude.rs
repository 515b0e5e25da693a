//! Exclusion filter implementation.
//!
//! Removes every token whose text appears in a configured exclusion list.
//! Unlike a language stop word list, the list is empty unless configured.
//!
//! # Examples
//!
//! ```
//! use categorist::analysis::token_filter::Filter;
//! use categorist::analysis::token_filter::exclude::ExcludeFilter;
//! use categorist::analysis::token::Token;
//!
//! let filter = ExcludeFilter::from_words(vec!["are", "at", "by"]);
//! let tokens = vec![
//!     Token::new("how", 0),
//!     Token::new("are", 1),
//!     Token::new("you", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "how");
//! assert_eq!(result[1].text, "you");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that drops excluded tokens from the token stream.
#[derive(Clone, Debug, Default)]
pub struct ExcludeFilter {
    words: Arc<HashSet<String>>,
}

impl ExcludeFilter {
    /// Create a new exclusion filter from a set of words.
    pub fn with_words(words: HashSet<String>) -> Self {
        ExcludeFilter {
            words: Arc::new(words),
        }
    }

    /// Create a new exclusion filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_words(words.into_iter().map(Into::into).collect())
    }

    /// Check if a word is excluded.
    pub fn is_excluded(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of excluded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the exclusion list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Filter for ExcludeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        Ok(Box::new(tokens.filter(move |token| !words.contains(&token.text))))
    }

    fn name(&self) -> &'static str {
        "exclude"
    }
}
