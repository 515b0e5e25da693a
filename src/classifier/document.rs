//! Trained documents and their identity keys.

use sha2::{Digest, Sha256};

use crate::analysis::token::TokenCounts;

/// Derive the identity key of a document from its content.
///
/// Identical content always yields the same key, which is how repeated
/// training of the same text is detected.
pub fn doc_key(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// A document held by a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    content: String,
    tokens: TokenCounts,
    multiplicity: u64,
}

impl Document {
    /// Create a document trained once.
    pub fn new<S: Into<String>>(content: S, tokens: TokenCounts) -> Self {
        Self::with_multiplicity(content, tokens, 1)
    }

    /// Create a document with an explicit multiplicity (used when restoring).
    pub fn with_multiplicity<S: Into<String>>(
        content: S,
        tokens: TokenCounts,
        multiplicity: u64,
    ) -> Self {
        Document {
            content: content.into(),
            tokens,
            multiplicity,
        }
    }

    /// The original text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Token occurrence counts of this document.
    pub fn tokens(&self) -> &TokenCounts {
        &self.tokens
    }

    /// Number of times this content is currently trained into its category.
    pub fn multiplicity(&self) -> u64 {
        self.multiplicity
    }

    /// The identity key of this document.
    pub fn key(&self) -> String {
        doc_key(&self.content)
    }

    pub(crate) fn increment(&mut self) {
        self.multiplicity += 1;
    }

    /// Returns the multiplicity left after decrementing, or `None` when it
    /// is already zero.
    pub(crate) fn decrement(&mut self) -> Option<u64> {
        self.multiplicity = self.multiplicity.checked_sub(1)?;
        Some(self.multiplicity)
    }
}
