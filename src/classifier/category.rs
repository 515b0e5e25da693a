//! Per-category statistics.

use ahash::AHashMap;

use crate::analysis::token::TokenCounts;
use crate::classifier::document::Document;
use crate::error::{CategoristError, Result};

/// A labeled class with its own document and token statistics.
///
/// `token_count` always equals the sum of the token table, and the table never
/// holds a zero entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    doc_count: u64,
    token_count: u64,
    tokens: AHashMap<String, u64>,
    docs: AHashMap<String, Document>,
    prior: f64,
}

impl Category {
    /// Create an empty category.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Category {
            name: name.into(),
            doc_count: 0,
            token_count: 0,
            tokens: AHashMap::new(),
            docs: AHashMap::new(),
            prior: 0.0,
        }
    }

    pub(crate) fn restore(
        name: String,
        doc_count: u64,
        token_count: u64,
        tokens: AHashMap<String, u64>,
        docs: AHashMap<String, Document>,
        prior: f64,
    ) -> Self {
        Category {
            name,
            doc_count,
            token_count,
            tokens,
            docs,
            prior,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of accepted training calls, net of untraining.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Total token occurrences held by this category.
    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// This category's share of all trained documents.
    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn tokens(&self) -> &AHashMap<String, u64> {
        &self.tokens
    }

    /// Occurrence count of a token, zero when absent.
    pub fn token(&self, token: &str) -> u64 {
        self.tokens.get(token).copied().unwrap_or(0)
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    pub fn docs(&self) -> &AHashMap<String, Document> {
        &self.docs
    }

    pub fn document(&self, key: &str) -> Option<&Document> {
        self.docs.get(key)
    }

    pub fn contains_document(&self, key: &str) -> bool {
        self.docs.contains_key(key)
    }

    /// Token table as an ordered mapping.
    pub fn sorted_tokens(&self) -> TokenCounts {
        self.tokens
            .iter()
            .map(|(token, count)| (token.clone(), *count))
            .collect()
    }

    pub(crate) fn set_prior(&mut self, prior: f64) {
        self.prior = prior;
    }

    pub(crate) fn add_token(&mut self, token: &str, count: u64) {
        *self.tokens.entry(token.to_string()).or_insert(0) += count;
        self.token_count += count;
    }

    /// Whether the token table holds at least `tokens`.
    pub(crate) fn holds_tokens(&self, tokens: &TokenCounts) -> bool {
        tokens.iter().all(|(token, count)| self.token(token) >= *count)
    }

    pub(crate) fn remove_token(&mut self, token: &str, count: u64) -> Result<()> {
        let held = self.token(token);
        let left = held.checked_sub(count).ok_or_else(|| {
            CategoristError::corrupt_model(format!(
                "category '{}' holds {held} of token '{token}', cannot remove {count}",
                self.name
            ))
        })?;
        let token_count = self.token_count.checked_sub(count).ok_or_else(|| {
            CategoristError::corrupt_model(format!(
                "category '{}' token_count {} cannot drop by {count}",
                self.name, self.token_count
            ))
        })?;

        if left == 0 {
            self.tokens.remove(token);
        } else if let Some(current) = self.tokens.get_mut(token) {
            *current = left;
        }
        self.token_count = token_count;
        Ok(())
    }

    /// Record one more training of `key`, inserting the document when new.
    ///
    /// Returns the document's token counts.
    pub(crate) fn admit_document<F>(&mut self, key: String, make: F) -> TokenCounts
    where
        F: FnOnce() -> Document,
    {
        let doc = self
            .docs
            .entry(key)
            .and_modify(Document::increment)
            .or_insert_with(make);
        self.doc_count += 1;
        doc.tokens().clone()
    }

    /// Drop one training of `key`, removing the document at multiplicity zero.
    pub(crate) fn release_document(&mut self, key: &str) -> Result<()> {
        let doc_count = self.doc_count.checked_sub(1).ok_or_else(|| {
            CategoristError::corrupt_model(format!("category '{}' has no documents", self.name))
        })?;
        let doc = self
            .docs
            .get_mut(key)
            .ok_or_else(|| CategoristError::document_not_found(self.name.as_str()))?;
        let left = doc.decrement().ok_or_else(|| {
            CategoristError::corrupt_model(format!(
                "document {key} in '{}' has multiplicity zero",
                self.name
            ))
        })?;

        if left == 0 {
            self.docs.remove(key);
        }
        self.doc_count = doc_count;
        Ok(())
    }
}
