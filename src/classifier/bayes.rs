//! Incremental multinomial Naive Bayes engine.
//!
//! Statistics are updated in place on every train/untrain call: each category
//! keeps its own token table and counters, and the engine keeps the global
//! document, token and distinct-token counts in step with them.
//!
//! # Scoring
//!
//! For a document with token counts `c(t)`, the score of category `C` is
//!
//! ```text
//! prior(C) * k * Π p(t)
//!
//! p(t) = c(t) * (C.tokens[t] + k) / (C.token_count + unique_token_count)   if C holds t
//! p(t) = k / (unique_token_count * c(t))                                    otherwise
//! ```
//!
//! # Examples
//!
//! ```
//! use categorist::classifier::bayes::Bayes;
//! use categorist::config::ClassifierConfig;
//!
//! let mut bayes = Bayes::new(&ClassifierConfig::default()).unwrap();
//! bayes.add_category("positive").unwrap();
//! bayes.add_category("negative").unwrap();
//! bayes.train("positive", "good job").unwrap();
//! bayes.train("negative", "bad work").unwrap();
//!
//! let result = bayes.classify("very good position for this sentence").unwrap();
//! assert_eq!(result.top_score().key, "positive");
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use log::{debug, trace};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenCounts;
use crate::classifier::category::Category;
use crate::classifier::document::{Document, doc_key};
use crate::classifier::score::Classification;
use crate::classifier::snapshot::{CategorySnapshot, DocumentSnapshot, ModelSnapshot};
use crate::config::{AutoTrain, ClassifierConfig};
use crate::error::{CategoristError, Result};

/// Default additive smoothing constant.
pub const DEFAULT_K_VALUE: f64 = 1.0;

/// Incremental multi-category Naive Bayes classifier.
///
/// The engine is plain owned state without internal locking; share it behind
/// a mutex if several threads need it.
pub struct Bayes {
    categories: IndexMap<String, Category>,
    category_count: usize,
    doc_count: u64,
    token_count: u64,
    unique_token_count: u64,
    k_value: f64,
    auto_train: AutoTrain,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for Bayes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bayes")
            .field("categories", &self.categories.keys().collect::<Vec<_>>())
            .field("doc_count", &self.doc_count)
            .field("token_count", &self.token_count)
            .field("unique_token_count", &self.unique_token_count)
            .field("k_value", &self.k_value)
            .field("auto_train", &self.auto_train)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Bayes {
    /// Create an empty engine from a configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = config.build_analyzer()?;
        Ok(Self::with_analyzer(Arc::new(analyzer))
            .with_k_value(config.k_value)
            .with_auto_train(config.auto_train))
    }

    /// Create an empty engine using the given analyzer, `k = 1` and no auto-retrain.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Bayes {
            categories: IndexMap::new(),
            category_count: 0,
            doc_count: 0,
            token_count: 0,
            unique_token_count: 0,
            k_value: DEFAULT_K_VALUE,
            auto_train: AutoTrain::Off,
            analyzer,
        }
    }

    /// Set the smoothing constant.
    pub fn with_k_value(mut self, k_value: f64) -> Self {
        self.k_value = k_value;
        self
    }

    /// Set the auto-retrain policy.
    pub fn with_auto_train(mut self, auto_train: AutoTrain) -> Self {
        self.auto_train = auto_train;
        self
    }

    pub fn categories(&self) -> &IndexMap<String, Category> {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// Number of distinct tokens held by at least one category.
    pub fn unique_token_count(&self) -> u64 {
        self.unique_token_count
    }

    pub fn k_value(&self) -> f64 {
        self.k_value
    }

    pub fn auto_train(&self) -> AutoTrain {
        self.auto_train
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Add a new, empty category.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        if self.category_exists(name) {
            return Err(CategoristError::DuplicateCategory(name.to_string()));
        }
        self.categories.insert(name.to_string(), Category::new(name));
        self.category_count += 1;
        debug!("added category '{name}'");
        Ok(())
    }

    pub fn category_exists(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Fail with `UnknownCategory` unless the category exists.
    pub fn require_category_exists(&self, name: &str) -> Result<()> {
        if self.category_exists(name) {
            Ok(())
        } else {
            Err(CategoristError::UnknownCategory(name.to_string()))
        }
    }

    /// At least two categories exist and every one of them holds a document.
    pub fn classifiable(&self) -> bool {
        self.unclassifiable_reason().is_none()
    }

    fn unclassifiable_reason(&self) -> Option<String> {
        if self.categories.len() < 2 {
            return Some(format!(
                "at least 2 categories are required, found {}",
                self.categories.len()
            ));
        }
        self.categories
            .values()
            .find(|category| category.doc_count() == 0)
            .map(|category| format!("category '{}' has no training documents", category.name()))
    }

    /// Train a category with a document.
    pub fn train(&mut self, category_name: &str, content: &str) -> Result<()> {
        self.require_category_exists(category_name)?;

        let key = doc_key(content);
        let fresh = match self.categories.get(category_name) {
            Some(category) if category.contains_document(&key) => None,
            _ => Some(self.analyzer.token_counts(content)?),
        };

        let tokens = match self.categories.get_mut(category_name) {
            Some(category) => category.admit_document(key, || {
                Document::new(content, fresh.unwrap_or_default())
            }),
            None => return Err(CategoristError::UnknownCategory(category_name.to_string())),
        };

        for (token, count) in &tokens {
            self.increment_token_counts(category_name, token, *count);
        }
        self.doc_count += 1;
        self.update_priors();

        debug!(
            "trained '{category_name}' with {} distinct tokens (doc_count={}, unique_token_count={})",
            tokens.len(),
            self.doc_count,
            self.unique_token_count
        );
        Ok(())
    }

    /// Remove one previous training of a document from a category.
    pub fn untrain(&mut self, category_name: &str, content: &str) -> Result<()> {
        let category = self
            .categories
            .get(category_name)
            .ok_or_else(|| CategoristError::UnknownCategory(category_name.to_string()))?;

        let key = doc_key(content);
        let tokens = category
            .document(&key)
            .map(|doc| doc.tokens().clone())
            .ok_or_else(|| CategoristError::document_not_found(category_name))?;
        if self.doc_count == 0 || category.doc_count() == 0 || !category.holds_tokens(&tokens) {
            return Err(CategoristError::corrupt_model(format!(
                "category '{category_name}' counters do not cover document {key}"
            )));
        }

        for (token, count) in &tokens {
            self.decrement_token_counts(category_name, token, *count)?;
        }
        if let Some(category) = self.categories.get_mut(category_name) {
            category.release_document(&key)?;
        }
        self.doc_count -= 1;
        self.update_priors();

        debug!(
            "untrained '{category_name}' (doc_count={}, unique_token_count={})",
            self.doc_count, self.unique_token_count
        );
        Ok(())
    }

    /// Score every category without applying the auto-retrain policy.
    pub fn score(&self, content: &str) -> Result<Classification> {
        if let Some(reason) = self.unclassifiable_reason() {
            return Err(CategoristError::InsufficientTraining(reason));
        }

        let tokens = self.analyzer.token_counts(content)?;
        let values = self.categories.values().map(|category| {
            (
                category.name().to_string(),
                self.doc_probability(category, &tokens),
            )
        });

        Classification::from_values(values).ok_or_else(|| {
            CategoristError::insufficient_training("no categories to score against")
        })
    }

    /// Classify a document, then apply the auto-retrain policy.
    pub fn classify(&mut self, content: &str) -> Result<Classification> {
        let result = self.score(content)?;
        let winner = result.top_score().key.clone();
        debug!(
            "classified document as '{winner}' ({}%)",
            result.top_score().percentage
        );

        let retrain = match self.auto_train {
            AutoTrain::Off => false,
            AutoTrain::Continuous => true,
            AutoTrain::Unique => self
                .categories
                .get(&winner)
                .is_some_and(|category| !category.contains_document(&doc_key(content))),
        };
        if retrain {
            self.train(&winner, content)?;
        }

        Ok(result)
    }

    /// Verify every counter against a full scan of the category tables.
    pub fn check_invariants(&self) -> Result<()> {
        if self.category_count != self.categories.len() {
            return Err(CategoristError::corrupt_model(format!(
                "category_count is {} but {} categories exist",
                self.category_count,
                self.categories.len()
            )));
        }

        let mut doc_count = 0;
        let mut token_count = 0;
        let mut unique = AHashSet::new();
        for category in self.categories.values() {
            let sum: u64 = category.tokens().values().sum();
            if sum != category.token_count() {
                return Err(CategoristError::corrupt_model(format!(
                    "category '{}' token_count is {} but its tokens sum to {sum}",
                    category.name(),
                    category.token_count()
                )));
            }
            self.check_documents(category)?;
            let multiplicity: u64 = category.docs().values().map(Document::multiplicity).sum();
            if multiplicity != category.doc_count() {
                return Err(CategoristError::corrupt_model(format!(
                    "category '{}' doc_count is {} but its documents total {multiplicity}",
                    category.name(),
                    category.doc_count()
                )));
            }
            doc_count += category.doc_count();
            token_count += category.token_count();
            unique.extend(category.tokens().keys().map(String::as_str));
        }

        let expected = [
            ("doc_count", self.doc_count, doc_count),
            ("token_count", self.token_count, token_count),
            (
                "unique_token_count",
                self.unique_token_count,
                unique.len() as u64,
            ),
        ];
        for (name, actual, scanned) in expected {
            if actual != scanned {
                return Err(CategoristError::corrupt_model(format!(
                    "{name} is {actual} but the categories hold {scanned}"
                )));
            }
        }
        Ok(())
    }

    /// Every document must be live, keyed by its content digest, and the
    /// documents together must account for the whole token table.
    fn check_documents(&self, category: &Category) -> Result<()> {
        let mut held = TokenCounts::new();
        for (key, doc) in category.docs() {
            if *key != doc.key() {
                return Err(CategoristError::corrupt_model(format!(
                    "document key {key} in '{}' does not match its content",
                    category.name()
                )));
            }
            if doc.multiplicity() == 0 {
                return Err(CategoristError::corrupt_model(format!(
                    "document {key} in '{}' has multiplicity zero",
                    category.name()
                )));
            }
            for (token, count) in doc.tokens() {
                *held.entry(token.clone()).or_insert(0) += count * doc.multiplicity();
            }
        }

        if held != category.sorted_tokens() {
            return Err(CategoristError::corrupt_model(format!(
                "documents in '{}' do not tokenize to its token table; \
                 the model may have been trained with a different analyzer",
                category.name()
            )));
        }
        Ok(())
    }

    /// Export the full state.
    pub fn snapshot(&self) -> ModelSnapshot {
        let categories = self
            .categories
            .iter()
            .map(|(name, category)| {
                let docs = category
                    .docs()
                    .iter()
                    .map(|(key, doc)| {
                        (
                            key.clone(),
                            DocumentSnapshot {
                                content: doc.content().to_string(),
                                multiplicity: doc.multiplicity(),
                            },
                        )
                    })
                    .collect::<BTreeMap<_, _>>();
                let snapshot = CategorySnapshot {
                    doc_count: category.doc_count(),
                    token_count: category.token_count(),
                    tokens: category.sorted_tokens(),
                    prior: category.prior(),
                    docs,
                };
                (name.clone(), snapshot)
            })
            .collect();

        ModelSnapshot {
            k_value: self.k_value,
            category_count: Some(self.category_count),
            doc_count: Some(self.doc_count),
            token_count: Some(self.token_count),
            unique_token_count: Some(self.unique_token_count),
            categories,
        }
    }

    /// Rebuild an engine from a snapshot, tokenizing documents with the
    /// analyzer described by `config`.
    ///
    /// The snapshot's `k_value` takes precedence over the configured one.
    pub fn from_snapshot(snapshot: &ModelSnapshot, config: &ClassifierConfig) -> Result<Self> {
        let bayes = Self::new(config)?;
        bayes.restored(snapshot)
    }

    /// Replace this engine's state with a snapshot, keeping the analyzer and
    /// auto-retrain policy.
    pub fn restore(&mut self, snapshot: &ModelSnapshot) -> Result<()> {
        let empty =
            Self::with_analyzer(Arc::clone(&self.analyzer)).with_auto_train(self.auto_train);
        *self = empty.restored(snapshot)?;
        Ok(())
    }

    fn restored(mut self, snapshot: &ModelSnapshot) -> Result<Self> {
        if !snapshot.k_value.is_finite() || snapshot.k_value <= 0.0 {
            return Err(CategoristError::corrupt_model(format!(
                "k_value must be a positive finite number, got {}",
                snapshot.k_value
            )));
        }
        self.k_value = snapshot.k_value;

        let mut unique = AHashSet::new();
        for (name, stored) in &snapshot.categories {
            let mut docs = AHashMap::with_capacity(stored.docs.len());
            for (key, doc) in &stored.docs {
                let tokens = self.analyzer.token_counts(&doc.content)?;
                docs.insert(
                    key.clone(),
                    Document::with_multiplicity(doc.content.clone(), tokens, doc.multiplicity),
                );
            }
            let tokens: AHashMap<String, u64> = stored
                .tokens
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(|(token, count)| (token.clone(), *count))
                .collect();
            unique.extend(tokens.keys().cloned());

            self.doc_count += stored.doc_count;
            self.token_count += stored.token_count;
            self.categories.insert(
                name.clone(),
                Category::restore(
                    name.clone(),
                    stored.doc_count,
                    stored.token_count,
                    tokens,
                    docs,
                    stored.prior,
                ),
            );
        }
        self.category_count = self.categories.len();
        self.unique_token_count = unique.len() as u64;

        let stored_counts = [
            (
                "category_count",
                snapshot.category_count.map(|c| c as u64),
                self.category_count as u64,
            ),
            ("doc_count", snapshot.doc_count, self.doc_count),
            ("token_count", snapshot.token_count, self.token_count),
            (
                "unique_token_count",
                snapshot.unique_token_count,
                self.unique_token_count,
            ),
        ];
        for (name, stored, actual) in stored_counts {
            match stored {
                Some(stored) if stored != actual => {
                    return Err(CategoristError::corrupt_model(format!(
                        "stored {name} is {stored} but the categories hold {actual}"
                    )));
                }
                _ => {}
            }
        }

        self.check_invariants()?;
        debug!(
            "restored {} categories ({} documents)",
            self.category_count, self.doc_count
        );
        Ok(self)
    }

    fn update_priors(&mut self) {
        let total = self.doc_count;
        for category in self.categories.values_mut() {
            let prior = if total == 0 {
                0.0
            } else {
                category.doc_count() as f64 / total as f64
            };
            category.set_prior(prior);
        }
    }

    fn increment_token_counts(&mut self, category_name: &str, token: &str, count: u64) {
        // Checked before the token is written, so a hit means another category has it.
        if !self.any_category_has(token) {
            self.unique_token_count += 1;
            trace!(
                "new distinct token '{token}' (unique_token_count={})",
                self.unique_token_count
            );
        }
        self.token_count += count;
        if let Some(category) = self.categories.get_mut(category_name) {
            category.add_token(token, count);
        }
    }

    fn decrement_token_counts(
        &mut self,
        category_name: &str,
        token: &str,
        count: u64,
    ) -> Result<()> {
        let token_count = self.token_count.checked_sub(count).ok_or_else(|| {
            CategoristError::corrupt_model(format!(
                "token_count {} cannot drop by {count}",
                self.token_count
            ))
        })?;
        if let Some(category) = self.categories.get_mut(category_name) {
            category.remove_token(token, count)?;
        }
        self.token_count = token_count;

        // Checked after removal, so a miss means no category has it anymore.
        if !self.any_category_has(token) {
            self.unique_token_count = self.unique_token_count.checked_sub(1).ok_or_else(|| {
                CategoristError::corrupt_model("unique_token_count dropped below zero")
            })?;
            trace!(
                "dropped distinct token '{token}' (unique_token_count={})",
                self.unique_token_count
            );
        }
        Ok(())
    }

    fn any_category_has(&self, token: &str) -> bool {
        self.categories.values().any(|category| category.has_token(token))
    }

    fn doc_probability(&self, category: &Category, tokens: &TokenCounts) -> f64 {
        let mut score = self.k_value;
        for (token, count) in tokens {
            score *= self.token_probability(category, token, *count);
        }
        category.prior() * score
    }

    fn token_probability(&self, category: &Category, token: &str, count: u64) -> f64 {
        let unique = self.unique_token_count.max(1) as f64;
        let count = count as f64;
        match category.token(token) {
            0 => self.k_value / (unique * count),
            held => {
                count * (held as f64 + self.k_value)
                    / (category.token_count() as f64 + self.unique_token_count as f64)
            }
        }
    }
}
