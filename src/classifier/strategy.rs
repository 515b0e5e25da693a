//! Swappable classifier strategies.
//!
//! [`Strategy`] is the surface every classifier implementation exposes, and
//! [`Classifier`] delegates to whichever strategy is currently installed.
//!
//! # Examples
//!
//! ```
//! use categorist::classifier::bayes::Bayes;
//! use categorist::classifier::strategy::{Classifier, Strategy};
//! use categorist::config::ClassifierConfig;
//!
//! let config = ClassifierConfig::default();
//! let mut classifier = Classifier::new(Box::new(Bayes::new(&config).unwrap()));
//! classifier.add_categories(&["positive", "negative"]).unwrap();
//! classifier.train("positive", "good job").unwrap();
//! classifier.train("negative", "bad work").unwrap();
//!
//! let before = classifier.snapshot();
//! classifier.set_strategy(Box::new(Bayes::new(&config).unwrap())).unwrap();
//! assert_eq!(classifier.snapshot(), before);
//! ```

use crate::classifier::bayes::Bayes;
use crate::classifier::score::Classification;
use crate::classifier::snapshot::ModelSnapshot;
use crate::error::Result;

/// Operations every classifier implementation provides.
pub trait Strategy: Send + Sync {
    /// Get the name of this strategy (for debugging and configuration).
    fn name(&self) -> &'static str;

    fn add_category(&mut self, name: &str) -> Result<()>;

    fn category_exists(&self, name: &str) -> bool;

    /// Whether `classify` would currently succeed.
    fn classifiable(&self) -> bool;

    fn train(&mut self, category: &str, content: &str) -> Result<()>;

    fn untrain(&mut self, category: &str, content: &str) -> Result<()>;

    fn classify(&mut self, content: &str) -> Result<Classification>;

    /// Export the full state.
    fn snapshot(&self) -> ModelSnapshot;

    /// Replace the full state with a previously exported one.
    fn restore(&mut self, snapshot: &ModelSnapshot) -> Result<()>;

    /// Add several categories, stopping at the first failure.
    fn add_categories(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            self.add_category(name)?;
        }
        Ok(())
    }

    /// Train a category with each content in order.
    ///
    /// Not atomic: items before a failing one stay trained.
    fn train_batch(&mut self, category: &str, contents: &[&str]) -> Result<()> {
        for content in contents {
            self.train(category, content)?;
        }
        Ok(())
    }

    /// Untrain a category with each content in order.
    ///
    /// Not atomic: items before a failing one stay untrained.
    fn untrain_batch(&mut self, category: &str, contents: &[&str]) -> Result<()> {
        for content in contents {
            self.untrain(category, content)?;
        }
        Ok(())
    }

    /// Classify each content independently, keeping input order.
    fn classify_batch(&mut self, contents: &[&str]) -> Result<Vec<Classification>> {
        contents.iter().map(|content| self.classify(content)).collect()
    }
}

impl Strategy for Bayes {
    fn name(&self) -> &'static str {
        "bayes"
    }

    fn add_category(&mut self, name: &str) -> Result<()> {
        Bayes::add_category(self, name)
    }

    fn category_exists(&self, name: &str) -> bool {
        Bayes::category_exists(self, name)
    }

    fn classifiable(&self) -> bool {
        Bayes::classifiable(self)
    }

    fn train(&mut self, category: &str, content: &str) -> Result<()> {
        Bayes::train(self, category, content)
    }

    fn untrain(&mut self, category: &str, content: &str) -> Result<()> {
        Bayes::untrain(self, category, content)
    }

    fn classify(&mut self, content: &str) -> Result<Classification> {
        Bayes::classify(self, content)
    }

    fn snapshot(&self) -> ModelSnapshot {
        Bayes::snapshot(self)
    }

    fn restore(&mut self, snapshot: &ModelSnapshot) -> Result<()> {
        Bayes::restore(self, snapshot)
    }
}

/// A classifier that delegates to a replaceable strategy.
pub struct Classifier {
    strategy: Box<dyn Strategy>,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Classifier {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Classifier { strategy }
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Install a new strategy, carrying the current state over to it.
    pub fn set_strategy(&mut self, mut strategy: Box<dyn Strategy>) -> Result<()> {
        strategy.restore(&self.strategy.snapshot())?;
        log::debug!(
            "switched strategy from '{}' to '{}'",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
        Ok(())
    }
}

impl Strategy for Classifier {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn add_category(&mut self, name: &str) -> Result<()> {
        self.strategy.add_category(name)
    }

    fn category_exists(&self, name: &str) -> bool {
        self.strategy.category_exists(name)
    }

    fn classifiable(&self) -> bool {
        self.strategy.classifiable()
    }

    fn train(&mut self, category: &str, content: &str) -> Result<()> {
        self.strategy.train(category, content)
    }

    fn untrain(&mut self, category: &str, content: &str) -> Result<()> {
        self.strategy.untrain(category, content)
    }

    fn classify(&mut self, content: &str) -> Result<Classification> {
        self.strategy.classify(content)
    }

    fn snapshot(&self) -> ModelSnapshot {
        self.strategy.snapshot()
    }

    fn restore(&mut self, snapshot: &ModelSnapshot) -> Result<()> {
        self.strategy.restore(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::error::CategoristError;

    fn bayes() -> Box<Bayes> {
        let config = ClassifierConfig::default().with_exclude_tokens(["are", "at", "by"]);
        Box::new(Bayes::new(&config).unwrap())
    }

    #[test]
    fn test_add_categories() {
        let mut classifier = Classifier::new(bayes());
        classifier
            .add_categories(&["neutral", "positive", "negative"])
            .unwrap();

        assert!(classifier.category_exists("neutral"));
        assert_eq!(
            classifier.snapshot().categories.keys().collect::<Vec<_>>(),
            vec!["neutral", "positive", "negative"]
        );
        assert!(classifier.add_categories(&["other", "neutral"]).is_err());
        assert!(classifier.category_exists("other"));
    }

    #[test]
    fn test_train_batch() {
        let mut classifier = Classifier::new(bayes());
        classifier.add_category("positive").unwrap();
        classifier
            .train_batch(
                "positive",
                &["good job ever", "valid syntax", "best moments of my life"],
            )
            .unwrap();

        assert_eq!(classifier.snapshot().categories["positive"].doc_count, 3);
    }

    #[test]
    fn test_unique_token_count_batch() {
        let mut bayes = bayes();
        bayes.add_category("positive").unwrap();
        let contents = ["good job ever", "valid syntax", "best moments of my good life"];

        bayes.train_batch("positive", &contents).unwrap();
        assert_eq!(bayes.unique_token_count(), 10);

        bayes.untrain_batch("positive", &contents).unwrap();
        assert_eq!(bayes.unique_token_count(), 0);
    }

    #[test]
    fn test_untrain_batch_is_not_atomic() {
        let mut bayes = bayes();
        bayes.add_category("positive").unwrap();
        bayes.train_batch("positive", &["good job", "valid syntax"]).unwrap();

        let err = bayes
            .untrain_batch("positive", &["good job", "never trained", "valid syntax"])
            .unwrap_err();
        assert!(matches!(err, CategoristError::DocumentNotFound { .. }));
        assert_eq!(bayes.doc_count(), 1);
    }

    #[test]
    fn test_classify_batch() {
        let mut classifier = Classifier::new(bayes());
        classifier.add_categories(&["positive", "negative"]).unwrap();
        classifier
            .train_batch(
                "positive",
                &["good job ever", "valid syntax", "best moments of my life"],
            )
            .unwrap();
        classifier
            .train_batch("negative", &["bad work", "awfull day", "never liked it"])
            .unwrap();

        let results = classifier
            .classify_batch(&["good sytanx research", "bad words"])
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].top_score().key, "positive");
        assert_eq!(results[1].top_score().key, "negative");
    }

    #[test]
    fn test_change_strategy() {
        let mut classifier = Classifier::new(bayes());
        classifier.add_categories(&["positive", "negative"]).unwrap();
        classifier.train("positive", "good job").unwrap();
        classifier.train("negative", "bad work").unwrap();
        let before = classifier.snapshot();

        classifier.set_strategy(bayes()).unwrap();

        assert_eq!(classifier.snapshot(), before);
        assert_eq!(classifier.name(), "bayes");
        assert!(classifier.classifiable());
        assert_eq!(
            classifier.classify("good job").unwrap().top_score().key,
            "positive"
        );
    }
}
