//! End-to-end classification scenarios.

use categorist::prelude::*;

fn config() -> ClassifierConfig {
    ClassifierConfig::default().with_exclude_tokens(["are", "at", "by"])
}

#[test]
fn test_neutral_training_scenario() {
    let mut bayes = Bayes::new(&config()).unwrap();
    bayes.add_category("neutral").unwrap();
    bayes.train("neutral", "how are you?? : :| :) ;-) :(").unwrap();

    let neutral = bayes.category("neutral").unwrap();
    assert_eq!(neutral.doc_count(), 1);
    assert_eq!(neutral.token_count(), 8);

    assert_eq!(
        neutral.sorted_tokens().into_iter().collect::<Vec<_>>(),
        vec![
            (":(".to_string(), 1),
            (":)".to_string(), 1),
            (":|".to_string(), 1),
            (";-)".to_string(), 1),
            ("?".to_string(), 2),
            ("how".to_string(), 1),
            ("you".to_string(), 1),
        ]
    );
}

#[test]
fn test_positive_negative_scenario() {
    let mut bayes = Bayes::new(&config()).unwrap();
    bayes.add_category("positive").unwrap();
    bayes.add_category("negative").unwrap();
    bayes.train("positive", "good job").unwrap();
    bayes.train("negative", "bad work").unwrap();

    let result = bayes
        .classify("very good position for this sentence")
        .unwrap();
    assert_eq!(result.top_score().key, "positive");

    bayes.train("negative", "work").unwrap();
    let result = bayes.classify("bad words").unwrap();
    assert_eq!(result.top_score().key, "negative");

    let percentages: u32 = result.scores().iter().map(|s| s.percentage).sum();
    assert!((99..=100).contains(&percentages));
}

#[test]
fn test_train_batch_scenario() {
    let mut classifier = Classifier::new(Box::new(Bayes::new(&config()).unwrap()));
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
fn test_classifiability_gate() {
    let mut bayes = Bayes::new(&config()).unwrap();
    assert!(matches!(
        bayes.classify("blank"),
        Err(CategoristError::InsufficientTraining(_))
    ));

    bayes.add_category("positive").unwrap();
    bayes.train("positive", "good job").unwrap();
    assert!(matches!(
        bayes.classify("good job"),
        Err(CategoristError::InsufficientTraining(_))
    ));

    bayes.add_category("negative").unwrap();
    assert!(matches!(
        bayes.classify_batch(&["good job"]),
        Err(CategoristError::InsufficientTraining(_))
    ));

    bayes.train("negative", "bad work").unwrap();
    bayes.untrain("negative", "bad work").unwrap();
    assert!(!bayes.classifiable());
}

#[test]
fn test_auto_train_through_strategy_switch() {
    let unique = config().with_auto_train(AutoTrain::Unique);
    let mut classifier = Classifier::new(Box::new(Bayes::new(&config()).unwrap()));
    classifier.add_categories(&["positive", "negative"]).unwrap();
    classifier.train("positive", "good job").unwrap();
    classifier.train("negative", "bad work").unwrap();

    classifier.classify("good day").unwrap();
    assert_eq!(classifier.snapshot().doc_count, Some(2));

    classifier
        .set_strategy(Box::new(Bayes::new(&unique).unwrap()))
        .unwrap();
    classifier.classify("good day").unwrap();
    classifier.classify("good day").unwrap();
    assert_eq!(classifier.snapshot().doc_count, Some(3));
    assert_eq!(classifier.snapshot().categories["positive"].doc_count, 2);
}
