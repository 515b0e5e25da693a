//! Integration tests for the incremental bookkeeping of the Bayes engine.

use std::collections::BTreeSet;

use categorist::classifier::document::doc_key;
use categorist::prelude::*;

const CONTENTS: &[&str] = &[
    "good job ever",
    "valid syntax",
    "best moments of my good life",
    "how are you?? : :| :) ;-) :(",
    "bad work",
    "never liked it",
];

fn bayes() -> Bayes {
    let config = ClassifierConfig::default().with_exclude_tokens(["are", "at", "by"]);
    Bayes::new(&config).unwrap()
}

fn seeded() -> Bayes {
    let mut bayes = bayes();
    bayes
        .add_categories(&["positive", "negative", "neutral"])
        .unwrap();
    bayes.train("positive", "good job").unwrap();
    bayes.train("negative", "bad job").unwrap();
    bayes.train("neutral", "how are you?").unwrap();
    bayes
}

/// Recompute every global counter from the category tables.
fn assert_sums(bayes: &Bayes) {
    let categories = bayes.categories();
    let doc_count: u64 = categories.values().map(|c| c.doc_count()).sum();
    let token_count: u64 = categories.values().map(|c| c.token_count()).sum();
    let distinct: BTreeSet<&String> = categories
        .values()
        .flat_map(|c| c.tokens().keys())
        .collect();

    assert_eq!(bayes.doc_count(), doc_count);
    assert_eq!(bayes.token_count(), token_count);
    assert_eq!(bayes.unique_token_count(), distinct.len() as u64);
    for category in categories.values() {
        assert_eq!(
            category.token_count(),
            category.tokens().values().sum::<u64>()
        );
        assert!(category.tokens().values().all(|count| *count > 0));
    }
    bayes.check_invariants().unwrap();
}

#[test]
fn test_untrain_is_inverse_of_train() {
    for category in ["positive", "negative", "neutral"] {
        for content in CONTENTS {
            let mut bayes = seeded();
            let before = bayes.snapshot();
            let unique_before = bayes.unique_token_count();

            bayes.train(category, content).unwrap();
            assert_sums(&bayes);
            bayes.untrain(category, content).unwrap();
            assert_sums(&bayes);

            assert_eq!(bayes.snapshot(), before, "{category} / {content}");
            assert_eq!(bayes.unique_token_count(), unique_before);
        }
    }
}

#[test]
fn test_multiplicity() {
    let mut bayes = seeded();
    bayes.train("positive", "valid syntax").unwrap();
    let after_first = bayes.snapshot();

    bayes.train("positive", "valid syntax").unwrap();
    assert_eq!(bayes.category("positive").unwrap().doc_count(), 3);
    bayes.untrain("positive", "valid syntax").unwrap();

    assert_eq!(bayes.snapshot(), after_first);
    let positive = bayes.category("positive").unwrap();
    assert_eq!(positive.doc_count(), 2);
    assert!(positive.contains_document(&doc_key("valid syntax")));
    assert_eq!(positive.token("valid"), 1);
}

#[test]
fn test_sum_invariants_through_mixed_operations() {
    let mut bayes = seeded();

    for (i, content) in CONTENTS.iter().enumerate() {
        let category = ["positive", "negative", "neutral"][i % 3];
        bayes.train(category, content).unwrap();
        bayes.train("neutral", content).unwrap();
        assert_sums(&bayes);
    }
    for (i, content) in CONTENTS.iter().enumerate().rev() {
        let category = ["positive", "negative", "neutral"][i % 3];
        bayes.untrain(category, content).unwrap();
        assert_sums(&bayes);
    }

    let mut expected = seeded();
    expected.train_batch("neutral", CONTENTS).unwrap();
    assert_eq!(
        bayes.snapshot().to_json(false).unwrap(),
        expected.snapshot().to_json(false).unwrap()
    );
}

#[test]
fn test_failed_operations_leave_state_untouched() {
    let mut bayes = seeded();
    let before = bayes.snapshot();

    assert!(matches!(
        bayes.add_category("positive"),
        Err(CategoristError::DuplicateCategory(_))
    ));
    assert!(matches!(
        bayes.train("missing", "good job"),
        Err(CategoristError::UnknownCategory(_))
    ));
    assert!(matches!(
        bayes.untrain("missing", "good job"),
        Err(CategoristError::UnknownCategory(_))
    ));
    assert!(matches!(
        bayes.untrain("negative", "good job"),
        Err(CategoristError::DocumentNotFound { .. })
    ));

    assert_eq!(bayes.snapshot(), before);
}

#[test]
fn test_json_round_trip_is_byte_identical() {
    let mut bayes = seeded();
    bayes.train_batch("positive", CONTENTS).unwrap();
    bayes.train("positive", CONTENTS[0]).unwrap();

    let json = bayes.snapshot().to_json(true).unwrap();
    let config = ClassifierConfig::default().with_exclude_tokens(["are", "at", "by"]);
    let snapshot = ModelSnapshot::from_json(&json).unwrap();
    let restored = Bayes::from_snapshot(&snapshot, &config).unwrap();

    assert_eq!(restored.snapshot().to_json(true).unwrap(), json);
    assert_sums(&restored);
}

#[test]
fn test_restored_model_keeps_training_incrementally() {
    let mut original = seeded();
    let config = ClassifierConfig::default().with_exclude_tokens(["are", "at", "by"]);
    let mut restored = Bayes::from_snapshot(&original.snapshot(), &config).unwrap();

    for bayes in [&mut original, &mut restored] {
        bayes.untrain("positive", "good job").unwrap();
        bayes.train("positive", "valid syntax").unwrap();
    }

    assert_eq!(restored.snapshot(), original.snapshot());
    assert_sums(&restored);
}
