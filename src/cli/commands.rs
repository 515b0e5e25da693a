//! Command implementations for the Categorist CLI.
//!
//! Every command loads the model file (an exported snapshot), applies its
//! operation through a [`Classifier`] and writes the model back when it changed.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::classifier::bayes::Bayes;
use crate::classifier::snapshot::ModelSnapshot;
use crate::classifier::strategy::{Classifier, Strategy};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AutoTrain, ClassifierConfig};

/// Execute a CLI command.
pub fn execute_command(args: CategoristArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::AddCategory(add_args) => add_categories(add_args, &config, &args),
        Command::Train(train_args) => train(train_args, &config, &args, false),
        Command::Untrain(train_args) => train(train_args, &config, &args, true),
        Command::Classify(classify_args) => classify(classify_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Load the classifier configuration, falling back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => {
            debug!("loading config from {}", path.display());
            ClassifierConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(ClassifierConfig::default()),
    }
}

/// Load a model file, or start an empty model when it does not exist yet.
pub fn load_model(path: &Path, config: &ClassifierConfig) -> Result<Classifier> {
    let bayes = if path.exists() {
        let snapshot = ModelSnapshot::load(path)
            .with_context(|| format!("failed to read model {}", path.display()))?;
        Bayes::from_snapshot(&snapshot, config)
            .with_context(|| format!("failed to restore model {}", path.display()))?
    } else {
        info!("model {} does not exist, starting empty", path.display());
        Bayes::new(config)?
    };
    Ok(Classifier::new(Box::new(bayes)))
}

/// Write a model file.
pub fn save_model(path: &Path, classifier: &Classifier) -> Result<()> {
    classifier
        .snapshot()
        .save(path)
        .with_context(|| format!("failed to write model {}", path.display()))?;
    debug!("saved model to {}", path.display());
    Ok(())
}

fn add_categories(
    args: &AddCategoryArgs,
    config: &ClassifierConfig,
    cli_args: &CategoristArgs,
) -> Result<()> {
    let mut classifier = load_model(&args.model, config)?;
    let names: Vec<&str> = args.names.iter().map(String::as_str).collect();
    classifier.add_categories(&names)?;
    save_model(&args.model, &classifier)?;

    output_result(
        &CategoryAdditionResult {
            categories: args.names.clone(),
        },
        cli_args,
    )?;
    Ok(())
}

fn train(
    args: &TrainArgs,
    config: &ClassifierConfig,
    cli_args: &CategoristArgs,
    untrain: bool,
) -> Result<()> {
    let mut classifier = load_model(&args.model, config)?;
    let texts: Vec<&str> = args.texts.iter().map(String::as_str).collect();
    if untrain {
        classifier.untrain_batch(&args.category, &texts)?;
    } else {
        classifier.train_batch(&args.category, &texts)?;
    }
    save_model(&args.model, &classifier)?;

    output_result(
        &TrainingResult {
            category: args.category.clone(),
            documents: texts.len(),
            untrained: untrain,
        },
        cli_args,
    )?;
    Ok(())
}

fn classify(
    args: &ClassifyArgs,
    config: &ClassifierConfig,
    cli_args: &CategoristArgs,
) -> Result<()> {
    let mut classifier = load_model(&args.model, config)?;
    let texts: Vec<&str> = args.texts.iter().map(String::as_str).collect();
    let classifications = classifier.classify_batch(&texts)?;
    if config.auto_train != AutoTrain::Off {
        save_model(&args.model, &classifier)?;
    }

    let results = args
        .texts
        .iter()
        .cloned()
        .zip(classifications)
        .map(|(text, classification)| ClassificationOutput {
            text,
            classification,
        })
        .collect();
    output_result(&ClassificationResults { results }, cli_args)?;
    Ok(())
}

fn show_stats(
    args: &StatsArgs,
    config: &ClassifierConfig,
    cli_args: &CategoristArgs,
) -> Result<()> {
    let classifier = load_model(&args.model, config)?;
    output_result(&model_stats(&classifier.snapshot()), cli_args)?;
    Ok(())
}

/// Summarize a snapshot.
pub fn model_stats(snapshot: &ModelSnapshot) -> ModelStats {
    let categories = snapshot
        .categories
        .iter()
        .map(|(name, category)| CategoryStats {
            name: name.clone(),
            doc_count: category.doc_count,
            token_count: category.token_count,
            distinct_tokens: category.tokens.len(),
            prior: category.prior,
        })
        .collect::<Vec<_>>();

    ModelStats {
        k_value: snapshot.k_value,
        doc_count: categories.iter().map(|c| c.doc_count).sum(),
        token_count: categories.iter().map(|c| c.token_count).sum(),
        unique_token_count: snapshot.unique_token_count.unwrap_or_default(),
        categories,
    }
}
