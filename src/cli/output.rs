//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::score::Classification;
use crate::cli::args::{CategoristArgs, OutputFormat};
use crate::error::Result;

/// Result structure for category addition.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryAdditionResult {
    pub categories: Vec<String>,
}

/// Result structure for training and untraining.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub category: String,
    pub documents: usize,
    pub untrained: bool,
}

/// Result structure for one classified document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationOutput {
    pub text: String,
    pub classification: Classification,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub results: Vec<ClassificationOutput>,
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub k_value: f64,
    pub doc_count: u64,
    pub token_count: u64,
    pub unique_token_count: u64,
    pub categories: Vec<CategoryStats>,
}

/// Category-specific statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryStats {
    pub name: String,
    pub doc_count: u64,
    pub token_count: u64,
    pub distinct_tokens: usize,
    pub prior: f64,
}

impl fmt::Display for CategoryAdditionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added categories: {}", self.categories.join(", "))
    }
}

impl fmt::Display for TrainingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.untrained { "Untrained" } else { "Trained" };
        writeln!(
            f,
            "{verb} '{}' with {} document(s)",
            self.category, self.documents
        )
    }
}

impl fmt::Display for ClassificationResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for output in &self.results {
            let top = output.classification.top_score();
            writeln!(f, "{}", output.text)?;
            writeln!(f, "  => {} ({}%)", top.key, top.percentage)?;
            for score in output.classification.ranked() {
                writeln!(
                    f,
                    "     {:<20} {:>3}%  {:.6e}",
                    score.key, score.percentage, score.value
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ModelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Statistics:")?;
        writeln!(f, "════════════════")?;
        writeln!(f, "Categories: {}", self.categories.len())?;
        writeln!(f, "Documents: {}", self.doc_count)?;
        writeln!(f, "Tokens: {}", self.token_count)?;
        writeln!(f, "Distinct tokens: {}", self.unique_token_count)?;
        writeln!(f, "k value: {}", self.k_value)?;
        for category in &self.categories {
            writeln!(f)?;
            writeln!(f, "Category: {}", category.name)?;
            writeln!(f, "  documents: {}", category.doc_count)?;
            writeln!(f, "  tokens: {}", category.token_count)?;
            writeln!(f, "  distinct tokens: {}", category.distinct_tokens)?;
            writeln!(f, "  prior: {:.4}", category.prior)?;
        }
        Ok(())
    }
}

/// Render a result in the requested format.
pub fn render_result<T: Serialize + fmt::Display>(
    result: &T,
    args: &CategoristArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.to_string()),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + fmt::Display>(
    result: &T,
    args: &CategoristArgs,
) -> Result<()> {
    if args.verbosity() == 0 && args.output_format == OutputFormat::Human {
        return Ok(());
    }
    let rendered = render_result(result, args)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Command, StatsArgs};

    fn args(output_format: OutputFormat) -> CategoristArgs {
        CategoristArgs {
            verbose: 0,
            quiet: false,
            output_format,
            pretty: false,
            config: None,
            command: Command::Stats(StatsArgs {
                model: "model.json".into(),
            }),
        }
    }

    #[test]
    fn test_render_training_result() {
        let result = TrainingResult {
            category: "positive".to_string(),
            documents: 2,
            untrained: false,
        };

        assert_eq!(
            render_result(&result, &args(OutputFormat::Human)).unwrap(),
            "Trained 'positive' with 2 document(s)\n"
        );
        assert_eq!(
            render_result(&result, &args(OutputFormat::Json)).unwrap(),
            r#"{"category":"positive","documents":2,"untrained":false}"#
        );
    }

    #[test]
    fn test_render_classification() {
        let classification = Classification::from_values(vec![
            ("positive".to_string(), 0.75),
            ("negative".to_string(), 0.25),
        ])
        .unwrap();
        let results = ClassificationResults {
            results: vec![ClassificationOutput {
                text: "good job".to_string(),
                classification,
            }],
        };

        let human = render_result(&results, &args(OutputFormat::Human)).unwrap();
        assert!(human.contains("=> positive (75%)"));

        let json = render_result(&results, &args(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["results"][0]["classification"]["top_score"]["key"],
            "positive"
        );
    }
}
