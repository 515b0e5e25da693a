//! Classification scores and results.

use serde::{Deserialize, Serialize};

/// The score of one category for a classified document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Category name.
    pub key: String,
    /// Unnormalized document probability.
    pub value: f64,
    /// Share of the total score, floored to a whole percent.
    pub percentage: u32,
}

/// Ranked per-category scores of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    scores: Vec<Score>,
    top_score: Score,
    total_score: f64,
}

impl Classification {
    /// Build a classification from `(category, value)` pairs in category order.
    ///
    /// The top score is the first maximal value. A zero total is treated as 1.
    /// Returns `None` when there are no scores.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let values: Vec<(String, f64)> = values.into_iter().collect();

        let mut top = 0;
        for (i, (_, value)) in values.iter().enumerate() {
            if *value > values[top].1 {
                top = i;
            }
        }

        let mut total_score: f64 = values.iter().map(|(_, value)| value).sum();
        if total_score == 0.0 {
            total_score = 1.0;
        }

        let scores: Vec<Score> = values
            .into_iter()
            .map(|(key, value)| Score {
                percentage: (value * 100.0 / total_score).floor() as u32,
                key,
                value,
            })
            .collect();

        let top_score = scores.get(top)?.clone();
        Some(Classification {
            scores,
            top_score,
            total_score,
        })
    }

    /// All scores, in category creation order.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// The winning score.
    pub fn top_score(&self) -> &Score {
        &self.top_score
    }

    /// The sum of all score values (1 when the sum is zero).
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Look up the score of a category.
    pub fn get(&self, key: &str) -> Option<&Score> {
        self.scores.iter().find(|score| score.key == key)
    }

    /// Scores ordered from best to worst; ties keep category order.
    pub fn ranked(&self) -> Vec<&Score> {
        let mut ranked: Vec<&Score> = self.scores.iter().collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_percentages_and_top_score() {
        let result =
            Classification::from_values(values(&[("a", 0.125), ("b", 0.375), ("c", 0.125)]))
                .unwrap();

        assert_eq!(result.top_score().key, "b");
        assert_eq!(result.get("b").unwrap().percentage, 60);
        assert_eq!(result.get("a").unwrap().percentage, 20);
        assert_eq!(result.total_score(), 0.625);
    }

    #[test]
    fn test_first_maximal_wins_ties() {
        let result = Classification::from_values(values(&[("a", 0.2), ("b", 0.5), ("c", 0.5)]))
            .unwrap();
        assert_eq!(result.top_score().key, "b");
        assert_eq!(result.ranked()[0].key, "b");
        assert_eq!(result.ranked()[2].key, "a");
    }

    #[test]
    fn test_zero_total_treated_as_one() {
        let result = Classification::from_values(values(&[("a", 0.0), ("b", 0.0)])).unwrap();
        assert_eq!(result.total_score(), 1.0);
        assert_eq!(result.top_score().key, "a");
        assert_eq!(result.top_score().percentage, 0);
    }

    #[test]
    fn test_empty_values() {
        assert!(Classification::from_values(Vec::new()).is_none());
    }
}
