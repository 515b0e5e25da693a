//! Pattern-group tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{CategoristError, Result};

/// A tokenizer driven by two groups of regular expressions.
///
/// Every match of a *minus* pattern is first replaced by a single space, in
/// pattern order. Every match of every *plus* pattern in the stripped text then
/// becomes a token, one pattern after the other. Offsets refer to the stripped
/// text.
#[derive(Clone, Debug)]
pub struct PatternTokenizer {
    minus: Arc<Vec<Regex>>,
    plus: Arc<Vec<Regex>>,
}

impl PatternTokenizer {
    /// Create a new pattern tokenizer from minus and plus pattern sources.
    pub fn new<S: AsRef<str>>(minus: &[S], plus: &[S]) -> Result<Self> {
        Ok(PatternTokenizer {
            minus: Arc::new(compile(minus)?),
            plus: Arc::new(compile(plus)?),
        })
    }

    /// Get the minus patterns.
    pub fn minus_patterns(&self) -> Vec<&str> {
        self.minus.iter().map(Regex::as_str).collect()
    }

    /// Get the plus patterns.
    pub fn plus_patterns(&self) -> Vec<&str> {
        self.plus.iter().map(Regex::as_str).collect()
    }

    fn strip(&self, text: &str) -> String {
        let mut body = text.to_owned();
        for pattern in self.minus.iter() {
            body = pattern.replace_all(&body, " ").into_owned();
        }
        body
    }
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p.as_ref())
                .map_err(|e| CategoristError::analysis(format!("Invalid regex pattern: {e}")))
        })
        .collect()
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let body = self.strip(text);

        let mut tokens = Vec::new();
        for pattern in self.plus.iter() {
            for mat in pattern.find_iter(&body) {
                let position = tokens.len();
                tokens.push(Token::with_offsets(
                    mat.as_str(),
                    position,
                    mat.start(),
                    mat.end(),
                ));
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokenizer() -> PatternTokenizer {
        PatternTokenizer::new(
            &[r"[\s]+", r"(@[\w\d]+)"],
            &[r"[\p{L}0-9-]{2,}", r"[!?]", r"[:)(;|-]{2,3}"],
        )
        .unwrap()
    }

    #[test]
    fn test_plus_patterns_in_order() {
        let tokens: Vec<String> = default_tokenizer()
            .tokenize("how are you?? : :| :) ;-) :(")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(
            tokens,
            vec!["how", "are", "you", "?", "?", ":|", ":)", ";-)", ":("]
        );
    }

    #[test]
    fn test_minus_patterns_strip_handles() {
        let tokens: Vec<String> = default_tokenizer()
            .tokenize("thanks @someone42 for this")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["thanks", "for", "this"]);
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokens: Vec<Token> = default_tokenizer().tokenize("good job!").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
        assert_eq!(tokens[2].text, "!");
        assert_eq!(tokens[2].start_offset, 8);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternTokenizer::new(&[r"\s+"], &[r"[unclosed"]);
        assert!(matches!(result, Err(CategoristError::Analysis(_))));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(default_tokenizer().name(), "pattern");
        assert_eq!(default_tokenizer().minus_patterns().len(), 2);
        assert_eq!(default_tokenizer().plus_patterns().len(), 3);
    }
}
