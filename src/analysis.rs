//! Text analysis module for Categorist.
//!
//! Turns raw document text into token occurrence counts: a tokenizer splits
//! the text, filters transform the stream, and an analyzer ties them together.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use token::{Token, TokenCounts, TokenStream};
