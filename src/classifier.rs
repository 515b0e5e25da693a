//! The classification engine.
//!
//! - [`bayes::Bayes`] - incremental multinomial Naive Bayes engine
//! - [`category::Category`] - per-category counters and token table
//! - [`document::Document`] - trained content with its multiplicity
//! - [`score::Classification`] - ranked per-category scores
//! - [`snapshot::ModelSnapshot`] - serializable engine state
//! - [`strategy::Classifier`] - delegation to a swappable [`strategy::Strategy`]

pub mod bayes;
pub mod category;
pub mod document;
pub mod score;
pub mod snapshot;
pub mod strategy;

pub use bayes::Bayes;
pub use score::{Classification, Score};
pub use snapshot::ModelSnapshot;
pub use strategy::{Classifier, Strategy};
