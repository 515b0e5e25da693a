//! Plain, serializable form of a classifier's full state.
//!
//! A snapshot is what gets persisted: category counters, token tables and
//! document contents. Categories keep their creation order and token/document
//! tables are sorted, so exporting the same state always produces the same
//! bytes.
//!
//! # Examples
//!
//! ```
//! use categorist::classifier::snapshot::ModelSnapshot;
//!
//! let snapshot = ModelSnapshot::from_json(r#"{ "k_value": 1.0, "categories": {} }"#).unwrap();
//! assert!(snapshot.categories.is_empty());
//! assert_eq!(
//!     snapshot.to_json(false).unwrap(),
//!     r#"{"k_value":1.0,"categories":{}}"#
//! );
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenCounts;
use crate::error::Result;

fn default_k_value() -> f64 {
    1.0
}

/// Serializable state of a whole classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// Additive smoothing constant.
    #[serde(default = "default_k_value")]
    pub k_value: f64,

    /// Stored global counters; checked against the categories on restore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_token_count: Option<u64>,

    /// Categories in creation order.
    #[serde(default)]
    pub categories: IndexMap<String, CategorySnapshot>,
}

/// Serializable state of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub doc_count: u64,
    pub token_count: u64,
    #[serde(default)]
    pub tokens: TokenCounts,
    #[serde(default)]
    pub prior: f64,
    /// Documents keyed by content digest.
    #[serde(default)]
    pub docs: BTreeMap<String, DocumentSnapshot>,
}

/// Serializable state of one trained document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub content: String,
    pub multiplicity: u64,
}

impl Default for ModelSnapshot {
    fn default() -> Self {
        Self {
            k_value: default_k_value(),
            category_count: None,
            doc_count: None,
            token_count: None,
            unique_token_count: None,
            categories: IndexMap::new(),
        }
    }
}

impl ModelSnapshot {
    /// Serialize to JSON text.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot to a JSON file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json(true)?)?;
        Ok(())
    }

    /// Read a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
