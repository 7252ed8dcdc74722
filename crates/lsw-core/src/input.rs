//! Evaluation input document loading and validation.
//!
//! Typed serde structs deserialized from a JSON document, schema version
//! gated, then semantically validated. Parsing and validation are separate
//! steps so a caller can report exactly which stage rejected the document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lsw_common::{schema, Error, Result};

use crate::case::Case;
use crate::sweep::validate_input;

/// Standard candidate grid: 0.05, 0.10, ..., 0.95.
pub fn default_thresholds() -> Vec<f64> {
    (1..=19).map(|i| i as f64 * 0.05).collect()
}

/// Complete evaluation input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    pub cases: Vec<Case>,

    /// Candidate thresholds; the standard grid when absent.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
}

impl EvaluationInput {
    /// Parse an input document from a JSON string.
    ///
    /// Rejects documents whose major schema version differs from ours.
    pub fn from_json(json: &str) -> Result<Self> {
        let input: Self = serde_json::from_str(json)?;
        if !schema::is_compatible(&input.schema_version) {
            return Err(Error::Config(format!(
                "input schema version {} incompatible with {}",
                input.schema_version,
                schema::SCHEMA_VERSION
            )));
        }
        Ok(input)
    }

    /// Load and parse an input document from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Semantic validation of the sweep input contract.
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.cases, &self.thresholds)
    }
}
