//! Label table mapping classifier output indices to medicine names.
//!
//! The table is exported alongside the model as a JSON array; index i in the
//! array names the class behind output neuron i.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use otc_advisor_core::tablet::Classification;

/// Label table errors.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Empty label table")]
    Empty,
}

/// Ordered class names for the tablet model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Build a table from class names in output-index order.
    pub fn new(labels: Vec<String>) -> Result<Self, LabelError> {
        if labels.is_empty() {
            return Err(LabelError::Empty);
        }
        Ok(Self { labels })
    }

    /// Load a table from its exported JSON array form.
    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        let labels: Vec<String> = serde_json::from_str(json)?;
        Self::new(labels)
    }

    /// The exported JSON array form.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.labels).unwrap_or_else(|_| "[]".into())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Class name behind an output index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// All class names, in output-index order.
    pub fn names(&self) -> &[String] {
        &self.labels
    }

    /// Decode a softmax probability vector into the top classification.
    ///
    /// Returns `None` when the vector is empty or its length does not match
    /// the table.
    pub fn decode(&self, probabilities: &[f64]) -> Option<Classification> {
        if probabilities.len() != self.labels.len() {
            return None;
        }
        let (index, confidence) = probabilities
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))?;

        Some(Classification {
            label: self.labels[index].clone(),
            confidence: *confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LabelTable {
        LabelTable::new(vec!["Tylenol".into(), "Advil".into(), "Robitussin".into()]).unwrap()
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(LabelTable::new(vec![]), Err(LabelError::Empty)));
        assert!(matches!(LabelTable::from_json("[]"), Err(LabelError::Empty)));
    }

    #[test]
    fn test_json_round_trip() {
        let table = table();
        let restored = LabelTable::from_json(&table.to_json()).unwrap();
        assert_eq!(table, restored);
    }

    #[test]
    fn test_decode_picks_argmax() {
        let classification = table().decode(&[0.1, 0.7, 0.2]).unwrap();
        assert_eq!(classification.label, "Advil");
        assert_eq!(classification.confidence, 0.7);
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        assert!(table().decode(&[0.5, 0.5]).is_none());
        assert!(table().decode(&[]).is_none());
    }
}
