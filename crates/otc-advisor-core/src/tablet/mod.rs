//! Tablet identification glue.
//!
//! The image model itself lives outside the engine; this module consumes its
//! single capability (image bytes in, label + confidence out) and maps the
//! label back to a stored medicine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::{Database, DbResult};
use crate::models::IdentifiedTablet;

/// Classifier errors. Never propagated past [`TabletIdentifier::identify`];
/// a failed classification maps to the "Unknown" reply.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Classification failed: {0}")]
    Failed(String),

    #[error("Unreadable image: {0}")]
    BadImage(String),
}

/// A candidate label produced by the external image model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    /// Predicted medicine label
    pub label: String,
    /// Model confidence in [0, 1]
    pub confidence: f64,
}

/// The single capability the engine consumes from the image collaborator.
pub trait ImageClassifier {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassifierError>;
}

/// Maps classifier labels to stored medicines.
pub struct TabletIdentifier<'a> {
    db: &'a Database,
}

impl<'a> TabletIdentifier<'a> {
    /// Create a new identifier.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Identify a tablet from a photograph.
    ///
    /// Classification failure and labels matching no stored medicine both
    /// produce the "Unknown" reply with zero confidence - neither is an
    /// error to the caller. Only a storage failure surfaces as `Err`.
    pub fn identify(
        &self,
        classifier: &dyn ImageClassifier,
        image: &[u8],
    ) -> DbResult<IdentifiedTablet> {
        let classification = match classifier.classify(image) {
            Ok(c) => c,
            Err(_) => return Ok(IdentifiedTablet::unknown()),
        };
        self.from_classification(classification)
    }

    /// Map an already-obtained classification to a stored medicine.
    pub fn from_classification(
        &self,
        classification: Classification,
    ) -> DbResult<IdentifiedTablet> {
        match self.db.find_medicine_by_name(&classification.label)? {
            Some(medicine) => Ok(IdentifiedTablet {
                label: classification.label,
                confidence: classification.confidence,
                medicine: Some(medicine),
            }),
            None => Ok(IdentifiedTablet::unknown()),
        }
    }
}
