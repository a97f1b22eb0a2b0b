//! Recommendation and chat reply models.

use serde::{Deserialize, Serialize};

use super::{Medicine, PatientInfo};

/// A single ranked recommendation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Full medicine record
    pub medicine: Medicine,
    /// Weighted total score: effectiveness and safety combined, severity
    /// multiplier applied. Always > 0 for returned entries.
    pub score: f64,
    /// Raw average effectiveness over the resolved requested symptoms
    pub effectiveness: f64,
    /// Per-medicine safety warnings, pregnancy first, then age, then
    /// matched contraindicated conditions
    pub safety_warnings: Vec<String>,
}

/// Structured reply to a free-text chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    /// Natural-language framing of the result
    pub message: String,
    /// Symptom names detected in the input, in storage order
    pub symptoms_found: Vec<String>,
    /// Demographics extracted from the input
    pub patient_info: PatientInfo,
    /// Top recommendations for the detected symptoms (at most three)
    pub recommendations: Vec<Recommendation>,
    /// Clarifying questions, populated only when no symptoms were detected
    pub questions: Vec<String>,
}

/// Result of mapping an image classifier label back to a medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentifiedTablet {
    /// Classifier label, or "Unknown" when classification failed or the
    /// label matched no stored medicine
    pub label: String,
    /// Classifier confidence, 0.0 on failure
    pub confidence: f64,
    /// The matched medicine record, if any
    pub medicine: Option<Medicine>,
}

impl IdentifiedTablet {
    /// The fixed reply for a failed or unmatched classification.
    pub fn unknown() -> Self {
        Self {
            label: "Unknown".into(),
            confidence: 0.0,
            medicine: None,
        }
    }
}
