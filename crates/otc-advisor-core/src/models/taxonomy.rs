//! Symptom and patient condition models.

use serde::{Deserialize, Serialize};

/// A symptom the engine can match medicines against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symptom {
    /// Row id
    pub id: i64,
    /// Unique symptom name (e.g., "Fever", "Headache")
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Category tag (e.g., "respiratory", "gastrointestinal")
    pub category: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl Symptom {
    /// Create a new symptom with required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
            category: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A patient condition that may contraindicate medicines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientCondition {
    /// Row id
    pub id: i64,
    /// Unique condition name (e.g., "Pregnancy", "Liver Disease")
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Whether this condition can affect medication choice
    pub affects_medication: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl PatientCondition {
    /// Create a new condition with required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
            affects_medication: true,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
