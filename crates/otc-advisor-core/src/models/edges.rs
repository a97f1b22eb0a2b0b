//! Contraindication edge model and its severity tier.

use serde::{Deserialize, Serialize};

/// A contraindication edge: a medicine is unsafe for a condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contraindication {
    /// Row id
    pub id: i64,
    /// Medicine side of the edge
    pub medicine_id: i64,
    /// Condition side of the edge
    pub condition_id: i64,
    /// Contraindication severity tier
    pub severity: ContraindicationSeverity,
    /// Free-text notes included in user-facing warnings
    pub notes: Option<String>,
}

/// Severity tier of a stored contraindication edge.
///
/// Distinct from [`crate::models::SymptomSeverity`], which is the
/// patient-reported symptom intensity on a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContraindicationSeverity {
    Mild,
    Moderate,
    Severe,
}

impl ContraindicationSeverity {
    /// Parse from the stored lowercase form.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }

    /// The stored lowercase form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Safety score penalty for an edge of this severity.
    pub fn penalty(&self) -> f64 {
        match self {
            Self::Severe => 1.0,
            Self::Moderate => 0.5,
            Self::Mild => 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_roundtrip() {
        for severity in [
            ContraindicationSeverity::Mild,
            ContraindicationSeverity::Moderate,
            ContraindicationSeverity::Severe,
        ] {
            assert_eq!(ContraindicationSeverity::parse(severity.as_str()), Some(severity));
        }
        assert_eq!(ContraindicationSeverity::parse("SEVERE"), Some(ContraindicationSeverity::Severe));
        assert_eq!(ContraindicationSeverity::parse("fatal"), None);
    }

    #[test]
    fn test_severity_penalties() {
        assert_eq!(ContraindicationSeverity::Severe.penalty(), 1.0);
        assert_eq!(ContraindicationSeverity::Moderate.penalty(), 0.5);
        assert_eq!(ContraindicationSeverity::Mild.penalty(), 0.2);
    }
}
