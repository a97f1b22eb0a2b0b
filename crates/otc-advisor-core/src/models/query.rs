//! Ephemeral per-request query context.

use serde::{Deserialize, Serialize};

/// A structured recommendation request.
///
/// Constructed per request and discarded after producing a response; the
/// engine keeps no state between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    /// Reported symptom names - at least one is required for any candidates
    pub symptoms: Vec<String>,
    /// Known patient condition names
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Patient age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Patient gender. Accepted but has no scoring effect; callers must not
    /// infer that gender changes output.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Patient-reported symptom intensity
    #[serde(default)]
    pub severity: SymptomSeverity,
}

impl RecommendationRequest {
    /// Create a request from symptom names, everything else defaulted.
    pub fn from_symptoms(symptoms: Vec<String>) -> Self {
        Self {
            symptoms,
            conditions: Vec::new(),
            age: None,
            gender: None,
            severity: SymptomSeverity::default(),
        }
    }
}

/// Patient-reported symptom intensity tier.
///
/// Distinct from [`crate::models::ContraindicationSeverity`], which is the
/// stored tier on a contraindication edge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl SymptomSeverity {
    /// Score multiplier: milder medicines preferred for mild symptoms,
    /// stronger scoring for severe symptoms.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Mild => 0.8,
            Self::Moderate => 1.0,
            Self::Severe => 1.2,
        }
    }
}

/// Patient gender tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Patient demographics extracted from free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientInfo {
    /// Age in years, if a pattern like "25 years old" was found
    pub age: Option<u32>,
    /// Gender, if a cue word was found
    pub gender: Option<Gender>,
    /// Known condition names mentioned in the text, in storage order
    pub conditions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_default_is_moderate() {
        assert_eq!(SymptomSeverity::default(), SymptomSeverity::Moderate);
    }

    #[test]
    fn test_severity_multipliers() {
        assert_eq!(SymptomSeverity::Mild.multiplier(), 0.8);
        assert_eq!(SymptomSeverity::Moderate.multiplier(), 1.0);
        assert_eq!(SymptomSeverity::Severe.multiplier(), 1.2);
    }

    #[test]
    fn test_request_json_shape() {
        // The wire shape consumed from the HTTP glue layer
        let json = r#"{
            "symptoms": ["Fever", "Headache"],
            "conditions": ["Diabetes"],
            "age": 30,
            "gender": "female",
            "severity": "severe"
        }"#;

        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.symptoms.len(), 2);
        assert_eq!(request.conditions, vec!["Diabetes"]);
        assert_eq!(request.age, Some(30));
        assert_eq!(request.gender, Some(Gender::Female));
        assert_eq!(request.severity, SymptomSeverity::Severe);
    }

    #[test]
    fn test_request_optional_fields_default() {
        let json = r#"{"symptoms": ["Cough"]}"#;
        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert!(request.conditions.is_empty());
        assert!(request.age.is_none());
        assert!(request.gender.is_none());
        assert_eq!(request.severity, SymptomSeverity::Moderate);
    }
}
