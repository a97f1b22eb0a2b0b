//! Medicine models.

use serde::{Deserialize, Serialize};

/// An over-the-counter medicine record from the knowledge store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Row id (assigned by the store on insert)
    pub id: i64,
    /// Brand name - may be absent
    pub brand_name: Option<String>,
    /// Generic name - always present
    pub generic_name: String,
    /// Manufacturer
    pub manufacturer: Option<String>,
    /// Product type (e.g., "HUMAN OTC DRUG")
    pub product_type: Option<String>,
    /// Indications and usage text
    pub indications_and_usage: Option<String>,
    /// Dosage and administration text
    pub dosage_and_administration: Option<String>,
    /// Warnings text
    pub warnings: Option<String>,
    /// Adverse reactions text
    pub adverse_reactions: Option<String>,
    /// Drug interactions text
    pub drug_interactions: Option<String>,
    /// Tablet shape (e.g., "round", "oval")
    pub tablet_shape: Option<String>,
    /// Tablet color
    pub tablet_color: Option<String>,
    /// Imprint code stamped on the tablet
    pub imprint_code: Option<String>,
    /// Active ingredients text
    pub active_ingredients: Option<String>,
    /// Strength (e.g., "500mg")
    pub strength: Option<String>,
    /// Pregnancy risk category
    pub pregnancy_category: Option<PregnancyCategory>,
    /// Pediatric use guidance - absence means unvetted for children
    pub pediatric_use: Option<String>,
    /// Geriatric use guidance - absence means unvetted for the elderly
    pub geriatric_use: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Medicine {
    /// Create a new medicine with required fields.
    pub fn new(generic_name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: 0,
            brand_name: None,
            generic_name: generic_name.into(),
            manufacturer: None,
            product_type: None,
            indications_and_usage: None,
            dosage_and_administration: None,
            warnings: None,
            adverse_reactions: None,
            drug_interactions: None,
            tablet_shape: None,
            tablet_color: None,
            imprint_code: None,
            active_ingredients: None,
            strength: None,
            pregnancy_category: None,
            pediatric_use: None,
            geriatric_use: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// The name shown to users: brand name when present, generic otherwise.
    pub fn display_name(&self) -> &str {
        self.brand_name.as_deref().unwrap_or(&self.generic_name)
    }

    /// Whether pediatric dosing guidance is recorded.
    pub fn has_pediatric_guidance(&self) -> bool {
        self.pediatric_use.is_some()
    }

    /// Whether geriatric dosing guidance is recorded.
    pub fn has_geriatric_guidance(&self) -> bool {
        self.geriatric_use.is_some()
    }
}

/// FDA pregnancy risk category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PregnancyCategory {
    A,
    B,
    C,
    D,
    X,
}

impl PregnancyCategory {
    /// Parse from a stored letter. Unknown letters read as absent.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "X" => Some(Self::X),
            _ => None,
        }
    }

    /// The stored letter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::X => "X",
        }
    }

    /// Safety score penalty for this category.
    pub fn penalty(&self) -> f64 {
        match self {
            Self::X => 0.8,
            Self::D => 0.5,
            Self::C => 0.2,
            Self::A | Self::B => 0.0,
        }
    }

    /// User-facing pregnancy warning, if this category carries one.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Self::X => Some("DO NOT USE during pregnancy - may cause birth defects"),
            Self::D => Some("Avoid during pregnancy - may cause harm to fetus"),
            Self::C => Some("Use with caution during pregnancy - consult doctor"),
            Self::A | Self::B => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_medicine() {
        let medicine = Medicine::new("Acetaminophen");
        assert_eq!(medicine.generic_name, "Acetaminophen");
        assert!(medicine.brand_name.is_none());
        assert_eq!(medicine.display_name(), "Acetaminophen");
    }

    #[test]
    fn test_display_name_prefers_brand() {
        let mut medicine = Medicine::new("Acetaminophen");
        medicine.brand_name = Some("Tylenol".into());
        assert_eq!(medicine.display_name(), "Tylenol");
    }

    #[test]
    fn test_pregnancy_category_parse() {
        assert_eq!(PregnancyCategory::parse("X"), Some(PregnancyCategory::X));
        assert_eq!(PregnancyCategory::parse("x"), Some(PregnancyCategory::X));
        assert_eq!(PregnancyCategory::parse(" b "), Some(PregnancyCategory::B));
        assert_eq!(PregnancyCategory::parse("unknown"), None);
        assert_eq!(PregnancyCategory::parse(""), None);
    }

    #[test]
    fn test_pregnancy_category_penalties() {
        assert_eq!(PregnancyCategory::X.penalty(), 0.8);
        assert_eq!(PregnancyCategory::D.penalty(), 0.5);
        assert_eq!(PregnancyCategory::C.penalty(), 0.2);
        assert_eq!(PregnancyCategory::A.penalty(), 0.0);
        assert_eq!(PregnancyCategory::B.penalty(), 0.0);
    }

    #[test]
    fn test_pregnancy_category_warnings() {
        assert!(PregnancyCategory::X.warning().unwrap().contains("DO NOT USE"));
        assert!(PregnancyCategory::A.warning().is_none());
        assert!(PregnancyCategory::B.warning().is_none());
    }

    #[test]
    fn test_guidance_presence() {
        let mut medicine = Medicine::new("Ibuprofen");
        assert!(!medicine.has_pediatric_guidance());
        medicine.pediatric_use = Some("Consult a doctor for children under 12".into());
        assert!(medicine.has_pediatric_guidance());
    }
}
