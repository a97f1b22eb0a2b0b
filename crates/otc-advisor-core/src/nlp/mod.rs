//! Text understanding: symptom and demographic extraction from free text.

mod matcher;

pub use matcher::*;

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::db::Database;
use crate::models::{Gender, PatientInfo};

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Gender cue words, checked in this order: male cues win when both sets
/// are present (documented first-match precedence).
const MALE_CUES: &[&str] = &["male", "man", "boy", "he", "him"];
const FEMALE_CUES: &[&str] = &["female", "woman", "girl", "she", "her"];

fn age_pattern() -> &'static Regex {
    static AGE_RE: OnceLock<Regex> = OnceLock::new();
    AGE_RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*(?:years?|yrs?|old)").unwrap_or_else(|_| Regex::new("$^").unwrap())
    })
}

/// Extracts symptom mentions and patient demographics from chat text.
pub struct Extractor<'a> {
    db: &'a Database,
    symptom_matcher: Box<dyn NameMatcher>,
    condition_matcher: Box<dyn NameMatcher>,
}

impl<'a> Extractor<'a> {
    /// Create an extractor with the default lexical matching policies.
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            symptom_matcher: Box::<KeywordMatcher>::default(),
            condition_matcher: Box::<SubstringMatcher>::default(),
        }
    }

    /// Create an extractor with custom matching policies.
    pub fn with_matchers(
        db: &'a Database,
        symptom_matcher: Box<dyn NameMatcher>,
        condition_matcher: Box<dyn NameMatcher>,
    ) -> Self {
        Self {
            db,
            symptom_matcher,
            condition_matcher,
        }
    }

    /// Stored symptom names mentioned in the text.
    ///
    /// Each stored symptom contributes at most one entry; results follow
    /// storage order, not the order of mention in the input.
    pub fn extract_symptoms(&self, text: &str) -> ExtractionResult<Vec<String>> {
        let mut found = Vec::new();
        for symptom in self.db.list_symptoms()? {
            if self.symptom_matcher.matches(&symptom.name, text) {
                found.push(symptom.name);
            }
        }
        Ok(found)
    }

    /// Age, gender, and condition mentions from the text.
    pub fn extract_patient_info(&self, text: &str) -> ExtractionResult<PatientInfo> {
        let text_lower = text.to_lowercase();

        let age = age_pattern()
            .captures(&text_lower)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok());

        let gender = extract_gender(&text_lower);

        let mut conditions = Vec::new();
        for condition in self.db.list_conditions()? {
            if self.condition_matcher.matches(&condition.name, text) {
                conditions.push(condition.name);
            }
        }

        Ok(PatientInfo {
            age,
            gender,
            conditions,
        })
    }
}

/// First-match gender detection over word tokens.
fn extract_gender(text_lower: &str) -> Option<Gender> {
    let words: Vec<&str> = text_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    if MALE_CUES.iter().any(|cue| words.contains(cue)) {
        Some(Gender::Male)
    } else if FEMALE_CUES.iter().any(|cue| words.contains(cue)) {
        Some(Gender::Female)
    } else {
        None
    }
}
