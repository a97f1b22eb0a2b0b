//! Recommendation ranking engine.
//!
//! Pipeline: candidate retrieval → effectiveness + safety scoring →
//! weighted total → severity adjustment → filter, sort, truncate.
//!
//! Scoring weights:
//! - Effectiveness: 60%
//! - Safety: 40%

mod effectiveness;
mod safety;

pub use effectiveness::*;
pub use safety::*;

use thiserror::Error;

use crate::db::Database;
use crate::models::{Recommendation, RecommendationRequest};

/// Weight of the effectiveness score in the total.
pub const EFFECTIVENESS_WEIGHT: f64 = 0.6;

/// Weight of the safety score in the total.
pub const SAFETY_WEIGHT: f64 = 0.4;

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Recommendation errors.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),
}

pub type RecommendResult<T> = Result<T, RecommendError>;

/// Ranker that coordinates candidate retrieval and both scorers.
pub struct Recommender<'a> {
    db: &'a Database,
    effectiveness: EffectivenessScorer<'a>,
    safety: SafetyScorer<'a>,
}

impl<'a> Recommender<'a> {
    /// Create a new recommender.
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            effectiveness: EffectivenessScorer::new(db),
            safety: SafetyScorer::new(db),
        }
    }

    /// Rank medicines for a patient request.
    ///
    /// An empty symptom list yields an empty result - no candidates are
    /// generated without at least one symptom. The request's `gender` is
    /// accepted but has no scoring effect. Entries are sorted descending by
    /// total score; the sort is stable, so ties keep the candidate retrieval
    /// order (ascending medicine id). At most [`MAX_RECOMMENDATIONS`] entries
    /// are returned, each with a total score > 0.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> RecommendResult<Vec<Recommendation>> {
        if request.symptoms.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.db.medicines_for_symptoms(&request.symptoms)?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored = Vec::new();
        for medicine in candidates {
            let effectiveness = self.effectiveness.score(&medicine, &request.symptoms)?;
            let safety = self
                .safety
                .score(&medicine, &request.conditions, request.age)?;

            let weighted = effectiveness * EFFECTIVENESS_WEIGHT + safety * SAFETY_WEIGHT;
            let total = (weighted * request.severity.multiplier()).max(0.0);

            if total <= 0.0 {
                continue;
            }

            let safety_warnings =
                self.safety
                    .warnings(&medicine, &request.conditions, request.age)?;

            scored.push(Recommendation {
                medicine,
                score: total,
                effectiveness,
                safety_warnings,
            });
        }

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(MAX_RECOMMENDATIONS);

        Ok(scored)
    }

    /// Fixed advisory strings for a patient, independent of any specific
    /// medicine. Triggered purely by condition name membership and age
    /// thresholds.
    pub fn safety_overview(&self, conditions: &[String], age: Option<u32>) -> Vec<String> {
        let mut warnings = Vec::new();

        if conditions.iter().any(|c| c == "Pregnancy") {
            warnings.push(
                "You are pregnant. Consult your doctor before taking any medication.".into(),
            );
        }
        if conditions.iter().any(|c| c == "Liver Disease") {
            warnings.push("You have liver disease. Some medications may be harmful.".into());
        }
        if conditions.iter().any(|c| c == "Kidney Disease") {
            warnings.push("You have kidney disease. Some medications may be harmful.".into());
        }

        if let Some(age) = age {
            if age < 18 {
                warnings.push(
                    "You are under 18. Consult a pediatrician before taking any medication.".into(),
                );
            } else if age > 65 {
                warnings.push("You are over 65. Some medications may affect you differently.".into());
            }
        }

        warnings
    }
}
