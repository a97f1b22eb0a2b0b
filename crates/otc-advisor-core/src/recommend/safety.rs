//! Safety scoring and warning generation.

use crate::db::Database;
use crate::models::Medicine;

use super::RecommendResult;

/// Age below which a medicine without pediatric guidance is penalized.
pub const PEDIATRIC_AGE: u32 = 12;

/// Age above which a medicine without geriatric guidance is penalized.
pub const GERIATRIC_AGE: u32 = 65;

/// Penalty for missing pediatric guidance under [`PEDIATRIC_AGE`].
pub const PEDIATRIC_GAP_PENALTY: f64 = 0.3;

/// Penalty for missing geriatric guidance over [`GERIATRIC_AGE`].
pub const GERIATRIC_GAP_PENALTY: f64 = 0.2;

/// Scores how safe a medicine is for a patient's conditions and age.
pub struct SafetyScorer<'a> {
    db: &'a Database,
}

impl<'a> SafetyScorer<'a> {
    /// Create a new safety scorer.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Safety score in [0, 1].
    ///
    /// Starts at 1.0 and subtracts penalties: one per matched contraindicated
    /// condition (by edge severity), an age-guidance gap adjustment, and the
    /// medicine's pregnancy-category risk. Penalties stack additively and the
    /// result is floored at 0.0.
    pub fn score(
        &self,
        medicine: &Medicine,
        conditions: &[String],
        age: Option<u32>,
    ) -> RecommendResult<f64> {
        let mut safety = 1.0;

        for name in conditions {
            if let Some(condition) = self.db.find_condition(name)? {
                if let Some(edge) = self.db.contraindication(medicine.id, condition.id)? {
                    safety -= edge.severity.penalty();
                }
            }
        }

        if let Some(age) = age {
            if age < PEDIATRIC_AGE && !medicine.has_pediatric_guidance() {
                safety -= PEDIATRIC_GAP_PENALTY;
            } else if age > GERIATRIC_AGE && !medicine.has_geriatric_guidance() {
                safety -= GERIATRIC_GAP_PENALTY;
            }
        }

        if let Some(category) = medicine.pregnancy_category {
            safety -= category.penalty();
        }

        Ok(safety.max(0.0))
    }

    /// Human-readable warnings, in fixed precedence: pregnancy category,
    /// then the applicable age bracket, then one entry per matched
    /// contraindicated condition.
    pub fn warnings(
        &self,
        medicine: &Medicine,
        conditions: &[String],
        age: Option<u32>,
    ) -> RecommendResult<Vec<String>> {
        let mut warnings = Vec::new();

        if let Some(text) = medicine.pregnancy_category.and_then(|c| c.warning()) {
            warnings.push(text.to_string());
        }

        if let Some(age) = age {
            if age < PEDIATRIC_AGE && !medicine.has_pediatric_guidance() {
                warnings.push("Not recommended for children under 12".into());
            } else if age > GERIATRIC_AGE && !medicine.has_geriatric_guidance() {
                warnings.push("Use with caution in elderly patients".into());
            }
        }

        for name in conditions {
            if let Some(condition) = self.db.find_condition(name)? {
                if let Some(edge) = self.db.contraindication(medicine.id, condition.id)? {
                    warnings.push(format!(
                        "Contraindicated for {}: {}",
                        condition.name,
                        edge.notes.as_deref().unwrap_or("")
                    ));
                }
            }
        }

        Ok(warnings)
    }
}
