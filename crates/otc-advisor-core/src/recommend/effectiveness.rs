//! Effectiveness scoring over a symptom set.

use crate::db::Database;
use crate::models::Medicine;

use super::RecommendResult;

/// Scores how well, on average, a medicine addresses matched symptoms.
pub struct EffectivenessScorer<'a> {
    db: &'a Database,
}

impl<'a> EffectivenessScorer<'a> {
    /// Create a new effectiveness scorer.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Average stored effectiveness over the requested symptoms.
    ///
    /// Each requested name resolves to its first substring match; names that
    /// resolve to nothing are skipped, not penalized. The average is taken
    /// over the count of resolved symptoms, so the result stays in [0, 1].
    /// Zero resolved symptoms means 0.0.
    pub fn score(&self, medicine: &Medicine, symptom_names: &[String]) -> RecommendResult<f64> {
        let mut total = 0.0;
        let mut resolved = 0u32;

        for name in symptom_names {
            if let Some(symptom) = self.db.find_symptom(name)? {
                total += self.db.effectiveness_score(medicine.id, symptom.id)?;
                resolved += 1;
            }
        }

        if resolved == 0 {
            return Ok(0.0);
        }
        Ok(total / f64::from(resolved))
    }
}
