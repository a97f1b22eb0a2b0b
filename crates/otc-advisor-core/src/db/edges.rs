//! Relation edge store operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Contraindication, ContraindicationSeverity};

impl Database {
    /// Record (or replace) an effectiveness edge between a medicine and a
    /// symptom.
    pub fn link_symptom(
        &self,
        medicine_id: i64,
        symptom_id: i64,
        effectiveness_score: f64,
        contraindicated: bool,
    ) -> DbResult<()> {
        self.conn().execute(
            r#"
            INSERT INTO medicine_symptoms (medicine_id, symptom_id, effectiveness_score, contraindicated)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(medicine_id, symptom_id) DO UPDATE SET
                effectiveness_score = excluded.effectiveness_score,
                contraindicated = excluded.contraindicated
            "#,
            params![medicine_id, symptom_id, effectiveness_score, contraindicated],
        )?;
        Ok(())
    }

    /// Stored effectiveness score for a (medicine, symptom) pair.
    ///
    /// Absence of an edge means effectiveness 0.0 for that symptom.
    pub fn effectiveness_score(&self, medicine_id: i64, symptom_id: i64) -> DbResult<f64> {
        let score: Option<f64> = self
            .conn()
            .query_row(
                "SELECT effectiveness_score FROM medicine_symptoms
                 WHERE medicine_id = ?1 AND symptom_id = ?2",
                params![medicine_id, symptom_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(score.unwrap_or(0.0))
    }

    /// Record (or replace) a contraindication edge between a medicine and a
    /// condition.
    pub fn link_contraindication(
        &self,
        medicine_id: i64,
        condition_id: i64,
        severity: ContraindicationSeverity,
        notes: Option<&str>,
    ) -> DbResult<()> {
        self.conn().execute(
            r#"
            INSERT INTO medicine_contraindications (medicine_id, condition_id, severity, notes)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(medicine_id, condition_id) DO UPDATE SET
                severity = excluded.severity,
                notes = excluded.notes
            "#,
            params![medicine_id, condition_id, severity.as_str(), notes],
        )?;
        Ok(())
    }

    /// Fetch the contraindication edge for a (medicine, condition) pair.
    ///
    /// Absence of an edge means "not contraindicated".
    pub fn contraindication(
        &self,
        medicine_id: i64,
        condition_id: i64,
    ) -> DbResult<Option<Contraindication>> {
        let edge = self
            .conn()
            .query_row(
                "SELECT id, medicine_id, condition_id, severity, notes
                 FROM medicine_contraindications
                 WHERE medicine_id = ?1 AND condition_id = ?2",
                params![medicine_id, condition_id],
                |row| {
                    let severity: String = row.get(3)?;
                    Ok(Contraindication {
                        id: row.get(0)?,
                        medicine_id: row.get(1)?,
                        condition_id: row.get(2)?,
                        severity: ContraindicationSeverity::parse(&severity)
                            .unwrap_or(ContraindicationSeverity::Moderate),
                        notes: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Medicine, PatientCondition, Symptom};

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_effectiveness_score_default_zero() {
        let db = setup_db();
        assert_eq!(db.effectiveness_score(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_link_symptom_and_score() {
        let db = setup_db();

        let medicine = db.insert_medicine(&Medicine::new("Acetaminophen")).unwrap();
        let symptom = db.insert_symptom(&Symptom::new("Fever")).unwrap();

        db.link_symptom(medicine, symptom, 0.9, false).unwrap();
        assert_eq!(db.effectiveness_score(medicine, symptom).unwrap(), 0.9);

        // Relinking replaces the stored score
        db.link_symptom(medicine, symptom, 0.75, false).unwrap();
        assert_eq!(db.effectiveness_score(medicine, symptom).unwrap(), 0.75);
    }

    #[test]
    fn test_contraindication_absent_means_safe() {
        let db = setup_db();
        assert!(db.contraindication(1, 1).unwrap().is_none());
    }

    #[test]
    fn test_link_and_fetch_contraindication() {
        let db = setup_db();

        let medicine = db.insert_medicine(&Medicine::new("Ibuprofen")).unwrap();
        let condition = db.insert_condition(&PatientCondition::new("Kidney Disease")).unwrap();

        db.link_contraindication(
            medicine,
            condition,
            ContraindicationSeverity::Severe,
            Some("NSAIDs can worsen renal function"),
        )
        .unwrap();

        let edge = db.contraindication(medicine, condition).unwrap().unwrap();
        assert_eq!(edge.severity, ContraindicationSeverity::Severe);
        assert_eq!(edge.notes.as_deref(), Some("NSAIDs can worsen renal function"));
    }
}
