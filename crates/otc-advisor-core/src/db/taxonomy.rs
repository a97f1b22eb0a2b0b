//! Symptom and condition store operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{PatientCondition, Symptom};

fn symptom_from_row(row: &Row<'_>) -> rusqlite::Result<Symptom> {
    Ok(Symptom {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn condition_from_row(row: &Row<'_>) -> rusqlite::Result<PatientCondition> {
    Ok(PatientCondition {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        affects_medication: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Database {
    /// Insert a symptom, returning its assigned id.
    pub fn insert_symptom(&self, symptom: &Symptom) -> DbResult<i64> {
        self.conn().execute(
            "INSERT INTO symptoms (name, description, category, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                symptom.name,
                symptom.description,
                symptom.category,
                symptom.created_at
            ],
        )?;
        Ok(self.conn().last_insert_rowid())
    }

    /// All symptoms in storage (id) order.
    pub fn list_symptoms(&self) -> DbResult<Vec<Symptom>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, description, category, created_at FROM symptoms ORDER BY id",
        )?;
        let rows = stmt.query_map([], symptom_from_row)?;
        let mut symptoms = Vec::new();
        for row in rows {
            symptoms.push(row?);
        }
        Ok(symptoms)
    }

    /// Resolve a symptom name by case-insensitive substring containment.
    ///
    /// When several records qualify, the first in id order wins. Unmatched
    /// names resolve to `None`, never an error.
    pub fn find_symptom(&self, name: &str) -> DbResult<Option<Symptom>> {
        let symptom = self
            .conn()
            .query_row(
                "SELECT id, name, description, category, created_at FROM symptoms
                 WHERE instr(lower(name), lower(?1)) > 0
                 ORDER BY id LIMIT 1",
                [name],
                symptom_from_row,
            )
            .optional()?;
        Ok(symptom)
    }

    /// Insert a patient condition, returning its assigned id.
    pub fn insert_condition(&self, condition: &PatientCondition) -> DbResult<i64> {
        self.conn().execute(
            "INSERT INTO patient_conditions (name, description, affects_medication, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                condition.name,
                condition.description,
                condition.affects_medication,
                condition.created_at
            ],
        )?;
        Ok(self.conn().last_insert_rowid())
    }

    /// All patient conditions in storage (id) order.
    pub fn list_conditions(&self) -> DbResult<Vec<PatientCondition>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, description, affects_medication, created_at
             FROM patient_conditions ORDER BY id",
        )?;
        let rows = stmt.query_map([], condition_from_row)?;
        let mut conditions = Vec::new();
        for row in rows {
            conditions.push(row?);
        }
        Ok(conditions)
    }

    /// Resolve a condition name by case-insensitive substring containment,
    /// first match in id order.
    pub fn find_condition(&self, name: &str) -> DbResult<Option<PatientCondition>> {
        let condition = self
            .conn()
            .query_row(
                "SELECT id, name, description, affects_medication, created_at
                 FROM patient_conditions
                 WHERE instr(lower(name), lower(?1)) > 0
                 ORDER BY id LIMIT 1",
                [name],
                condition_from_row,
            )
            .optional()?;
        Ok(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_list_symptoms_in_id_order() {
        let db = setup_db();

        db.insert_symptom(&Symptom::new("Fever")).unwrap();
        db.insert_symptom(&Symptom::new("Headache")).unwrap();
        db.insert_symptom(&Symptom::new("Cough")).unwrap();

        let names: Vec<String> = db.list_symptoms().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Fever", "Headache", "Cough"]);
    }

    #[test]
    fn test_find_symptom_case_insensitive_substring() {
        let db = setup_db();
        db.insert_symptom(&Symptom::new("Runny Nose")).unwrap();

        assert!(db.find_symptom("runny").unwrap().is_some());
        assert!(db.find_symptom("NOSE").unwrap().is_some());
        assert!(db.find_symptom("Runny Nose").unwrap().is_some());
        assert!(db.find_symptom("itch").unwrap().is_none());
    }

    #[test]
    fn test_find_symptom_ambiguous_takes_lowest_id() {
        let db = setup_db();

        let first = db.insert_symptom(&Symptom::new("Headache")).unwrap();
        db.insert_symptom(&Symptom::new("Severe Headache")).unwrap();

        let found = db.find_symptom("headache").unwrap().unwrap();
        assert_eq!(found.id, first);
    }

    #[test]
    fn test_find_condition() {
        let db = setup_db();

        let mut condition = PatientCondition::new("Liver Disease");
        condition.description = Some("Chronic or acute hepatic impairment".into());
        db.insert_condition(&condition).unwrap();

        let found = db.find_condition("liver").unwrap().unwrap();
        assert_eq!(found.name, "Liver Disease");
        assert!(found.affects_medication);

        assert!(db.find_condition("kidney").unwrap().is_none());
    }
}
