//! Medicine store operations.

use std::collections::BTreeMap;

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Medicine, PregnancyCategory};

/// Column list shared by every medicine SELECT.
const MEDICINE_COLUMNS: &str = "id, brand_name, generic_name, manufacturer, product_type, \
     indications_and_usage, dosage_and_administration, warnings, adverse_reactions, \
     drug_interactions, tablet_shape, tablet_color, imprint_code, active_ingredients, \
     strength, pregnancy_category, pediatric_use, geriatric_use, created_at, updated_at";

fn medicine_from_row(row: &Row<'_>) -> rusqlite::Result<Medicine> {
    let pregnancy_category: Option<String> = row.get(15)?;
    Ok(Medicine {
        id: row.get(0)?,
        brand_name: row.get(1)?,
        generic_name: row.get(2)?,
        manufacturer: row.get(3)?,
        product_type: row.get(4)?,
        indications_and_usage: row.get(5)?,
        dosage_and_administration: row.get(6)?,
        warnings: row.get(7)?,
        adverse_reactions: row.get(8)?,
        drug_interactions: row.get(9)?,
        tablet_shape: row.get(10)?,
        tablet_color: row.get(11)?,
        imprint_code: row.get(12)?,
        active_ingredients: row.get(13)?,
        strength: row.get(14)?,
        pregnancy_category: pregnancy_category.as_deref().and_then(PregnancyCategory::parse),
        pediatric_use: row.get(16)?,
        geriatric_use: row.get(17)?,
        created_at: row.get(18)?,
        updated_at: row.get(19)?,
    })
}

impl Database {
    /// Insert a medicine, returning its assigned id.
    pub fn insert_medicine(&self, medicine: &Medicine) -> DbResult<i64> {
        self.conn().execute(
            r#"
            INSERT INTO medicines (
                brand_name, generic_name, manufacturer, product_type,
                indications_and_usage, dosage_and_administration, warnings,
                adverse_reactions, drug_interactions, tablet_shape, tablet_color,
                imprint_code, active_ingredients, strength, pregnancy_category,
                pediatric_use, geriatric_use, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
            "#,
            params![
                medicine.brand_name,
                medicine.generic_name,
                medicine.manufacturer,
                medicine.product_type,
                medicine.indications_and_usage,
                medicine.dosage_and_administration,
                medicine.warnings,
                medicine.adverse_reactions,
                medicine.drug_interactions,
                medicine.tablet_shape,
                medicine.tablet_color,
                medicine.imprint_code,
                medicine.active_ingredients,
                medicine.strength,
                medicine.pregnancy_category.map(|c| c.as_str()),
                medicine.pediatric_use,
                medicine.geriatric_use,
                medicine.created_at,
                medicine.updated_at,
            ],
        )?;
        Ok(self.conn().last_insert_rowid())
    }

    /// Get a medicine by id.
    pub fn get_medicine(&self, id: i64) -> DbResult<Option<Medicine>> {
        let sql = format!("SELECT {MEDICINE_COLUMNS} FROM medicines WHERE id = ?");
        let medicine = self
            .conn()
            .query_row(&sql, [id], medicine_from_row)
            .optional()?;
        Ok(medicine)
    }

    /// Find a medicine by brand or generic name.
    ///
    /// Case-insensitive substring containment; when several records qualify,
    /// the first in id order wins.
    pub fn find_medicine_by_name(&self, name: &str) -> DbResult<Option<Medicine>> {
        let sql = format!(
            "SELECT {MEDICINE_COLUMNS} FROM medicines \
             WHERE instr(lower(coalesce(brand_name, '')), lower(?1)) > 0 \
                OR instr(lower(generic_name), lower(?1)) > 0 \
             ORDER BY id LIMIT 1"
        );
        let medicine = self
            .conn()
            .query_row(&sql, [name], medicine_from_row)
            .optional()?;
        Ok(medicine)
    }

    /// Medicines with at least one non-contraindicated effectiveness edge to
    /// any of the requested symptoms.
    ///
    /// Each caller term is matched independently by case-insensitive substring
    /// containment on the stored symptom name. Results are deduplicated and
    /// returned in ascending medicine id order, which downstream ranking
    /// relies on as its tie-break order.
    pub fn medicines_for_symptoms(&self, symptom_names: &[String]) -> DbResult<Vec<Medicine>> {
        if symptom_names.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT DISTINCT {cols} FROM medicines m \
             JOIN medicine_symptoms ms ON ms.medicine_id = m.id \
             JOIN symptoms s ON s.id = ms.symptom_id \
             WHERE ms.contraindicated = 0 \
               AND instr(lower(s.name), lower(?1)) > 0",
            cols = MEDICINE_COLUMNS
                .split(", ")
                .map(|c| format!("m.{c}"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut found: BTreeMap<i64, Medicine> = BTreeMap::new();
        let mut stmt = self.conn().prepare(&sql)?;
        for name in symptom_names {
            let rows = stmt.query_map([name], medicine_from_row)?;
            for row in rows {
                let medicine = row?;
                found.entry(medicine.id).or_insert(medicine);
            }
        }

        Ok(found.into_values().collect())
    }
}
