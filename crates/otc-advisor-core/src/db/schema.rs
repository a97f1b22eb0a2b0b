//! SQLite schema definition.

/// Complete database schema for the knowledge store.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Medicines
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicines (
    id INTEGER PRIMARY KEY,
    brand_name TEXT,
    generic_name TEXT NOT NULL,
    manufacturer TEXT,
    product_type TEXT,
    indications_and_usage TEXT,
    dosage_and_administration TEXT,
    warnings TEXT,
    adverse_reactions TEXT,
    drug_interactions TEXT,
    tablet_shape TEXT,
    tablet_color TEXT,
    imprint_code TEXT,
    active_ingredients TEXT,
    strength TEXT,
    pregnancy_category TEXT,
    pediatric_use TEXT,
    geriatric_use TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_medicines_brand_name ON medicines(brand_name);
CREATE INDEX IF NOT EXISTS idx_medicines_generic_name ON medicines(generic_name);

-- ============================================================================
-- Symptoms
-- ============================================================================

CREATE TABLE IF NOT EXISTS symptoms (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    category TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_symptoms_name ON symptoms(name);

-- ============================================================================
-- Patient Conditions
-- ============================================================================

CREATE TABLE IF NOT EXISTS patient_conditions (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    affects_medication INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Medicine-Symptom effectiveness edges
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicine_symptoms (
    id INTEGER PRIMARY KEY,
    medicine_id INTEGER NOT NULL REFERENCES medicines(id),
    symptom_id INTEGER NOT NULL REFERENCES symptoms(id),
    effectiveness_score REAL NOT NULL DEFAULT 0.0
        CHECK (effectiveness_score >= 0.0 AND effectiveness_score <= 1.0),
    contraindicated INTEGER NOT NULL DEFAULT 0,
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE (medicine_id, symptom_id)
);

CREATE INDEX IF NOT EXISTS idx_medicine_symptoms_symptom ON medicine_symptoms(symptom_id);

-- ============================================================================
-- Medicine-Condition contraindication edges
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicine_contraindications (
    id INTEGER PRIMARY KEY,
    medicine_id INTEGER NOT NULL REFERENCES medicines(id),
    condition_id INTEGER NOT NULL REFERENCES patient_conditions(id),
    severity TEXT NOT NULL CHECK (severity IN ('mild', 'moderate', 'severe')),
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE (medicine_id, condition_id)
);

CREATE INDEX IF NOT EXISTS idx_medicine_contraindications_condition
    ON medicine_contraindications(condition_id);
"#;
