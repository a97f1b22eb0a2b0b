//! Golden tests for the recommendation ranker.
//!
//! These tests verify ranking and scoring against known cases over a fixed
//! seeded knowledge base.

use otc_advisor_core::db::Database;
use otc_advisor_core::models::{
    ContraindicationSeverity, Medicine, PatientCondition, PregnancyCategory, Symptom,
    SymptomSeverity,
};
use otc_advisor_core::recommend::Recommender;
use otc_advisor_core::RecommendationRequest;

/// A known ranking case.
struct GoldenCase {
    id: &'static str,
    symptoms: &'static [&'static str],
    conditions: &'static [&'static str],
    age: Option<u32>,
    severity: SymptomSeverity,
    /// Expected results in order: (display name, total score).
    expected: &'static [(&'static str, f64)],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "single-symptom-healthy-adult",
            symptoms: &["Fever"],
            conditions: &[],
            age: Some(30),
            severity: SymptomSeverity::Moderate,
            // Tylenol: 0.6*0.9 + 0.4*1.0; Advil loses 0.5 safety to category D
            expected: &[("Tylenol", 0.94), ("Advil", 0.71)],
        },
        GoldenCase {
            id: "two-symptoms-averaged",
            symptoms: &["Fever", "Headache"],
            conditions: &[],
            age: Some(30),
            severity: SymptomSeverity::Moderate,
            // Both average to 0.875 effectiveness; safety separates them
            expected: &[("Tylenol", 0.925), ("Advil", 0.725)],
        },
        GoldenCase {
            id: "pregnancy-severe-contraindication",
            symptoms: &["Body Pain"],
            conditions: &["Pregnancy"],
            age: Some(28),
            severity: SymptomSeverity::Moderate,
            // Advil's safety floors at 0.0 (severe edge + category D), so
            // only its effectiveness term survives
            expected: &[("Tylenol", 0.88), ("Advil", 0.54)],
        },
        GoldenCase {
            id: "mild-severity-scales-down",
            symptoms: &["Fever"],
            conditions: &[],
            age: Some(30),
            severity: SymptomSeverity::Mild,
            expected: &[("Tylenol", 0.752), ("Advil", 0.568)],
        },
        GoldenCase {
            id: "severe-severity-scales-up",
            symptoms: &["Fever"],
            conditions: &[],
            age: Some(30),
            severity: SymptomSeverity::Severe,
            expected: &[("Tylenol", 1.128), ("Advil", 0.852)],
        },
        GoldenCase {
            id: "child-without-pediatric-guidance",
            symptoms: &["Cough"],
            conditions: &[],
            age: Some(8),
            severity: SymptomSeverity::Moderate,
            // Robitussin has no pediatric guidance: safety 0.7
            expected: &[("Robitussin", 0.76)],
        },
        GoldenCase {
            id: "elderly-diabetic-cough",
            symptoms: &["Cough"],
            conditions: &["Diabetes"],
            age: Some(70),
            severity: SymptomSeverity::Moderate,
            // Mild contraindication (0.2) + geriatric gap (0.2): safety 0.6
            expected: &[("Robitussin", 0.72)],
        },
        GoldenCase {
            id: "unknown-symptom-empty",
            symptoms: &["Vertigo"],
            conditions: &[],
            age: Some(30),
            severity: SymptomSeverity::Moderate,
            expected: &[],
        },
    ]
}

fn seed() -> Database {
    let db = Database::open_in_memory().unwrap();

    let fever = db.insert_symptom(&Symptom::new("Fever")).unwrap();
    let headache = db.insert_symptom(&Symptom::new("Headache")).unwrap();
    let cough = db.insert_symptom(&Symptom::new("Cough")).unwrap();
    db.insert_symptom(&Symptom::new("Sore Throat")).unwrap();
    let body_pain = db.insert_symptom(&Symptom::new("Body Pain")).unwrap();

    let pregnancy = db.insert_condition(&PatientCondition::new("Pregnancy")).unwrap();
    let diabetes = db.insert_condition(&PatientCondition::new("Diabetes")).unwrap();
    db.insert_condition(&PatientCondition::new("Liver Disease")).unwrap();

    let mut tylenol = Medicine::new("Acetaminophen");
    tylenol.brand_name = Some("Tylenol".into());
    tylenol.pregnancy_category = Some(PregnancyCategory::B);
    tylenol.pediatric_use = Some("Dosing chart by weight".into());
    tylenol.geriatric_use = Some("No adjustment needed".into());
    let tylenol = db.insert_medicine(&tylenol).unwrap();
    db.link_symptom(tylenol, fever, 0.9, false).unwrap();
    db.link_symptom(tylenol, headache, 0.85, false).unwrap();
    db.link_symptom(tylenol, body_pain, 0.8, false).unwrap();

    let mut advil = Medicine::new("Ibuprofen");
    advil.brand_name = Some("Advil".into());
    advil.pregnancy_category = Some(PregnancyCategory::D);
    advil.pediatric_use = Some("Ages 6 months and older by weight".into());
    advil.geriatric_use = Some("Use lowest effective dose".into());
    let advil = db.insert_medicine(&advil).unwrap();
    db.link_symptom(advil, fever, 0.85, false).unwrap();
    db.link_symptom(advil, headache, 0.9, false).unwrap();
    db.link_symptom(advil, body_pain, 0.9, false).unwrap();
    db.link_contraindication(
        advil,
        pregnancy,
        ContraindicationSeverity::Severe,
        Some("NSAIDs risk premature ductus closure"),
    )
    .unwrap();

    let mut robitussin = Medicine::new("Dextromethorphan");
    robitussin.brand_name = Some("Robitussin".into());
    let robitussin = db.insert_medicine(&robitussin).unwrap();
    db.link_symptom(robitussin, cough, 0.8, false).unwrap();
    db.link_contraindication(
        robitussin,
        diabetes,
        ContraindicationSeverity::Mild,
        Some("Syrup formulations contain sugar"),
    )
    .unwrap();

    db
}

#[test]
fn test_golden_cases() {
    let db = seed();
    let recommender = Recommender::new(&db);

    for case in get_golden_cases() {
        let request = RecommendationRequest {
            symptoms: case.symptoms.iter().map(|s| s.to_string()).collect(),
            conditions: case.conditions.iter().map(|s| s.to_string()).collect(),
            age: case.age,
            gender: None,
            severity: case.severity,
        };

        let results = recommender.recommend(&request).unwrap();

        assert_eq!(
            results.len(),
            case.expected.len(),
            "Case {}: result count mismatch",
            case.id
        );

        for (i, (expected_name, expected_score)) in case.expected.iter().enumerate() {
            assert_eq!(
                results[i].medicine.display_name(),
                *expected_name,
                "Case {}: rank {} name mismatch",
                case.id,
                i
            );
            assert!(
                (results[i].score - expected_score).abs() < 0.001,
                "Case {}: rank {} score mismatch - expected {}, got {}",
                case.id,
                i,
                expected_score,
                results[i].score
            );
        }
    }
}

#[test]
fn test_pregnancy_case_carries_warnings() {
    let db = seed();
    let recommender = Recommender::new(&db);

    let request = RecommendationRequest {
        symptoms: vec!["Body Pain".into()],
        conditions: vec!["Pregnancy".into()],
        age: Some(28),
        gender: None,
        severity: SymptomSeverity::Moderate,
    };

    let results = recommender.recommend(&request).unwrap();
    let advil = results
        .iter()
        .find(|r| r.medicine.display_name() == "Advil")
        .unwrap();

    assert!(advil
        .safety_warnings
        .iter()
        .any(|w| w.contains("Avoid during pregnancy")));
    assert!(advil
        .safety_warnings
        .iter()
        .any(|w| w.contains("Contraindicated for Pregnancy")));

    let tylenol = results
        .iter()
        .find(|r| r.medicine.display_name() == "Tylenol")
        .unwrap();
    assert!(tylenol.safety_warnings.is_empty());
}

#[test]
fn test_effectiveness_reported_alongside_total() {
    let db = seed();
    let recommender = Recommender::new(&db);

    let request = RecommendationRequest::from_symptoms(vec!["Fever".into(), "Headache".into()]);
    let results = recommender.recommend(&request).unwrap();

    for rec in &results {
        assert!((0.0..=1.0).contains(&rec.effectiveness));
    }
    let tylenol = results
        .iter()
        .find(|r| r.medicine.display_name() == "Tylenol")
        .unwrap();
    assert!((tylenol.effectiveness - 0.875).abs() < 1e-9);
}
