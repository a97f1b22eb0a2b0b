//! End-to-end walkthrough of the recommendation engine against a small
//! seeded knowledge base.

use anyhow::Result;

use otc_advisor_core::tablet::{Classification, ClassifierError, ImageClassifier};
use otc_advisor_core::{
    ContraindicationSeverity, Engine, Medicine, PatientCondition, PregnancyCategory,
    RecommendationRequest, Symptom, SymptomSeverity,
};

struct TableClassifier {
    entries: Vec<(Vec<u8>, Classification)>,
}

impl ImageClassifier for TableClassifier {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassifierError> {
        self.entries
            .iter()
            .find(|(bytes, _)| bytes == image)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| ClassifierError::Failed("no matching entry".into()))
    }
}

fn seed(engine: &Engine) -> Result<()> {
    let db = engine.db();

    let fever = db.insert_symptom(&Symptom::new("Fever"))?;
    let headache = db.insert_symptom(&Symptom::new("Headache"))?;
    let cough = db.insert_symptom(&Symptom::new("Cough"))?;
    let sore_throat = db.insert_symptom(&Symptom::new("Sore Throat"))?;
    let body_pain = db.insert_symptom(&Symptom::new("Body Pain"))?;

    let diabetes = db.insert_condition(&PatientCondition::new("Diabetes"))?;
    let hypertension = db.insert_condition(&PatientCondition::new("High Blood Pressure"))?;
    db.insert_condition(&PatientCondition::new("Pregnancy"))?;
    db.insert_condition(&PatientCondition::new("Liver Disease"))?;

    let mut tylenol = Medicine::new("Acetaminophen");
    tylenol.brand_name = Some("Tylenol".into());
    tylenol.strength = Some("500mg".into());
    tylenol.pregnancy_category = Some(PregnancyCategory::B);
    tylenol.pediatric_use = Some("Consult pediatric dosing chart".into());
    tylenol.geriatric_use = Some("No adjustment needed".into());
    let tylenol = db.insert_medicine(&tylenol)?;
    db.link_symptom(tylenol, fever, 0.9, false)?;
    db.link_symptom(tylenol, headache, 0.85, false)?;
    db.link_symptom(tylenol, body_pain, 0.8, false)?;

    let mut advil = Medicine::new("Ibuprofen");
    advil.brand_name = Some("Advil".into());
    advil.strength = Some("200mg".into());
    advil.pregnancy_category = Some(PregnancyCategory::D);
    let advil = db.insert_medicine(&advil)?;
    db.link_symptom(advil, fever, 0.85, false)?;
    db.link_symptom(advil, headache, 0.9, false)?;
    db.link_symptom(advil, body_pain, 0.9, false)?;
    db.link_contraindication(
        advil,
        hypertension,
        ContraindicationSeverity::Moderate,
        Some("May raise blood pressure"),
    )?;

    let mut robitussin = Medicine::new("Dextromethorphan");
    robitussin.brand_name = Some("Robitussin".into());
    let robitussin = db.insert_medicine(&robitussin)?;
    db.link_symptom(robitussin, cough, 0.8, false)?;
    db.link_symptom(robitussin, sore_throat, 0.5, false)?;
    db.link_contraindication(
        robitussin,
        diabetes,
        ContraindicationSeverity::Mild,
        Some("Syrup formulations contain sugar"),
    )?;

    Ok(())
}

fn show_recommendations(engine: &Engine, request: &RecommendationRequest) -> Result<()> {
    println!(
        "  symptoms: {:?}, conditions: {:?}, age: {:?}",
        request.symptoms, request.conditions, request.age
    );
    let results = engine.recommend(request)?;
    if results.is_empty() {
        println!("  (no recommendations)");
    }
    for rec in &results {
        println!(
            "  {:<12} score {:.3}  effectiveness {:.2}",
            rec.medicine.display_name(),
            rec.score,
            rec.effectiveness
        );
        for warning in &rec.safety_warnings {
            println!("      warning: {warning}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let engine = Engine::open_in_memory()?;
    seed(&engine)?;

    println!("== Recommendations ==");
    let cases = [
        RecommendationRequest {
            symptoms: vec!["Fever".into(), "Headache".into()],
            conditions: vec![],
            age: Some(30),
            gender: None,
            severity: SymptomSeverity::Moderate,
        },
        RecommendationRequest {
            symptoms: vec!["Cough".into(), "Sore Throat".into()],
            conditions: vec!["Diabetes".into()],
            age: Some(45),
            gender: None,
            severity: SymptomSeverity::Moderate,
        },
        RecommendationRequest {
            symptoms: vec!["Body Pain".into()],
            conditions: vec!["High Blood Pressure".into()],
            age: Some(60),
            gender: None,
            severity: SymptomSeverity::Severe,
        },
    ];
    for (i, request) in cases.iter().enumerate() {
        println!("case {}:", i + 1);
        show_recommendations(&engine, request)?;
    }

    println!("\n== Chat ==");
    for message in [
        "I have a fever and headache",
        "I'm a 25 year old female with diabetes and I have a cough",
        "I can't sleep and I feel strange",
    ] {
        println!("user: {message}");
        let reply = engine.respond(message, &[])?;
        println!("bot:  {}", reply.message);
        for rec in &reply.recommendations {
            println!("      {} ({:.3})", rec.medicine.display_name(), rec.score);
        }
        for question in &reply.questions {
            println!("      ? {question}");
        }
    }

    println!("\n== Tablet identification ==");
    let classifier = TableClassifier {
        entries: vec![(
            b"sample-tablet-photo".to_vec(),
            Classification {
                label: "Tylenol".into(),
                confidence: 0.92,
            },
        )],
    };
    let identified = engine.identify_tablet(&classifier, b"sample-tablet-photo")?;
    match &identified.medicine {
        Some(med) => println!(
            "{} -> {} (confidence {:.2})",
            identified.label,
            med.generic_name,
            identified.confidence
        ),
        None => println!("no match"),
    }

    println!("\n== Safety overview ==");
    for line in engine.safety_overview(&["Pregnancy".to_string()], Some(70)) {
        println!("  {line}");
    }

    Ok(())
}
