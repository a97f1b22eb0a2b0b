//! OTC Advisor Core Library
//!
//! Deterministic recommendation engine for over-the-counter medicines.
//!
//! # Architecture
//!
//! ```text
//! Free text ──▶ Extraction ──▶ symptoms / age / gender / conditions
//!                                         │
//!                        ┌────────────────▼────────────────┐
//!                        │        Candidate lookup         │
//!                        │  (symptom name → medicines via  │
//!                        │   non-contraindicated edges)    │
//!                        └────────────────┬────────────────┘
//!                                         │
//!                      ┌──────────────────┼──────────────────┐
//!                      ▼                  ▼                  ▼
//!               Effectiveness          Safety           Warnings
//!                 (60%)                (40%)
//!                      └──────────────────┼──────────────────┘
//!                                         ▼
//!                      severity adjust → filter → sort → top 10
//! ```
//!
//! # Core Principle
//!
//! **The engine is a rule/weight evaluator over a static knowledge base.**
//! It does not diagnose, does not guarantee clinical correctness, and never
//! mutates the store. Unmatched names and empty inputs are valid domain
//! output, not errors; only storage failure is surfaced to the caller.
//!
//! # Modules
//!
//! - [`db`]: SQLite knowledge store (medicines, symptoms, conditions, edges)
//! - [`models`]: Domain types (Medicine, Recommendation, ChatReply, etc.)
//! - [`recommend`]: Effectiveness/safety scoring and ranking
//! - [`nlp`]: Symptom and demographic extraction from free text
//! - [`chat`]: Conversation responder
//! - [`tablet`]: Image classifier label → medicine mapping

pub mod chat;
pub mod db;
pub mod models;
pub mod nlp;
pub mod recommend;
pub mod tablet;

// Re-export commonly used types
pub use chat::Responder;
pub use db::Database;
pub use models::{
    ChatReply, Contraindication, ContraindicationSeverity, Gender, IdentifiedTablet, Medicine,
    PatientCondition, PatientInfo, PregnancyCategory, Recommendation, RecommendationRequest,
    Symptom, SymptomSeverity,
};
pub use nlp::Extractor;
pub use recommend::Recommender;
pub use tablet::{Classification, ImageClassifier, TabletIdentifier};

/// Engine-level error type for the glue layer.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Recommendation error: {0}")]
    Recommend(#[from] recommend::RecommendError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] nlp::ExtractionError),

    #[error("Chat error: {0}")]
    Chat(#[from] chat::ChatError),
}

/// Main engine facade owning the knowledge store handle.
///
/// Stateless between calls: every method performs a bounded number of
/// read-only lookups and returns. Concurrent use only requires that the
/// underlying store supports concurrent reads.
pub struct Engine {
    db: Database,
}

impl Engine {
    /// Open or create a knowledge store at the given path.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, EngineError> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }

    /// Create an engine over an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, EngineError> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// The underlying store, for seeding and direct lookups.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Rank medicines for a structured recommendation request.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, EngineError> {
        Ok(Recommender::new(&self.db).recommend(request)?)
    }

    /// Medicine-independent advisory strings for a patient profile.
    pub fn safety_overview(&self, conditions: &[String], age: Option<u32>) -> Vec<String> {
        Recommender::new(&self.db).safety_overview(conditions, age)
    }

    /// Reply to a free-text chat message.
    pub fn respond(&self, message: &str, history: &[String]) -> Result<ChatReply, EngineError> {
        Ok(Responder::new(&self.db).respond(message, history)?)
    }

    /// Identify a tablet photograph through an external classifier.
    pub fn identify_tablet(
        &self,
        classifier: &dyn ImageClassifier,
        image: &[u8],
    ) -> Result<IdentifiedTablet, EngineError> {
        Ok(TabletIdentifier::new(&self.db).identify(classifier, image)?)
    }

    /// Map an already-obtained classification to a stored medicine.
    pub fn identify_from_classification(
        &self,
        classification: Classification,
    ) -> Result<IdentifiedTablet, EngineError> {
        Ok(TabletIdentifier::new(&self.db).from_classification(classification)?)
    }
}
