//! Conversation responder: free-text chat over the recommendation engine.

use thiserror::Error;

use crate::db::Database;
use crate::models::{ChatReply, RecommendationRequest};
use crate::nlp::Extractor;
use crate::recommend::Recommender;

/// Number of recommendations surfaced in a chat reply.
pub const TOP_CHAT_RECOMMENDATIONS: usize = 3;

/// Clarifying questions asked when no symptoms are detected.
pub const CLARIFYING_QUESTIONS: [&str; 4] = [
    "What symptoms are you experiencing?",
    "How long have you had these symptoms?",
    "Are you taking any other medications?",
    "Do you have any medical conditions I should know about?",
];

/// Chat errors.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] crate::nlp::ExtractionError),

    #[error("Recommendation error: {0}")]
    Recommend(#[from] crate::recommend::RecommendError),
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Orchestrates extraction and ranking into a structured chat reply.
pub struct Responder<'a> {
    extractor: Extractor<'a>,
    recommender: Recommender<'a>,
}

impl<'a> Responder<'a> {
    /// Create a new responder.
    pub fn new(db: &'a Database) -> Self {
        Self {
            extractor: Extractor::new(db),
            recommender: Recommender::new(db),
        }
    }

    /// Produce a structured reply to a chat message.
    ///
    /// `history` is accepted but does not currently alter behavior - a known
    /// limitation preserved from the original conversation design.
    pub fn respond(&self, message: &str, history: &[String]) -> ChatResult<ChatReply> {
        let _ = history;

        let symptoms = self.extractor.extract_symptoms(message)?;
        let patient_info = self.extractor.extract_patient_info(message)?;

        if symptoms.is_empty() {
            return Ok(ChatReply {
                message: "I didn't detect any specific symptoms in your message. \
                          Could you describe what symptoms you're experiencing?"
                    .into(),
                symptoms_found: symptoms,
                patient_info,
                recommendations: Vec::new(),
                questions: CLARIFYING_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            });
        }

        let request = RecommendationRequest {
            symptoms: symptoms.clone(),
            conditions: patient_info.conditions.clone(),
            age: patient_info.age,
            gender: patient_info.gender,
            severity: Default::default(),
        };

        let mut recommendations = self.recommender.recommend(&request)?;
        recommendations.truncate(TOP_CHAT_RECOMMENDATIONS);

        let summary = symptoms.join(", ");
        let message = if recommendations.is_empty() {
            format!(
                "I found {} symptom(s): {}. However, I don't have specific \
                 recommendations for these symptoms. Please consult a healthcare professional.",
                symptoms.len(),
                summary
            )
        } else {
            format!(
                "I found {} symptom(s): {}. Here are some recommendations:",
                symptoms.len(),
                summary
            )
        };

        Ok(ChatReply {
            message,
            symptoms_found: symptoms,
            patient_info,
            recommendations,
            questions: Vec::new(),
        })
    }
}
