//! Classifier output parsing and test doubles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use otc_advisor_core::tablet::{Classification, ClassifierError, ImageClassifier};

use crate::labels::LabelTable;

/// Recognition errors.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    #[error("Inference error: {0}")]
    Inference(String),
}

pub type RecognitionResult<T> = Result<T, RecognitionError>;

/// Raw output from the model runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutput {
    pub probabilities: Vec<f64>,
}

/// Parse model runner output JSON into a probability vector.
///
/// Tolerates surrounding text in the runner's stdout by slicing from the
/// first `{` to the last `}`.
pub fn parse_model_output(json: &str) -> RecognitionResult<ModelOutput> {
    let json_start = json.find('{').ok_or_else(|| {
        RecognitionError::InvalidFormat("No JSON object found in output".into())
    })?;
    let json_end = json.rfind('}').ok_or_else(|| {
        RecognitionError::InvalidFormat("No closing brace found in output".into())
    })?;

    let json_slice = &json[json_start..=json_end];
    let output: ModelOutput = serde_json::from_str(json_slice)?;

    Ok(output)
}

/// Decode runner output into the top classification for a label table.
pub fn decode_output(table: &LabelTable, json: &str) -> RecognitionResult<Classification> {
    let output = parse_model_output(json)?;
    table.decode(&output.probabilities).ok_or_else(|| {
        RecognitionError::InvalidFormat(format!(
            "Probability vector length {} does not match {} classes",
            output.probabilities.len(),
            table.len()
        ))
    })
}

/// Mock classifier for testing without actual model inference.
///
/// Classifies by exact image byte content against registered samples.
pub struct MockClassifier {
    samples: Vec<(Vec<u8>, Classification)>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Register an image and the classification it should produce.
    pub fn register(&mut self, image: impl Into<Vec<u8>>, classification: Classification) {
        self.samples.push((image.into(), classification));
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClassifier for MockClassifier {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassifierError> {
        self.samples
            .iter()
            .find(|(bytes, _)| bytes == image)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| ClassifierError::Failed("unrecognized sample".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_output() {
        let json = r#"{"probabilities":[0.1,0.7,0.2]}"#;
        let output = parse_model_output(json).unwrap();
        assert_eq!(output.probabilities, vec![0.1, 0.7, 0.2]);
    }

    #[test]
    fn test_parse_model_output_with_prefix() {
        let json = r#"loading model... done
{"probabilities":[0.9,0.1]}"#;
        let output = parse_model_output(json).unwrap();
        assert_eq!(output.probabilities.len(), 2);
    }

    #[test]
    fn test_parse_model_output_without_json() {
        assert!(matches!(
            parse_model_output("no json here"),
            Err(RecognitionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_output() {
        let table =
            LabelTable::new(vec!["Tylenol".into(), "Advil".into(), "Robitussin".into()]).unwrap();

        let classification =
            decode_output(&table, r#"{"probabilities":[0.05,0.15,0.8]}"#).unwrap();
        assert_eq!(classification.label, "Robitussin");
        assert_eq!(classification.confidence, 0.8);

        assert!(decode_output(&table, r#"{"probabilities":[1.0]}"#).is_err());
    }

    #[test]
    fn test_mock_classifier() {
        let mut classifier = MockClassifier::new();
        classifier.register(
            b"round-white-tablet".to_vec(),
            Classification {
                label: "Tylenol".into(),
                confidence: 0.92,
            },
        );

        let result = classifier.classify(b"round-white-tablet").unwrap();
        assert_eq!(result.label, "Tylenol");

        assert!(classifier.classify(b"unseen").is_err());
    }
}
