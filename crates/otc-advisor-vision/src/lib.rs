//! Image classifier wrapper for tablet identification.
//!
//! This crate adapts the output of a CNN tablet classifier (MobileNetV2
//! transfer-learning head, exported to ONNX) into the [`ImageClassifier`]
//! capability the core engine consumes.

pub mod labels;
pub mod recognition;

pub use labels::*;
pub use recognition::*;

pub use otc_advisor_core::tablet::{Classification, ClassifierError, ImageClassifier};
