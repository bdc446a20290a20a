//! Model Runtime
//!
//! Loads a serialized classification model into an immutable buffer, hands it
//! to the embedded tract-onnx inference engine, and exposes the engine behind
//! a narrow trait so the pipeline can run against a mock in tests.

mod engine;
mod shape;

pub use engine::{ClassifierModel, FixedOutputModel, TractModel};
pub use shape::TensorShape;

use thiserror::Error;

/// Model runtime error types
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model resource missing or unopenable
    #[error("Model resource unavailable: {0}")]
    ResourceUnavailable(#[source] std::io::Error),

    /// Inference engine rejected the model bytes
    #[error("Model load failed: {0}")]
    ModelLoadFailure(String),

    /// Inference run failed inside the engine
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}
