//! Image Classification Pipeline
//!
//! Orchestrates the still-image classification flow:
//! - Label table and model loading
//! - Bitmap to input-tensor encoding
//! - Inference through the embedded engine
//! - Arg-max decoding to a human-readable label

pub mod config;
pub mod decode;
pub mod pipeline;
pub mod sink;

pub use config::ClassifierConfig;
pub use decode::{decode, Classification};
pub use pipeline::Classifier;
pub use sink::{ResultSink, TracingResultSink};

use image_input::ImageInputError;
use label_store::LabelError;
use model_runtime::ModelError;
use tensor_encoder::EncodeError;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Classification error types.
///
/// Stage errors pass through transparently so callers can always attribute a
/// failure to the component it came from.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// classify() was invoked before any bitmap was supplied
    #[error("No input image available")]
    NoInputAvailable,

    /// Label count does not match the model's output class count
    #[error("Label table has {labels} entries, model produced {scores} scores")]
    ConfigMismatch { labels: usize, scores: usize },

    #[error(transparent)]
    Labels(#[from] LabelError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Input(#[from] ImageInputError),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
