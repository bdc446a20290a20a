//! tract-backed model handle and the inference-engine seam

use crate::{ModelError, TensorShape};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::{debug, info};

/// Classification model handle.
///
/// The pipeline needs exactly two operations from a loaded model: its
/// declared input shape and a single blocking inference pass. Everything
/// about the model format stays behind this trait.
pub trait ClassifierModel {
    /// Input tensor shape declared by the model, queried once at load time
    fn input_shape(&self) -> TensorShape;

    /// Run one inference pass over a normalized NHWC tensor, returning one
    /// score per class
    fn run(&self, input: Vec<f32>) -> Result<Vec<f32>, ModelError>;
}

type RunnablePlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// ONNX classification model executed by the embedded tract engine
#[derive(Debug)]
pub struct TractModel {
    plan: RunnablePlan,
    shape: TensorShape,
}

impl TractModel {
    /// Read a model file into an immutable buffer and initialize the engine
    /// against it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(ModelError::ResourceUnavailable)?;
        info!(
            "Loading classification model from {} ({} bytes)",
            path.display(),
            bytes.len()
        );
        Self::from_bytes(&bytes)
    }

    /// Initialize the engine from an already-resident model buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(bytes))
            .map_err(|e| ModelError::ModelLoadFailure(e.to_string()))?;
        let typed = model
            .into_optimized()
            .map_err(|e| ModelError::ModelLoadFailure(e.to_string()))?;
        let shape = declared_input_shape(&typed)?;
        let plan = typed
            .into_runnable()
            .map_err(|e| ModelError::ModelLoadFailure(e.to_string()))?;
        debug!(
            "Model expects {}x{}x{} input",
            shape.height, shape.width, shape.channels
        );
        Ok(Self { plan, shape })
    }
}

impl ClassifierModel for TractModel {
    fn input_shape(&self) -> TensorShape {
        self.shape
    }

    fn run(&self, input: Vec<f32>) -> Result<Vec<f32>, ModelError> {
        let TensorShape {
            height,
            width,
            channels,
        } = self.shape;
        let tensor = tract_ndarray::Array4::from_shape_vec((1, height, width, channels), input)
            .map_err(|e| ModelError::InferenceFailed(e.to_string()))?
            .into_tensor();
        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| ModelError::InferenceFailed(e.to_string()))?;
        let scores = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ModelError::InferenceFailed(e.to_string()))?
            .iter()
            .copied()
            .collect();
        Ok(scores)
    }
}

/// Cache the NHWC input shape the model declares.
///
/// Only `(1, h, w, 3)` f32 inputs are accepted; anything else cannot be fed
/// by the RGB tensor encoder and is rejected at load time.
fn declared_input_shape(model: &TypedModel) -> Result<TensorShape, ModelError> {
    let fact = model
        .input_fact(0)
        .map_err(|e| ModelError::ModelLoadFailure(e.to_string()))?;
    if fact.datum_type != f32::datum_type() {
        return Err(ModelError::ModelLoadFailure(format!(
            "model input is {:?}, expected f32",
            fact.datum_type
        )));
    }
    let dims = fact.shape.as_concrete().ok_or_else(|| {
        ModelError::ModelLoadFailure("model input shape is not fully determined".to_string())
    })?;
    match dims {
        [1, height, width, 3] => Ok(TensorShape::new(*height, *width, 3)),
        other => Err(ModelError::ModelLoadFailure(format!(
            "expected NHWC input (1, h, w, 3), model declares {:?}",
            other
        ))),
    }
}

/// Fixed-output engine for tests and development without a model file.
///
/// Returns the same score vector for every input after validating the input
/// length against the declared shape.
pub struct FixedOutputModel {
    shape: TensorShape,
    scores: Vec<f32>,
}

impl FixedOutputModel {
    /// Create an engine that always produces `scores`
    pub fn new(shape: TensorShape, scores: Vec<f32>) -> Self {
        Self { shape, scores }
    }
}

impl ClassifierModel for FixedOutputModel {
    fn input_shape(&self) -> TensorShape {
        self.shape
    }

    fn run(&self, input: Vec<f32>) -> Result<Vec<f32>, ModelError> {
        if input.len() != self.shape.element_count() {
            return Err(ModelError::InferenceFailed(format!(
                "input has {} elements, shape wants {}",
                input.len(),
                self.shape.element_count()
            )));
        }
        Ok(self.scores.clone())
    }
}
