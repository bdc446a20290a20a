//! Classification orchestrator

use crate::{decode, Classification, ClassifierConfig, ClassifyError};
use image_input::{Bitmap, ImageSource};
use label_store::LabelTable;
use model_runtime::{ClassifierModel, TractModel};
use tensor_encoder::encode;
use tracing::{debug, info};

/// One-image classification pipeline.
///
/// Owns the label table, the lazily loaded model handle, and the bitmap
/// pending classification. The model is loaded on the first `classify` call
/// and cached until `reset_model`; the handle is immutable once built, so a
/// caller that wants to share it across threads only needs read access.
pub struct Classifier {
    config: ClassifierConfig,
    labels: LabelTable,
    model: Option<Box<dyn ClassifierModel>>,
    input: Option<Bitmap>,
}

impl Classifier {
    /// Create a pipeline from configuration.
    ///
    /// The label table is loaded eagerly; the model stays unloaded until the
    /// first classification.
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifyError> {
        let labels = LabelTable::load(&config.labels_path)?;
        Ok(Self::with_labels(config, labels))
    }

    /// Create a pipeline around an already-resident label table
    pub fn with_labels(config: ClassifierConfig, labels: LabelTable) -> Self {
        Self {
            config,
            labels,
            model: None,
            input: None,
        }
    }

    /// Create a pipeline around a pre-built model handle
    pub fn with_model(model: Box<dyn ClassifierModel>, labels: LabelTable) -> Self {
        Self {
            config: ClassifierConfig::default(),
            labels,
            model: Some(model),
            input: None,
        }
    }

    /// Supply the bitmap to classify (camera or gallery hand-off)
    pub fn set_input(&mut self, bitmap: Bitmap) {
        debug!(
            "Input bitmap supplied: {}x{}",
            bitmap.width(),
            bitmap.height()
        );
        self.input = Some(bitmap);
    }

    /// Pull the next bitmap from an acquisition collaborator
    pub fn supply_from(&mut self, source: &dyn ImageSource) -> Result<(), ClassifyError> {
        let bitmap = source.supply()?;
        self.set_input(bitmap);
        Ok(())
    }

    /// Clear the pending input, returning it if present
    pub fn take_input(&mut self) -> Option<Bitmap> {
        self.input.take()
    }

    /// Drop the cached model handle; the next classify call reloads it
    pub fn reset_model(&mut self) {
        self.model = None;
    }

    /// Label table backing this pipeline
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Classify the supplied bitmap.
    ///
    /// Loads the model on first use, queries its declared input shape,
    /// encodes the bitmap, runs inference, and arg-max decodes the scores.
    /// The first failing stage surfaces its own error kind; nothing is
    /// retried or downgraded.
    pub fn classify(&mut self) -> Result<Classification, ClassifyError> {
        if self.input.is_none() {
            return Err(ClassifyError::NoInputAvailable);
        }
        self.ensure_model()?;

        let (Some(bitmap), Some(model)) = (self.input.as_ref(), self.model.as_deref()) else {
            return Err(ClassifyError::NoInputAvailable);
        };

        let shape = model.input_shape();
        debug!(
            "Encoding input tensor for {}x{} model input",
            shape.width, shape.height
        );
        let tensor = encode(bitmap, &shape)?;
        let scores = model.run(tensor)?;
        let result = decode(&scores, &self.labels)?;
        info!(
            "Classified as '{}' (index {}, score {:.3})",
            result.label, result.index, result.score
        );
        Ok(result)
    }

    fn ensure_model(&mut self) -> Result<(), ClassifyError> {
        if self.model.is_none() {
            info!(
                "Loading classification model from {}",
                self.config.model_path.display()
            );
            let model = TractModel::load(&self.config.model_path)?;
            self.model = Some(Box::new(model));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_runtime::{FixedOutputModel, ModelError, TensorShape};

    fn labels(lines: &[&str]) -> LabelTable {
        LabelTable::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    fn gray_bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::from_rgb(
            vec![127u8; width as usize * height as usize * 3],
            width,
            height,
        )
        .unwrap()
    }

    struct FailingModel;

    impl ClassifierModel for FailingModel {
        fn input_shape(&self) -> TensorShape {
            TensorShape::new(2, 2, 3)
        }

        fn run(&self, _input: Vec<f32>) -> Result<Vec<f32>, ModelError> {
            Err(ModelError::InferenceFailed("engine exploded".to_string()))
        }
    }

    #[test]
    fn test_classify_without_input_fails_fast() {
        // Bogus model path: classify must fail before ever touching it.
        let config = ClassifierConfig::bundled("/nonexistent");
        let mut classifier = Classifier::with_labels(config, labels(&["a", "b"]));

        let err = classifier.classify().unwrap_err();
        assert!(matches!(err, ClassifyError::NoInputAvailable));
    }

    #[test]
    fn test_missing_model_surfaces_after_input() {
        let config = ClassifierConfig::bundled("/nonexistent");
        let mut classifier = Classifier::with_labels(config, labels(&["a", "b"]));
        classifier.set_input(gray_bitmap(4, 4));

        let err = classifier.classify().unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Model(ModelError::ResourceUnavailable(_))
        ));
    }

    #[test]
    fn test_end_to_end_with_fixed_engine() {
        let model = FixedOutputModel::new(TensorShape::new(8, 8, 3), vec![0.1, 0.7, 0.2]);
        let mut classifier =
            Classifier::with_model(Box::new(model), labels(&["0 cat", "1 dog", "2 bird"]));
        classifier.set_input(gray_bitmap(32, 24));

        let result = classifier.classify().unwrap();
        assert_eq!(result.label, "1 dog");
        assert_eq!(result.display_name(), "dog");
        assert_eq!(result.index, 1);
        assert!((result.score - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_input_survives_classification() {
        let model = FixedOutputModel::new(TensorShape::new(4, 4, 3), vec![0.9, 0.1]);
        let mut classifier = Classifier::with_model(Box::new(model), labels(&["up", "down"]));
        classifier.set_input(gray_bitmap(6, 6));

        classifier.classify().unwrap();
        // The same bitmap can be classified again without re-supplying it.
        let again = classifier.classify().unwrap();
        assert_eq!(again.label, "up");
    }

    #[test]
    fn test_score_count_mismatch_is_config_error() {
        let model = FixedOutputModel::new(TensorShape::new(4, 4, 3), vec![0.5, 0.3, 0.2]);
        let mut classifier =
            Classifier::with_model(Box::new(model), labels(&["a", "b", "c", "d"]));
        classifier.set_input(gray_bitmap(4, 4));

        let err = classifier.classify().unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::ConfigMismatch {
                labels: 4,
                scores: 3
            }
        ));
    }

    #[test]
    fn test_engine_failure_keeps_its_kind() {
        let mut classifier = Classifier::with_model(Box::new(FailingModel), labels(&["a"]));
        classifier.set_input(gray_bitmap(2, 2));

        let err = classifier.classify().unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Model(ModelError::InferenceFailed(_))
        ));
    }

    struct StaticSource(Bitmap);

    impl ImageSource for StaticSource {
        fn supply(&self) -> Result<Bitmap, image_input::ImageInputError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_supply_from_source_feeds_the_pipeline() {
        let model = FixedOutputModel::new(TensorShape::new(4, 4, 3), vec![0.2, 0.8]);
        let mut classifier = Classifier::with_model(Box::new(model), labels(&["no", "yes"]));

        let source = StaticSource(gray_bitmap(10, 10));
        classifier.supply_from(&source).unwrap();

        let result = classifier.classify().unwrap();
        assert_eq!(result.label, "yes");
    }

    #[test]
    fn test_take_input_clears_pending_bitmap() {
        let model = FixedOutputModel::new(TensorShape::new(4, 4, 3), vec![1.0]);
        let mut classifier = Classifier::with_model(Box::new(model), labels(&["only"]));
        classifier.set_input(gray_bitmap(4, 4));

        assert!(classifier.take_input().is_some());
        let err = classifier.classify().unwrap_err();
        assert!(matches!(err, ClassifyError::NoInputAvailable));
    }
}
