//! Classifier configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Serialized model file
    pub model_path: PathBuf,

    /// Label table file, one label per line
    pub labels_path: PathBuf,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/model.onnx"),
            labels_path: PathBuf::from("assets/labels.txt"),
        }
    }
}

impl ClassifierConfig {
    /// Config rooted at a bundle directory holding the default asset names
    pub fn bundled(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            model_path: dir.join("model.onnx"),
            labels_path: dir.join("labels.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_joins_asset_names() {
        let config = ClassifierConfig::bundled("/opt/bundle");
        assert_eq!(config.model_path, PathBuf::from("/opt/bundle/model.onnx"));
        assert_eq!(config.labels_path, PathBuf::from("/opt/bundle/labels.txt"));
    }
}
