//! Input tensor shape

use serde::{Deserialize, Serialize};

/// Input tensor shape declared by a classification model (NHWC, batch 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorShape {
    /// Input height in pixels
    pub height: usize,
    /// Input width in pixels
    pub width: usize,
    /// Color channels (3 for RGB)
    pub channels: usize,
}

impl TensorShape {
    /// Create a shape
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Number of elements in one input tensor
    pub fn element_count(&self) -> usize {
        self.height * self.width * self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count() {
        assert_eq!(TensorShape::new(224, 224, 3).element_count(), 150_528);
        assert_eq!(TensorShape::new(2, 4, 3).element_count(), 24);
    }
}
