//! Input Tensor Encoder
//!
//! Converts a decoded bitmap into the flat normalized f32 buffer a
//! classification model expects.

mod encode;

pub use encode::encode;

use thiserror::Error;

/// Tensor encoding error types
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Precondition violation: degenerate bitmap or target shape
    #[error("Invalid encoder input: {0}")]
    InvalidInput(String),
}
