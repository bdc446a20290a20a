//! Class Label Store
//!
//! Loads the ordered label table for a classification model: one label per
//! line, line i is the label for output index i.

mod table;

pub use table::LabelTable;

use thiserror::Error;

/// Label store error types
#[derive(Error, Debug)]
pub enum LabelError {
    /// Label resource missing or unopenable
    #[error("Label resource unavailable: {0}")]
    ResourceUnavailable(#[source] std::io::Error),

    /// Label resource bytes are not readable as text
    #[error("Label resource is not valid UTF-8 text")]
    MalformedResource,
}
