//! Result display boundary

use crate::Classification;
use tracing::info;

/// Receives the final classification for display.
///
/// UI collaborators implement this so the pipeline never depends on a
/// rendering framework type.
pub trait ResultSink {
    /// Present one classification result
    fn display(&mut self, result: &Classification);
}

/// Logs classification results through tracing
#[derive(Debug, Default)]
pub struct TracingResultSink;

impl ResultSink for TracingResultSink {
    fn display(&mut self, result: &Classification) {
        info!(
            "Result: '{}' (score {:.3})",
            result.display_name(),
            result.score
        );
    }
}
