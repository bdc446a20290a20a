//! Output-score decoding

use crate::ClassifyError;
use label_store::LabelTable;
use serde::{Deserialize, Serialize};

/// Result of one classification pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Raw label line for the winning class
    pub label: String,
    /// Winning class index
    pub index: usize,
    /// Winning class score
    pub score: f32,
}

impl Classification {
    /// Human-readable name for display.
    ///
    /// Label files conventionally store lines as `"<index> <name>"`; this
    /// returns the name part, or the raw line when no index prefix is
    /// present.
    pub fn display_name(&self) -> &str {
        match self.label.split_once(' ') {
            Some((prefix, name))
                if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) =>
            {
                name
            }
            _ => self.label.as_str(),
        }
    }
}

/// Select the winning label by arg-max over the output scores.
///
/// The score count must equal the label count; an empty score vector is
/// rejected the same way since there is no class to select. Ties keep the
/// earliest maximum: the scan uses strict `>`, so a later equal score never
/// displaces an earlier winner.
pub fn decode(scores: &[f32], labels: &LabelTable) -> Result<Classification, ClassifyError> {
    if scores.is_empty() || scores.len() != labels.len() {
        return Err(ClassifyError::ConfigMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }

    let mut index = 0;
    let mut best = scores[0];
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best {
            best = score;
            index = i;
        }
    }

    let label = labels
        .get(index)
        .expect("winning index is bounded by the length check")
        .to_string();

    Ok(Classification {
        label,
        index,
        score: best,
    })
}
