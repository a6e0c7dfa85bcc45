use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stitching_core::{GraphEdges, Real, SubsetError};

/// Configuration of the subsetting stage.
///
/// Passed by value to [`Subsetter::new`](super::Subsetter::new) and immutable
/// afterwards. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubsetterConfig {
    /// Minimum match confidence for two images to be linked.
    pub confidence_threshold: Real,
    /// Where to write the Graphviz match graph. `None` disables the export.
    pub matches_graph_dot_file: Option<PathBuf>,
    /// Which edges the exported graph contains.
    pub graph_edges: GraphEdges,
}

impl SubsetterConfig {
    pub const DEFAULT_CONFIDENCE_THRESHOLD: Real = 1.0;

    pub fn with_threshold(confidence_threshold: Real) -> Self {
        Self {
            confidence_threshold,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SubsetError> {
        if !self.confidence_threshold.is_finite() {
            return Err(SubsetError::InvalidThreshold(self.confidence_threshold));
        }
        Ok(())
    }
}

impl Default for SubsetterConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: Self::DEFAULT_CONFIDENCE_THRESHOLD,
            matches_graph_dot_file: None,
            graph_edges: GraphEdges::All,
        }
    }
}
