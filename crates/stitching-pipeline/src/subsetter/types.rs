use super::DiagnosticsError;
use std::path::PathBuf;

/// What happened to the optional match graph export.
#[derive(Debug)]
pub enum DiagnosticsOutcome {
    /// No destination configured.
    Disabled,
    /// The graph was written to this path.
    Written(PathBuf),
    /// The export failed; the subset itself is unaffected.
    Failed(DiagnosticsError),
}

impl DiagnosticsOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DiagnosticsOutcome::Failed(_))
    }

    /// `Ok(Some(path))` when written, `Ok(None)` when disabled.
    pub fn into_result(self) -> Result<Option<PathBuf>, DiagnosticsError> {
        match self {
            DiagnosticsOutcome::Disabled => Ok(None),
            DiagnosticsOutcome::Written(path) => Ok(Some(path)),
            DiagnosticsOutcome::Failed(err) => Err(err),
        }
    }
}

/// Result of one subsetting call.
///
/// `img_names`, `features` and `pairwise_matches` share the reduced index
/// space: index `i` of the sequences and row/column `i` of the row-major
/// match list refer to the same surviving image.
#[derive(Debug)]
pub struct SubsetOutput<F, M> {
    pub img_names: Vec<String>,
    pub features: Vec<F>,
    /// Flat row-major `k * k` match list, `k = kept_indices.len()`.
    pub pairwise_matches: Vec<M>,
    /// Original indices of the surviving images, ascending.
    pub kept_indices: Vec<usize>,
    /// Original indices of the discarded images, ascending.
    pub removed_indices: Vec<usize>,
    pub diagnostics: DiagnosticsOutcome,
}

impl<F, M> SubsetOutput<F, M> {
    pub fn num_images(&self) -> usize {
        self.img_names.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.removed_indices.is_empty()
    }
}
