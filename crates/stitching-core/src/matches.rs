//! Pairwise match records and their `N x N` matrix form.
//!
//! Upstream matchers hand over one record per ordered image pair as a flat,
//! row-major list: entry `i * N + j` describes the relation from image `i` to
//! image `j`. [`MatchesMatrix`] converts that list into a dense matrix, removes
//! images from it and flattens it back without reordering the survivors.

use crate::{Mat3, Real, SubsetError, removal_positions};
use log::debug;
use nalgebra::{DMatrix, Scalar};
use serde::{Deserialize, Serialize};

/// What the subsetting stage needs to know about a pairwise match record.
///
/// Everything except the confidence is opaque to the core.
pub trait MatchRecord {
    /// Match confidence; edges of the match graph are thresholded on this.
    fn confidence(&self) -> Real;

    /// Edge label used by the Graphviz export.
    fn graph_label(&self) -> String {
        format!("C={}", self.confidence())
    }

    /// Informs the record of its new `(src, dst)` position after subsetting.
    ///
    /// Default: records that do not store image indices ignore this.
    fn reindex(&mut self, _src: usize, _dst: usize) {}
}

impl MatchRecord for Real {
    fn confidence(&self) -> Real {
        *self
    }
}

/// Summary of the feature matches between two images.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PairwiseMatch {
    /// Index of the source image, if the matcher recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_img_idx: Option<usize>,
    /// Index of the destination image, if the matcher recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_img_idx: Option<usize>,
    /// Number of putative feature matches.
    #[serde(default)]
    pub num_matches: usize,
    /// Number of geometrically verified matches.
    #[serde(default)]
    pub num_inliers: usize,
    /// Match confidence estimated by the matcher.
    pub confidence: Real,
    /// Estimated homography from source to destination.
    #[serde(default, rename = "H", skip_serializing_if = "Option::is_none")]
    pub homography: Option<Mat3>,
}

impl PairwiseMatch {
    pub fn with_confidence(confidence: Real) -> Self {
        Self {
            confidence,
            ..Default::default()
        }
    }
}

impl MatchRecord for PairwiseMatch {
    fn confidence(&self) -> Real {
        self.confidence
    }

    fn graph_label(&self) -> String {
        format!(
            "Nm={}, Ni={}, C={}",
            self.num_matches, self.num_inliers, self.confidence
        )
    }

    fn reindex(&mut self, src: usize, dst: usize) {
        self.src_img_idx = Some(src);
        self.dst_img_idx = Some(dst);
    }
}

/// Dense `N x N` matrix of pairwise match records.
///
/// Row `i`, column `j` holds the record from image `i` to image `j`. Diagonal
/// entries are self-pairs and carry no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchesMatrix<M: Scalar> {
    inner: DMatrix<M>,
}

impl<M: Scalar> MatchesMatrix<M> {
    /// Build the matrix from a flat row-major list of `num_images^2` records.
    ///
    /// A list of any other length is rejected; nothing is truncated or padded.
    pub fn from_pairwise(num_images: usize, pairwise: Vec<M>) -> Result<Self, SubsetError> {
        let expected = num_images.checked_mul(num_images);
        if expected != Some(pairwise.len()) {
            return Err(SubsetError::MatchCountMismatch {
                images: num_images,
                expected: expected.unwrap_or(usize::MAX),
                got: pairwise.len(),
            });
        }
        Ok(Self {
            inner: DMatrix::from_row_iterator(num_images, num_images, pairwise),
        })
    }

    /// Number of images, i.e. rows (and columns) of the matrix.
    pub fn num_images(&self) -> usize {
        self.inner.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.num_images() == 0
    }

    /// Record from image `src` to image `dst`, if both are in range.
    pub fn get(&self, src: usize, dst: usize) -> Option<&M> {
        self.inner.get((src, dst))
    }

    pub fn as_matrix(&self) -> &DMatrix<M> {
        &self.inner
    }

    /// Remove row and column `pos` of the current matrix.
    pub fn remove_image(self, pos: usize) -> Result<Self, SubsetError> {
        let len = self.num_images();
        if pos >= len {
            return Err(SubsetError::IndexOutOfRange { index: pos, len });
        }
        Ok(Self {
            inner: self.inner.remove_row(pos).remove_column(pos),
        })
    }

    /// Remove every image listed in `delete_indices` (original numbering).
    ///
    /// Indices must be strictly ascending. Images are removed one at a time;
    /// the k-th removal targets `delete_indices[k] - k`, because the k earlier
    /// removals shifted everything above them down by one.
    pub fn reduce(self, delete_indices: &[usize]) -> Result<Self, SubsetError> {
        let positions = removal_positions(delete_indices)?;
        let mut matrix = self;
        for (step, pos) in positions.into_iter().enumerate() {
            debug!(
                "removing image {} (position {pos} of {})",
                delete_indices[step],
                matrix.num_images()
            );
            matrix = matrix.remove_image(pos)?;
        }
        Ok(matrix)
    }

    /// Flatten back into the row-major pairwise list.
    pub fn into_pairwise(self) -> Vec<M> {
        let n = self.num_images();
        let mut pairwise = Vec::with_capacity(n * n);
        for row in self.inner.row_iter() {
            pairwise.extend(row.iter().cloned());
        }
        pairwise
    }
}

impl<M: Scalar + MatchRecord> MatchesMatrix<M> {
    /// Confidence of the record from `src` to `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn confidence(&self, src: usize, dst: usize) -> Real {
        self.inner[(src, dst)].confidence()
    }

    /// Tell every record its current `(row, column)` position.
    pub fn reindexed(mut self) -> Self {
        let n = self.num_images();
        for src in 0..n {
            for dst in 0..n {
                self.inner[(src, dst)].reindex(src, dst);
            }
        }
        self
    }
}
