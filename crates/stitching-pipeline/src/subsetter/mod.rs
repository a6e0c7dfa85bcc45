//! The subsetting stage.
//!
//! [`Subsetter::subset`] runs the whole stage: pick the largest connected
//! group in the match graph, drop every other image from the names, the
//! features and the match matrix, and optionally export the full graph.
//! The individual steps are exposed as methods for custom pipelines.

mod config;
mod diagnostics;
mod types;

pub use config::SubsetterConfig;
pub use diagnostics::{DiagnosticsError, save_matches_graph, write_matches_graph};
pub use types::{DiagnosticsOutcome, SubsetOutput};

use log::{debug, info, warn};
use nalgebra::Scalar;
use stitching_core::{
    MatchRecord, MatchesMatrix, SubsetError, complement, largest_component, matches_graph_dot,
    select_by_index,
};

/// Reduces a candidate image set to its largest mutually matching group.
///
/// Holds no state besides its configuration; one instance can serve any
/// number of independent calls.
#[derive(Debug, Clone, Default)]
pub struct Subsetter {
    config: SubsetterConfig,
}

impl Subsetter {
    /// Validate `config` and build the stage.
    pub fn new(config: SubsetterConfig) -> Result<Self, SubsetError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SubsetterConfig {
        &self.config
    }

    /// Indices of the images in the largest connected component, ascending.
    pub fn indices_to_keep<F, M>(
        &self,
        features: &[F],
        pairwise_matches: &[M],
    ) -> Result<Vec<usize>, SubsetError>
    where
        M: Scalar + MatchRecord,
    {
        let matrix = MatchesMatrix::from_pairwise(features.len(), pairwise_matches.to_vec())?;
        Ok(largest_component(&matrix, self.config.confidence_threshold))
    }

    /// Indices in `[0, num_images)` not in `keep`, ascending.
    pub fn indices_to_delete(
        &self,
        num_images: usize,
        keep: &[usize],
    ) -> Result<Vec<usize>, SubsetError> {
        complement(num_images, keep)
    }

    /// Graphviz description of the full, unreduced match graph.
    pub fn matches_graph_dot<M>(
        &self,
        img_names: &[String],
        pairwise_matches: &[M],
    ) -> Result<String, SubsetError>
    where
        M: Scalar + MatchRecord,
    {
        let matrix = MatchesMatrix::from_pairwise(img_names.len(), pairwise_matches.to_vec())?;
        matches_graph_dot(
            img_names,
            &matrix,
            self.config.confidence_threshold,
            self.config.graph_edges,
        )
    }

    /// Run the stage.
    ///
    /// `features` must be parallel to `img_names` and `pairwise_matches` must
    /// hold `N * N` records in row-major order. Shape errors abort before any
    /// work is done. A failed graph export is reported in
    /// [`SubsetOutput::diagnostics`] and never discards the subset.
    pub fn subset<F, M>(
        &self,
        img_names: &[String],
        features: &[F],
        pairwise_matches: &[M],
    ) -> Result<SubsetOutput<F, M>, SubsetError>
    where
        F: Clone,
        M: Scalar + MatchRecord,
    {
        let n = features.len();
        if img_names.len() != n {
            return Err(SubsetError::LengthMismatch {
                what: "image names",
                expected: n,
                got: img_names.len(),
            });
        }
        let threshold = self.config.confidence_threshold;
        let matrix = MatchesMatrix::from_pairwise(n, pairwise_matches.to_vec())?;

        let kept_indices = largest_component(&matrix, threshold);
        let removed_indices = complement(n, &kept_indices)?;
        debug!(
            "subset: keeping {} of {} images (threshold {threshold})",
            kept_indices.len(),
            n
        );

        let img_names_subset = select_by_index(img_names, &kept_indices)?;
        let features_subset = select_by_index(features, &kept_indices)?;

        // Rendered before the matrix is consumed; the graph covers all images.
        let graph = match &self.config.matches_graph_dot_file {
            Some(path) => Some((
                path,
                matches_graph_dot(img_names, &matrix, threshold, self.config.graph_edges)?,
            )),
            None => None,
        };

        let pairwise_subset = matrix.reduce(&removed_indices)?.reindexed().into_pairwise();

        if !removed_indices.is_empty() {
            let removed_names: Vec<&str> = removed_indices
                .iter()
                .map(|&i| img_names[i].as_str())
                .collect();
            info!(
                "removed {} image(s) that could not be matched to the main group: {}",
                removed_names.len(),
                removed_names.join(", ")
            );
        }

        let diagnostics = match graph {
            None => DiagnosticsOutcome::Disabled,
            Some((path, dot)) => match save_matches_graph(path, &dot) {
                Ok(()) => {
                    debug!("matches graph written to {}", path.display());
                    DiagnosticsOutcome::Written(path.clone())
                }
                Err(err) => {
                    warn!("{err}");
                    DiagnosticsOutcome::Failed(err)
                }
            },
        };

        Ok(SubsetOutput {
            img_names: img_names_subset,
            features: features_subset,
            pairwise_matches: pairwise_subset,
            kept_indices,
            removed_indices,
            diagnostics,
        })
    }
}
