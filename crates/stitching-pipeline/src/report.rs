//! JSON-friendly input and report types for file based runs.

use crate::{DiagnosticsOutcome, Subsetter, SubsetterConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stitching_core::PairwiseMatch;

/// Everything the subsetting stage consumes, as produced by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsetInput {
    pub img_names: Vec<String>,
    /// Opaque per-image features, parallel to `img_names`.
    pub features: Vec<serde_json::Value>,
    /// Row-major `N * N` pairwise matches.
    pub pairwise_matches: Vec<PairwiseMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsetReport {
    pub img_names: Vec<String>,
    pub features: Vec<serde_json::Value>,
    pub pairwise_matches: Vec<PairwiseMatch>,
    pub kept_indices: Vec<usize>,
    pub removed_indices: Vec<usize>,
    /// Path of the exported match graph, if one was written.
    pub matches_graph: Option<PathBuf>,
    /// Why the match graph export failed, if it did.
    pub diagnostics_error: Option<String>,
}

/// Run the subsetting stage on deserialized input.
pub fn run_subset(input: &SubsetInput, config: &SubsetterConfig) -> Result<SubsetReport> {
    let subsetter = Subsetter::new(config.clone()).context("invalid subsetter config")?;
    let output = subsetter
        .subset(&input.img_names, &input.features, &input.pairwise_matches)
        .context("subsetting failed")?;

    let (matches_graph, diagnostics_error) = match output.diagnostics {
        DiagnosticsOutcome::Disabled => (None, None),
        DiagnosticsOutcome::Written(path) => (Some(path), None),
        DiagnosticsOutcome::Failed(err) => (None, Some(err.to_string())),
    };

    Ok(SubsetReport {
        img_names: output.img_names,
        features: output.features,
        pairwise_matches: output.pairwise_matches,
        kept_indices: output.kept_indices,
        removed_indices: output.removed_indices,
        matches_graph,
        diagnostics_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stitching_core::synthetic::{grouped_matches, image_names};

    fn input(group_of: &[usize]) -> SubsetInput {
        let n = group_of.len();
        SubsetInput {
            img_names: image_names(n),
            features: (0..n).map(|i| json!({ "keypoints": i })).collect(),
            pairwise_matches: grouped_matches(group_of, 1.5, 0.1),
        }
    }

    #[test]
    fn report_carries_subset_and_indices() {
        let report = run_subset(&input(&[0, 1, 1]), &SubsetterConfig::default()).unwrap();
        assert_eq!(report.img_names, vec!["img01.jpg", "img02.jpg"]);
        assert_eq!(report.features, vec![json!({"keypoints": 1}), json!({"keypoints": 2})]);
        assert_eq!(report.kept_indices, vec![1, 2]);
        assert_eq!(report.removed_indices, vec![0]);
        assert_eq!(report.pairwise_matches.len(), 4);
        assert!(report.matches_graph.is_none());
        assert!(report.diagnostics_error.is_none());
    }

    #[test]
    fn input_parses_from_json() {
        let text = r#"{
            "img_names": ["a.jpg", "b.jpg"],
            "features": [null, null],
            "pairwise_matches": [
                {"confidence": 0.0},
                {"confidence": 2.0, "num_matches": 40, "num_inliers": 30},
                {"confidence": 2.0},
                {"confidence": 0.0}
            ]
        }"#;
        let input: SubsetInput = serde_json::from_str(text).unwrap();
        let report = run_subset(&input, &SubsetterConfig::default()).unwrap();
        assert_eq!(report.kept_indices, vec![0, 1]);
        assert_eq!(report.pairwise_matches[1].num_inliers, 30);
        assert_eq!(report.pairwise_matches[1].src_img_idx, Some(0));
        assert_eq!(report.pairwise_matches[1].dst_img_idx, Some(1));
    }

    #[test]
    fn shape_errors_carry_context() {
        let mut bad = input(&[0, 0]);
        bad.pairwise_matches.pop();
        let err = run_subset(&bad, &SubsetterConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("expected 4 pairwise matches"));
    }
}
