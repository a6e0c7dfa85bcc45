//! Subsetting stage of a panorama stitching pipeline.
//!
//! Sits between pairwise match estimation and camera estimation: given the
//! candidate image names, their features and the pairwise matches, it keeps
//! the largest group of images that match each other and re-indexes every
//! parallel collection to that group.
//!
//! ```no_run
//! use stitching_core::synthetic::{grouped_matches, image_names};
//! use stitching_pipeline::{Subsetter, SubsetterConfig};
//! # fn main() -> anyhow::Result<()> {
//!
//! let names = image_names(4);
//! let features = vec![(); 4];
//! let matches = grouped_matches(&[0, 0, 0, 1], 2.0, 0.0);
//!
//! let subsetter = Subsetter::new(SubsetterConfig::default())?;
//! let output = subsetter.subset(&names, &features, &matches)?;
//! assert_eq!(output.kept_indices, vec![0, 1, 2]);
//! assert_eq!(output.pairwise_matches.len(), 9);
//! # Ok(())
//! # }
//! ```

pub mod report;
pub mod subsetter;

pub use crate::report::{SubsetInput, SubsetReport, run_subset};
pub use crate::subsetter::{
    DiagnosticsError, DiagnosticsOutcome, SubsetOutput, Subsetter, SubsetterConfig,
    save_matches_graph, write_matches_graph,
};
