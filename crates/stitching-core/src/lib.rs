//! Core primitives for reducing a panorama candidate set to one consistent group.
//!
//! Feature detection and pairwise matching happen upstream; this crate only
//! consumes their outputs (image names, opaque per-image features and a flat
//! row-major list of `N * N` pairwise match records) and reshapes them.
//!
//! The pieces, in pipeline order:
//!
//! - [`largest_component`]: builds the undirected match graph under a confidence
//!   threshold and returns the indices of its largest connected component.
//! - [`complement`]: turns the kept indices into the ascending delete set.
//! - [`select_by_index`] and [`MatchesMatrix::reduce`]: project the parallel
//!   collections and the match matrix onto the surviving images.
//! - [`matches_graph_dot`]: renders the unreduced graph as Graphviz text for
//!   offline inspection.
//!
//! # Example
//!
//! ```
//! use stitching_core::{MatchesMatrix, complement, largest_component, select_by_index};
//!
//! // Images 0 and 1 match, image 2 matches nothing.
//! let confidences = vec![
//!     0.0, 2.0, 0.0, //
//!     2.0, 0.0, 0.0, //
//!     0.0, 0.0, 0.0,
//! ];
//! let matrix = MatchesMatrix::from_pairwise(3, confidences).unwrap();
//! let keep = largest_component(&matrix, 1.0);
//! assert_eq!(keep, vec![0, 1]);
//!
//! let delete = complement(3, &keep).unwrap();
//! assert_eq!(delete, vec![2]);
//!
//! let names = select_by_index(&["a.jpg", "b.jpg", "c.jpg"], &keep).unwrap();
//! assert_eq!(names, vec!["a.jpg", "b.jpg"]);
//!
//! let reduced = matrix.reduce(&delete).unwrap();
//! assert_eq!(reduced.into_pairwise(), vec![0.0, 2.0, 2.0, 0.0]);
//! ```

/// Graphviz rendering of the match graph.
mod dot;
/// Error type shared by all subsetting operations.
mod error;
/// Match graph construction and connected components.
mod graph;
/// Index bookkeeping: complements, removal offsets and selections.
mod indices;
/// Scalar and matrix type aliases.
mod math;
/// Match records and the pairwise match matrix.
mod matches;
/// Deterministic match-matrix builders for tests and tools.
pub mod synthetic;

pub use dot::*;
pub use error::*;
pub use graph::*;
pub use indices::*;
pub use math::*;
pub use matches::*;
