//! Match graph export sinks.
//!
//! Rendering lives in `stitching_core`; this module only performs the I/O.

use nalgebra::Scalar;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use stitching_core::{GraphEdges, MatchRecord, MatchesMatrix, Real, SubsetError, matches_graph_dot};
use thiserror::Error;

/// Failure of the optional match graph export.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// The configured file could not be written.
    #[error("failed to write matches graph to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    /// A caller-provided stream rejected the document.
    #[error("failed to write matches graph: {0}")]
    Stream(#[source] io::Error),
    /// The inputs could not be rendered.
    #[error(transparent)]
    Render(#[from] SubsetError),
}

/// Write an already rendered graph document to `path`, replacing the file.
pub fn save_matches_graph(path: &Path, dot: &str) -> Result<(), DiagnosticsError> {
    fs::write(path, dot).map_err(|source| DiagnosticsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the full match graph and write it to `writer`.
pub fn write_matches_graph<W, S, M>(
    writer: &mut W,
    img_names: &[S],
    pairwise_matches: &[M],
    threshold: Real,
    edges: GraphEdges,
) -> Result<(), DiagnosticsError>
where
    W: Write,
    S: AsRef<str>,
    M: Scalar + MatchRecord,
{
    let matrix = MatchesMatrix::from_pairwise(img_names.len(), pairwise_matches.to_vec())?;
    let dot = matches_graph_dot(img_names, &matrix, threshold, edges)?;
    writer
        .write_all(dot.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(DiagnosticsError::Stream)
}
