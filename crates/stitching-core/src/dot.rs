//! Graphviz (`dot`) description of the match graph.
//!
//! The document covers the full, unreduced image set: every image is declared
//! as a node and edges carry the match record label.
//!
//! ```text
//! graph matches_graph{
//! "a.jpg";
//! "b.jpg";
//! "a.jpg" -- "b.jpg"[label="Nm=120, Ni=80, C=2.5"];
//! }
//! ```

use crate::{MatchRecord, MatchesMatrix, Real, SubsetError, spanning_forest_edges};
use nalgebra::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Which threshold-passing pairs become edges in the export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphEdges {
    /// One edge per unordered image pair reaching the threshold.
    #[default]
    All,
    /// Only the edges of a spanning forest (sparser, one tree per component).
    SpanningForest,
}

/// Render the match graph of `img_names` as a Graphviz `graph` document.
///
/// Node names are the file-name part of each identifier. For an unordered
/// pair the `(i, j)` record labels the edge when it reaches the threshold,
/// otherwise the `(j, i)` record does.
pub fn matches_graph_dot<S, M>(
    img_names: &[S],
    matches: &MatchesMatrix<M>,
    threshold: Real,
    edges: GraphEdges,
) -> Result<String, SubsetError>
where
    S: AsRef<str>,
    M: Scalar + MatchRecord,
{
    let n = matches.num_images();
    if img_names.len() != n {
        return Err(SubsetError::LengthMismatch {
            what: "image names",
            expected: n,
            got: img_names.len(),
        });
    }
    let nodes: Vec<String> = img_names
        .iter()
        .map(|name| quote(file_name(name.as_ref())))
        .collect();

    let pairs: Vec<(usize, usize)> = match edges {
        GraphEdges::All => {
            let mut pairs = Vec::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    if matches.confidence(i, j) >= threshold {
                        pairs.push((i, j));
                    } else if matches.confidence(j, i) >= threshold {
                        pairs.push((j, i));
                    }
                }
            }
            pairs
        }
        GraphEdges::SpanningForest => spanning_forest_edges(matches, threshold),
    };

    let mut out = String::from("graph matches_graph{\n");
    for node in &nodes {
        // infallible for String
        let _ = writeln!(out, "{node};");
    }
    for (src, dst) in pairs {
        let label = matches
            .get(src, dst)
            .map(|record| record.graph_label())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} -- {}[label={}];",
            nodes[src],
            nodes[dst],
            quote(&label)
        );
    }
    out.push_str("}\n");
    Ok(out)
}

/// Strip any directory prefix, accepting both separator styles.
fn file_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
