//! Match graph connectivity.
//!
//! Images are nodes; images `i != j` share an undirected edge when the record
//! in either direction reaches the confidence threshold. Components are found
//! with a disjoint-set forest.

use crate::{MatchRecord, MatchesMatrix, Real};
use log::debug;
use nalgebra::Scalar;

/// Disjoint-set forest with union by size and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    /// `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. Returns `false` if they were
    /// already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }

    /// Size of the set containing `x`.
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

/// Whether images `i` and `j` are linked under `threshold`.
///
/// Self-pairs never link.
pub fn is_linked<M: Scalar + MatchRecord>(
    matches: &MatchesMatrix<M>,
    i: usize,
    j: usize,
    threshold: Real,
) -> bool {
    i != j && (matches.confidence(i, j) >= threshold || matches.confidence(j, i) >= threshold)
}

/// Connected components of the match graph.
///
/// Each component lists its members ascending. Components are ordered by size,
/// largest first; equal sizes keep the order of their lowest member.
pub fn connected_components<M: Scalar + MatchRecord>(
    matches: &MatchesMatrix<M>,
    threshold: Real,
) -> Vec<Vec<usize>> {
    let n = matches.num_images();
    let mut sets = DisjointSets::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if is_linked(matches, i, j, threshold) {
                sets.union(i, j);
            }
        }
    }

    let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    for i in 0..n {
        let root = sets.find(i);
        let slot = match slot_of_root[root] {
            Some(slot) => slot,
            None => {
                components.push(Vec::new());
                slot_of_root[root] = Some(components.len() - 1);
                components.len() - 1
            }
        };
        components[slot].push(i);
    }

    // stable: ties stay ordered by lowest member
    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components
}

/// Indices of the images in the largest connected component, ascending.
///
/// Ties go to the component holding the lowest image index, so a graph with
/// no edges at all keeps image `0`. An empty matrix yields an empty set.
pub fn largest_component<M: Scalar + MatchRecord>(
    matches: &MatchesMatrix<M>,
    threshold: Real,
) -> Vec<usize> {
    let components = connected_components(matches, threshold);
    debug!(
        "match graph: {} images, {} components, sizes {:?}",
        matches.num_images(),
        components.len(),
        components.iter().map(Vec::len).collect::<Vec<_>>()
    );
    components.into_iter().next().unwrap_or_default()
}

/// Edges of a spanning forest, found by scanning records in row-major order.
///
/// A record `(i, j)` reaching the threshold contributes an edge only when it
/// joins two components not joined yet. Edges are returned sorted.
pub fn spanning_forest_edges<M: Scalar + MatchRecord>(
    matches: &MatchesMatrix<M>,
    threshold: Real,
) -> Vec<(usize, usize)> {
    let n = matches.num_images();
    let mut sets = DisjointSets::new(n);
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j || matches.confidence(i, j) < threshold {
                continue;
            }
            if sets.union(i, j) {
                edges.push((i, j));
            }
        }
    }
    edges.sort_unstable();
    edges
}
