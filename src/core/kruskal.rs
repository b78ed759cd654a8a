//! Minimum spanning trees and forests over dense-index edge lists
//!
//! Kruskal with a stable weight sort (ties keep input order) and a disjoint-set
//! cycle check. The participating vertex set may be any subset of the graph; it
//! is remapped to a local dense range before the union-find runs. A disconnected
//! selection correctly yields a forest, with the total weight summed across
//! components.

use std::collections::HashMap;

use crate::core::dsu::DisjointSet;
use crate::core::error::{Error, Result};

/// Minimum-weight cycle-free edge subset of a vertex selection
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    /// Accepted edges as `(a, b, weight)` dense-index triples, in acceptance order
    pub edges: Vec<(usize, usize, u32)>,
    /// Sum of accepted edge weights across all components
    pub total_weight: u64,
}

impl SpanningForest {
    /// A selection of `n` connected vertices spans with exactly `n - 1` edges;
    /// fewer means the result is a forest over several components
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }
}

/// Run Kruskal over `edges` restricted to the vertex selection `vertices`
///
/// Every edge endpoint must be listed in `vertices`; a dangling endpoint is a
/// `VertexOutsideSelection`. Selections of fewer than 2 vertices are rejected
/// as `EmptySelection`.
pub fn run(edges: &[(usize, usize, u32)], vertices: &[usize]) -> Result<SpanningForest> {
    if vertices.len() < 2 {
        return Err(Error::EmptySelection);
    }

    // Local dense remap so the disjoint set is sized to the selection
    let local: HashMap<usize, usize> = vertices
        .iter()
        .enumerate()
        .map(|(local_index, &vertex)| (vertex, local_index))
        .collect();

    let mut sorted: Vec<(usize, usize, u32)> = edges.to_vec();
    sorted.sort_by_key(|&(_, _, weight)| weight);

    let mut dsu = DisjointSet::new(local.len());
    let mut forest = SpanningForest {
        edges: Vec::new(),
        total_weight: 0,
    };

    for (a, b, weight) in sorted {
        let local_a = *local.get(&a).ok_or(Error::VertexOutsideSelection(a))?;
        let local_b = *local.get(&b).ok_or(Error::VertexOutsideSelection(b))?;

        if dsu.union(local_a, local_b) {
            forest.edges.push((a, b, weight));
            forest.total_weight += u64::from(weight);
        }
    }

    Ok(forest)
}
