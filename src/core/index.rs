//! Dense station indexing
//!
//! Parsed station ids are opaque strings; the algorithms downstream are all
//! array-addressed. `DenseIndex` assigns each station a contiguous zero-based
//! index and validates every segment endpoint up front, so a dangling reference
//! surfaces here instead of as an out-of-bounds access later.

use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::core::parser::{Segment, Station};

/// Bijection between external station ids and the dense `[0, n)` range
///
/// Indices are assigned in sorted id order, so two builds from the same station
/// set always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseIndex {
    forward: HashMap<String, usize>,
    reverse: Vec<String>,
}

impl DenseIndex {
    /// Build the bijection and validate all segment endpoints
    pub fn build(stations: &HashMap<String, Station>, segments: &[Segment]) -> Result<Self> {
        let mut ids: Vec<&String> = stations.keys().collect();
        ids.sort();

        let mut forward = HashMap::with_capacity(ids.len());
        let mut reverse = Vec::with_capacity(ids.len());
        for (index, id) in ids.into_iter().enumerate() {
            forward.insert(id.clone(), index);
            reverse.push(id.clone());
        }

        for segment in segments {
            if !forward.contains_key(&segment.a) {
                return Err(Error::UnknownVertexReference(segment.a.clone()));
            }
            if !forward.contains_key(&segment.b) {
                return Err(Error::UnknownVertexReference(segment.b.clone()));
            }
        }

        Ok(Self { forward, reverse })
    }

    /// Dense index for an external id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.forward.get(id).copied()
    }

    /// External id for a dense index
    pub fn id(&self, index: usize) -> Option<&str> {
        self.reverse.get(index).map(String::as_str)
    }

    /// Number of indexed stations
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}
