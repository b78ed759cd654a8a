//! The immutable network graph handle
//!
//! `Network` owns the parsed stations, segments and positions together with the
//! dense index and the bidirectional adjacency lists built from them. It is
//! constructed once and never mutated; a data reload builds a fresh instance and
//! the host swaps the `Arc` it hands to queries. All query methods take `&self`,
//! so a built network is safe for unlimited concurrent readers.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::dijkstra::{self, Adjacency, PathResult, ShortestPaths};
use crate::core::error::{self, Result};
use crate::core::index::DenseIndex;
use crate::core::kruskal::{self, SpanningForest};
use crate::core::parser::{
    parse_network, parse_positions, NetworkDocument, PositionEntry, Segment, Station,
};

/// On-disk cache shape; index and adjacency are rebuilt on load
#[derive(Debug, Serialize, Deserialize)]
struct CachedNetwork {
    stations: Vec<Station>,
    segments: Vec<Segment>,
    positions: Vec<PositionEntry>,
}

/// An immutable transit network: stations, segments, positions and the derived
/// dense index and adjacency structure
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<String, Station>,
    segments: Vec<Segment>,
    positions: Vec<PositionEntry>,
    index: DenseIndex,
    adjacency: Adjacency,
}

impl Network {
    /// Build a network from the two raw source documents
    pub fn from_documents(network_text: &str, positions_text: &str) -> Result<Self> {
        let document = parse_network(network_text);
        let positions = parse_positions(positions_text);
        Self::from_parts(document, positions.positions)
    }

    /// Build a network from already-parsed parts
    pub fn from_parts(document: NetworkDocument, positions: Vec<PositionEntry>) -> Result<Self> {
        let index = DenseIndex::build(&document.stations, &document.segments)?;
        let adjacency = build_adjacency(&document.segments, &index);

        log::info!(
            "Built network: {} stations, {} segments",
            index.len(),
            document.segments.len()
        );

        Ok(Self {
            stations: document.stations,
            segments: document.segments,
            positions,
            index,
            adjacency,
        })
    }

    /// Number of stations
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Station collection, keyed by external id
    pub fn stations(&self) -> &HashMap<String, Station> {
        &self.stations
    }

    /// Segment sequence in document order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Position entries in document order
    pub fn positions(&self) -> &[PositionEntry] {
        &self.positions
    }

    /// The id ↔ dense-index bijection
    pub fn index(&self) -> &DenseIndex {
        &self.index
    }

    /// Adjacency lists indexed by dense station index
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Dense index for an external station id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.index_of(id)
    }

    /// Station by external id
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Station by dense index
    pub fn station_at(&self, index: usize) -> Option<&Station> {
        self.index.id(index).and_then(|id| self.stations.get(id))
    }

    /// First station matching a display name exactly
    ///
    /// Interchanges can share a name across lines; prefer id lookups when the
    /// caller knows which line it wants.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|station| station.name == name)
    }

    /// Suggest a close station name for a query that matched nothing
    pub fn suggest_station(&self, name: &str) -> Option<&str> {
        error::suggest_name(name, self.stations.values().map(|s| s.name.as_str()))
    }

    /// Whether every station is reachable from dense index 0
    ///
    /// Iterative depth-first traversal; an explicit stack keeps memory bounded
    /// on long chains. Vacuously true for the empty network.
    pub fn is_connected(&self) -> bool {
        let vertex_count = self.vertex_count();
        if vertex_count == 0 {
            return true;
        }

        let mut visited = vec![false; vertex_count];
        let mut stack = vec![0usize];
        visited[0] = true;

        while let Some(vertex) = stack.pop() {
            for &(neighbor, _) in &self.adjacency[vertex] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }

        visited.into_iter().all(|reached| reached)
    }

    /// Shortest paths from one station to every other
    ///
    /// An out-of-range start index reaches nothing: all distances are `None`.
    pub fn shortest_paths(&self, start: usize) -> ShortestPaths {
        dijkstra::run(&self.adjacency, start)
    }

    /// Shortest path between two stations by dense index
    pub fn shortest_path(&self, start: usize, end: usize) -> PathResult {
        dijkstra::shortest_path(&self.adjacency, start, end)
    }

    /// Minimum spanning forest of the whole network
    pub fn spanning_forest(&self) -> Result<SpanningForest> {
        let vertices: Vec<usize> = (0..self.vertex_count()).collect();
        kruskal::run(&self.segment_triples(), &vertices)
    }

    /// Minimum spanning forest of the subgraph induced by a station selection
    ///
    /// The edge subset is derived as all segments with both endpoints selected;
    /// a disconnected selection yields a forest spanning each component.
    pub fn spanning_forest_of(&self, selection: &[usize]) -> Result<SpanningForest> {
        let selected: std::collections::HashSet<usize> = selection.iter().copied().collect();
        let edges: Vec<(usize, usize, u32)> = self
            .segment_triples()
            .into_iter()
            .filter(|(a, b, _)| selected.contains(a) && selected.contains(b))
            .collect();
        kruskal::run(&edges, selection)
    }

    /// Segments as dense-index triples, preserving document order
    fn segment_triples(&self) -> Vec<(usize, usize, u32)> {
        self.segments
            .iter()
            .map(|segment| {
                // Endpoints were validated when the index was built
                let a = self.index.index_of(&segment.a).unwrap_or_default();
                let b = self.index.index_of(&segment.b).unwrap_or_default();
                (a, b, segment.weight)
            })
            .collect()
    }

    /// Write the parsed network to a JSON cache file
    pub fn save_cache<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut stations: Vec<Station> = self.stations.values().cloned().collect();
        stations.sort_by(|a, b| a.id.cmp(&b.id));

        let cached = CachedNetwork {
            stations,
            segments: self.segments.clone(),
            positions: self.positions.clone(),
        };

        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), &cached)?;
        Ok(())
    }

    /// Rebuild a network from a JSON cache file
    ///
    /// The index and adjacency are reconstructed, re-validating every segment
    /// endpoint against the cached station set.
    pub fn load_cache<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let cached: CachedNetwork = serde_json::from_reader(BufReader::new(file))?;

        let stations: HashMap<String, Station> = cached
            .stations
            .into_iter()
            .map(|station| (station.id.clone(), station))
            .collect();

        let document = NetworkDocument {
            stations,
            segments: cached.segments,
            skipped_lines: 0,
        };
        Self::from_parts(document, cached.positions)
    }
}

/// Insert both directions of every segment; parallel segments yield parallel
/// adjacency entries
fn build_adjacency(segments: &[Segment], index: &DenseIndex) -> Adjacency {
    let mut adjacency = vec![Vec::new(); index.len()];

    for segment in segments {
        // Endpoints were validated by DenseIndex::build
        let (a, b) = match (index.index_of(&segment.a), index.index_of(&segment.b)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        adjacency[a].push((b, segment.weight));
        adjacency[b].push((a, segment.weight));
    }

    adjacency
}
