//! Single-source shortest paths over the dense adjacency structure
//!
//! Classic Dijkstra with a binary min-heap frontier and lazy deletion: heap
//! entries are never updated in place, a popped entry whose distance exceeds the
//! best known one is stale and discarded. Correct only for non-negative weights,
//! which the segment model guarantees.

use crate::core::heap::MinHeap;

/// Adjacency lists indexed by dense station index: `(neighbor, weight)` pairs
pub type Adjacency = Vec<Vec<(usize, u32)>>;

/// Result of one Dijkstra run from a start vertex
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Distance in seconds per dense index; `None` means unreachable
    pub distances: Vec<Option<u64>>,
    /// Previous vertex on a shortest path; `None` for the start and unreachable vertices
    pub predecessors: Vec<Option<usize>>,
}

/// Shortest-path query result: an explicit outcome, never a truncated sequence
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    /// Ordered dense-index sequence from start to end, with the total travel time
    Path { stops: Vec<usize>, total_time: u64 },
    /// No route exists between the endpoints
    NoPath,
}

/// Run Dijkstra from `start`
///
/// An out-of-range `start` reaches nothing: every distance comes back `None`.
pub fn run(adjacency: &Adjacency, start: usize) -> ShortestPaths {
    let vertex_count = adjacency.len();
    let mut distances: Vec<Option<u64>> = vec![None; vertex_count];
    let mut predecessors: Vec<Option<usize>> = vec![None; vertex_count];

    if start >= vertex_count {
        return ShortestPaths {
            distances,
            predecessors,
        };
    }

    distances[start] = Some(0);
    let mut heap = MinHeap::with_capacity(vertex_count);
    heap.push(0, start);

    while let Some((distance, vertex)) = heap.pop() {
        // Stale entry: a shorter path to this vertex was already settled
        match distances[vertex] {
            Some(best) if distance > best => continue,
            _ => {}
        }

        for &(neighbor, weight) in &adjacency[vertex] {
            let candidate = distance + u64::from(weight);
            if distances[neighbor].map_or(true, |best| candidate < best) {
                distances[neighbor] = Some(candidate);
                predecessors[neighbor] = Some(vertex);
                heap.push(candidate, neighbor);
            }
        }
    }

    ShortestPaths {
        distances,
        predecessors,
    }
}

/// Shortest path from `start` to `end` as an ordered vertex sequence
///
/// Out-of-range endpoints and unreachable destinations both yield
/// [`PathResult::NoPath`].
pub fn shortest_path(adjacency: &Adjacency, start: usize, end: usize) -> PathResult {
    let vertex_count = adjacency.len();
    if start >= vertex_count || end >= vertex_count {
        return PathResult::NoPath;
    }

    let paths = run(adjacency, start);
    let total_time = match paths.distances[end] {
        Some(distance) => distance,
        None => return PathResult::NoPath,
    };

    let mut stops = vec![end];
    let mut current = end;
    while let Some(previous) = paths.predecessors[current] {
        stops.push(previous);
        current = previous;
    }
    stops.reverse();

    PathResult::Path { stops, total_time }
}

/// Format a travel time in seconds as `"1h 4min 30s"` (zero components omitted,
/// except the seconds)
pub fn format_travel_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}min "));
    }
    out.push_str(&format!("{secs}s"));
    out
}
