//! # metro-graph
//!
//! Transit network graph engine: parses a line-oriented network description into
//! stations and segments, builds a dense-indexed bidirectional adjacency
//! structure, and answers shortest-path (Dijkstra) and minimum-spanning-forest
//! (Kruskal) queries over it.
//!
//! The engine performs no transport of its own beyond fetching its two source
//! documents (network description and station positions) over HTTP or from local
//! files; presentation, caching policy and serving are the host's concern.
//!
//! ## Example
//!
//! ```no_run
//! use metro_graph::{load_network, PathResult, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> metro_graph::Result<()> {
//!     let network = load_network(&SourceConfig::default()).await?;
//!
//!     let start = network.index_of("0066").unwrap();
//!     let end = network.index_of("0319").unwrap();
//!     match network.shortest_path(start, end) {
//!         PathResult::Path { stops, total_time } => {
//!             println!("{} stops, {}", stops.len(), metro_graph::format_travel_time(total_time));
//!         }
//!         PathResult::NoPath => println!("no route"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A built [`Network`] is immutable and `Send + Sync`: wrap it in an `Arc` for
//! concurrent queries, and swap the `Arc` to pick up reloaded data.

mod core;

pub use crate::core::dijkstra::{format_travel_time, Adjacency, PathResult, ShortestPaths};
pub use crate::core::dsu::DisjointSet;
pub use crate::core::error::{suggest_name, Error, Result};
pub use crate::core::graph::Network;
pub use crate::core::heap::MinHeap;
pub use crate::core::index::DenseIndex;
pub use crate::core::kruskal::SpanningForest;
pub use crate::core::loader::{fetch_document, load_documents};
pub use crate::core::parser::{
    parse_network, parse_positions, NetworkDocument, PositionDocument, PositionEntry, Segment,
    Station,
};
pub use crate::core::source::{resolve_source, DocumentSource, SourceConfig};

/// Load both source documents named by `config` and build the network
pub async fn load_network(config: &SourceConfig) -> Result<Network> {
    let (network_text, positions_text) = load_documents(config).await?;
    Network::from_documents(&network_text, &positions_text)
}

/// Load a network from explicit document locations (URLs or file paths)
pub async fn load_network_from(network: &str, positions: &str) -> Result<Network> {
    let config = SourceConfig {
        network: network.to_string(),
        positions: positions.to_string(),
    };
    load_network(&config).await
}

/// Build a network from raw document text already in memory
pub fn build_network(network_text: &str, positions_text: &str) -> Result<Network> {
    Network::from_documents(network_text, positions_text)
}
