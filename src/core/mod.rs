//! Core library modules for metro-graph
//!
//! This module contains the internal implementation details of the metro-graph library.

pub mod dijkstra;
pub mod dsu;
pub mod error;
pub mod graph;
pub mod heap;
pub mod index;
pub mod kruskal;
pub mod loader;
pub mod parser;
pub mod source;

// Re-export main types for internal use
pub use graph::Network;
pub use source::SourceConfig;
