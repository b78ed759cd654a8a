//! Document source resolution for metro-graph
//!
//! The engine consumes two text documents: the network description and the
//! station position list. Each can come from an HTTP endpoint or a local file.

/// A resolved location for one source document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// HTTP source with direct URL
    Http { url: String },
    /// Local file source
    File { path: String },
}

/// Configuration naming the two source documents
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Location of the network description document (stations and segments)
    pub network: String,

    /// Location of the station position document
    pub positions: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            network: "http://localhost:8080/Data/metro.txt".to_string(),
            positions: "http://localhost:8080/Data/pospoints.txt".to_string(),
        }
    }
}

/// Resolves a location string to a document source
pub fn resolve_source(location: &str) -> DocumentSource {
    match location {
        url if url.starts_with("http://") || url.starts_with("https://") => {
            DocumentSource::Http {
                url: url.to_string(),
            }
        }
        path => DocumentSource::File {
            path: path.to_string(),
        },
    }
}
