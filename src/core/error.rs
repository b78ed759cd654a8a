//! Error types for the metro-graph library
//!
//! Provides the error taxonomy for document loading, index construction and
//! spanning-tree queries.

use std::fmt;

/// Maximum edit distance considered a plausible typo for a given query length
fn max_typo_distance(query: &str) -> usize {
    (query.len() / 3).clamp(1, 3)
}

/// Suggest the closest candidate for a potentially misspelled name using fuzzy matching
///
/// Returns `None` when the query already matches a candidate exactly (ignoring case)
/// or when nothing is within a plausible typo distance.
pub fn suggest_name<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_lower = query.to_lowercase();
    let max_distance = max_typo_distance(query);

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in candidates {
        let distance = strsim::levenshtein(&query_lower, &candidate.to_lowercase());

        if distance == 0 {
            return None;
        }

        if distance <= max_distance && distance < best_distance {
            best_distance = distance;
            best_match = Some(candidate);
        }
    }

    best_match
}

/// Main error type for metro-graph operations
#[derive(Debug)]
pub enum Error {
    /// A source document could not be fetched or read
    SourceUnavailable(String),

    /// A segment endpoint is missing from the station set
    UnknownVertexReference(String),

    /// A spanning-tree request covered fewer than 2 vertices
    EmptySelection,

    /// A spanning-tree edge endpoint (dense index) fell outside the vertex selection
    VertexOutsideSelection(usize),

    /// Cache file I/O error
    Io(std::io::Error),

    /// Cache file could not be decoded
    InvalidCache(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable(msg) => {
                write!(f, "Source unavailable: {}", msg)
            }
            Error::UnknownVertexReference(id) => {
                write!(f, "Segment references unknown station '{}'", id)
            }
            Error::EmptySelection => {
                write!(f, "Spanning tree requires at least 2 vertices")
            }
            Error::VertexOutsideSelection(index) => {
                write!(f, "Edge endpoint {} is outside the vertex selection", index)
            }
            Error::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
            Error::InvalidCache(msg) => {
                write!(f, "Invalid cache file: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::SourceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidCache(err.to_string())
    }
}

/// Convenience result type for metro-graph operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: [&str; 6] = [
        "Bastille",
        "Nation",
        "Châtelet",
        "République",
        "Montparnasse Bienvenue",
        "Gare de Lyon",
    ];

    #[test]
    fn test_suggest_name_fuzzy_matching() {
        assert_eq!(suggest_name("Bastile", STATIONS), Some("Bastille"));
        assert_eq!(suggest_name("Nadion", STATIONS), Some("Nation"));
        assert_eq!(suggest_name("Republique", STATIONS), Some("République"));
    }

    #[test]
    fn test_suggest_name_exact_match_returns_none() {
        assert_eq!(suggest_name("Bastille", STATIONS), None);
        // Case differences are not typos
        assert_eq!(suggest_name("bastille", STATIONS), None);
        assert_eq!(suggest_name("NATION", STATIONS), None);
    }

    #[test]
    fn test_suggest_name_no_match() {
        assert_eq!(suggest_name("totally-unknown-stop", STATIONS), None);
        // Too short and too different
        assert_eq!(suggest_name("x", STATIONS), None);
    }

    #[test]
    fn test_max_typo_distance_bounds() {
        assert_eq!(max_typo_distance("ab"), 1);
        assert_eq!(max_typo_distance("Bastille"), 2);
        assert_eq!(max_typo_distance("Montparnasse Bienvenue"), 3);
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownVertexReference("0042".to_string());
        assert_eq!(err.to_string(), "Segment references unknown station '0042'");
        assert_eq!(
            Error::EmptySelection.to_string(),
            "Spanning tree requires at least 2 vertices"
        );
        assert_eq!(
            Error::VertexOutsideSelection(7).to_string(),
            "Edge endpoint 7 is outside the vertex selection"
        );
    }
}
