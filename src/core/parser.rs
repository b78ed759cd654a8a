//! Line-oriented network format parsing
//!
//! The network document mixes an ignorable header with `V` (station) and `E`
//! (segment) records; the first `V 0000` and `E 0` lines act as sentinels marking
//! where meaningful records of each tag start. The position document is a plain
//! `x;y;name` list. Malformed lines are never fatal: they are skipped, counted
//! and logged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A transit stop (graph vertex)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Externally assigned identifier; opaque, not guaranteed dense or numeric
    pub id: String,
    /// Display name; several stations may share one (interchanges across lines)
    pub name: String,
    /// Line the station belongs to
    pub line: String,
    /// Whether the station is a terminus of its line
    pub is_terminus: bool,
    /// Branch number for lines that fork
    pub branch: i32,
}

/// A direct weighted connection between two stations (graph edge)
///
/// The pair is unordered and parallel segments between the same pair are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: String,
    pub b: String,
    /// Travel time in seconds
    pub weight: u32,
}

/// A drawing position, joined to stations by exact name match outside the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub x: f64,
    pub y: f64,
    pub name: String,
}

/// Parsed network document: stations by id plus the ordered segment sequence
#[derive(Debug, Clone, Default)]
pub struct NetworkDocument {
    pub stations: HashMap<String, Station>,
    pub segments: Vec<Segment>,
    /// Number of malformed `V`/`E` lines that were skipped
    pub skipped_lines: usize,
}

impl NetworkDocument {
    /// Number of stations in the document
    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }
}

/// Parsed position document
#[derive(Debug, Clone, Default)]
pub struct PositionDocument {
    pub positions: Vec<PositionEntry>,
    /// Number of malformed position lines that were skipped
    pub skipped_lines: usize,
}

/// Parse the network description document
pub fn parse_network(text: &str) -> NetworkDocument {
    let mut doc = NetworkDocument::default();
    let mut vertices_started = false;
    let mut edges_started = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('V') {
            if !vertices_started {
                if !line.starts_with("V 0000") {
                    continue; // header line
                }
                vertices_started = true;
            }
            if let Some(station) = parse_vertex_line(line) {
                doc.stations.insert(station.id.clone(), station);
            } else {
                doc.skipped_lines += 1;
                log::debug!("Skipping malformed vertex line: {line:?}");
            }
        } else if line.starts_with('E') {
            if !edges_started {
                if !line.starts_with("E 0") {
                    continue; // header line
                }
                edges_started = true;
            }
            if let Some(segment) = parse_edge_line(line) {
                doc.segments.push(segment);
            } else {
                doc.skipped_lines += 1;
                log::debug!("Skipping malformed edge line: {line:?}");
            }
        }
    }

    if doc.skipped_lines > 0 {
        log::warn!(
            "Network document: skipped {} malformed line(s)",
            doc.skipped_lines
        );
    }

    doc
}

/// Parse one `V` line into a station
///
/// Grammar after the tag: `<id> <name words...> ;<line> ;<is_terminus> <branch>`.
/// The separator is the two-character sequence ` ;`.
fn parse_vertex_line(line: &str) -> Option<Station> {
    let rest = line[1..].trim();
    let separator = rest.find(" ;")?;

    let before = rest[..separator].trim();
    let after = rest[separator + 2..].trim();

    let mut head = before.split_whitespace();
    let id = head.next()?.to_string();
    let name_tokens: Vec<&str> = head.collect();
    if name_tokens.is_empty() {
        return None;
    }
    let name = name_tokens.join(" ");

    let fields: Vec<&str> = after.split(" ;").collect();
    if fields.len() != 2 {
        return None;
    }
    let line_id = fields[0].trim().to_string();

    let mut tail = fields[1].trim().split_whitespace();
    let is_terminus = tail.next()? == "True";
    let branch: i32 = tail.next()?.parse().ok()?;

    Some(Station {
        id,
        name,
        line: line_id,
        is_terminus,
        branch,
    })
}

/// Parse one `E` line into a segment
///
/// The first field after the tag is the record index (the `0` in the `E 0`
/// sentinel) and is discarded; then come the two endpoint ids and the weight.
/// Extra fields past the weight are ignored.
fn parse_edge_line(line: &str) -> Option<Segment> {
    let rest = line[1..].trim();
    let mut fields = rest.split_whitespace();

    fields.next()?; // record index
    let a = fields.next()?.to_string();
    let b = fields.next()?.to_string();
    let weight: u32 = fields.next()?.parse().ok()?;

    Some(Segment { a, b, weight })
}

/// Parse the position document: one `x;y;name` entry per non-blank line
///
/// `@` characters in the name stand for literal spaces.
pub fn parse_positions(text: &str) -> PositionDocument {
    let mut doc = PositionDocument::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(';').collect();
        if parts.len() != 3 {
            doc.skipped_lines += 1;
            log::debug!("Skipping malformed position line: {line:?}");
            continue;
        }

        let (x, y) = match (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                doc.skipped_lines += 1;
                log::debug!("Skipping malformed position line: {line:?}");
                continue;
            }
        };

        doc.positions.push(PositionEntry {
            x,
            y,
            name: parts[2].replace('@', " "),
        });
    }

    if doc.skipped_lines > 0 {
        log::warn!(
            "Position document: skipped {} malformed line(s)",
            doc.skipped_lines
        );
    }

    doc
}
