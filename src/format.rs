//! Text file format for weighted undirected graphs.
//!
//! The first line holds `numNodes numEdges`; each of the following
//! `numEdges` lines holds one `source destination weight` triple. All fields
//! are non-negative integers and weights are strictly positive. Anything
//! after the declared edge count is ignored.

use core::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::graph::{Edge, Graph, GraphError};

/// Why a graph file was rejected.
///
/// Parsing is all-or-nothing, mirroring [`Graph::from_edges`]: any bad line
/// aborts with no partial graph.
#[derive(Debug)]
pub enum ParseError {
    /// Underlying reader failure.
    Io(io::Error),
    /// The `numNodes numEdges` header line is missing or malformed.
    Header,
    /// An edge line is malformed (wrong field count or non-integer field).
    Edge {
        /// 1-based line number of the offending line.
        line: usize,
    },
    /// The file ended before the declared number of edges.
    TruncatedEdges {
        /// Edge count declared in the header.
        expected: usize,
        /// Edge lines actually present.
        found: usize,
    },
    /// The edge list was well-formed text but rejected by graph construction.
    Graph(GraphError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "read failed: {e}"),
            ParseError::Header => write!(f, "missing or malformed `nodes edges` header"),
            ParseError::Edge { line } => write!(f, "malformed edge on line {line}"),
            ParseError::TruncatedEdges { expected, found } => {
                write!(f, "expected {expected} edges, file ends after {found}")
            }
            ParseError::Graph(e) => write!(f, "invalid graph: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            ParseError::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

impl From<GraphError> for ParseError {
    fn from(e: GraphError) -> Self {
        ParseError::Graph(e)
    }
}

/// Parses a graph from any buffered reader.
///
/// # Errors
///
/// See [`ParseError`]; edge errors carry the 1-based line number.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph, ParseError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(ParseError::Header)??;
    let mut fields = header.split_whitespace();
    let nodes: usize = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or(ParseError::Header)?;
    let edge_count: usize = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or(ParseError::Header)?;
    if fields.next().is_some() {
        return Err(ParseError::Header);
    }

    let mut edges = Vec::with_capacity(edge_count);
    for i in 0..edge_count {
        let line_no = i + 2;
        let line = lines.next().ok_or(ParseError::TruncatedEdges {
            expected: edge_count,
            found: i,
        })??;

        let mut fields = line.split_whitespace();
        let mut field = || fields.next().ok_or(ParseError::Edge { line: line_no });
        let u: usize = field()?.parse().map_err(|_| ParseError::Edge { line: line_no })?;
        let v: usize = field()?.parse().map_err(|_| ParseError::Edge { line: line_no })?;
        let weight: u32 = field()?.parse().map_err(|_| ParseError::Edge { line: line_no })?;
        if fields.next().is_some() {
            return Err(ParseError::Edge { line: line_no });
        }

        edges.push(Edge { u, v, weight });
    }

    Ok(Graph::from_edges(nodes, &edges)?)
}

/// Reads a graph from a file on disk.
///
/// # Errors
///
/// Propagates open/read failures as [`ParseError::Io`] alongside all the
/// parse failures of [`parse_graph`].
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<Graph, ParseError> {
    let file = File::open(path)?;
    parse_graph(BufReader::new(file))
}

/// Writes an edge list in the same format `parse_graph` reads.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_graph<W: Write>(mut writer: W, nodes: usize, edges: &[Edge]) -> io::Result<()> {
    writeln!(writer, "{} {}", nodes, edges.len())?;
    for e in edges {
        writeln!(writer, "{} {} {}", e.u, e.v, e.weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Graph, ParseError> {
        parse_graph(io::Cursor::new(text))
    }

    #[test]
    fn test_parse_well_formed() {
        let g = parse("3 2\n0 1 5\n1 2 7\n").unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![(0, 5), (2, 7)]);
    }

    #[test]
    fn test_parse_ignores_trailing_lines() {
        let g = parse("2 1\n0 1 3\n\nleftover\n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        assert!(matches!(parse(""), Err(ParseError::Header)));
        assert!(matches!(parse("3\n"), Err(ParseError::Header)));
        assert!(matches!(parse("three 2\n"), Err(ParseError::Header)));
        assert!(matches!(parse("3 2 9\n"), Err(ParseError::Header)));
    }

    #[test]
    fn test_parse_rejects_bad_edge_with_line_number() {
        let err = parse("3 2\n0 1 5\n1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::Edge { line: 3 }));

        let err = parse("3 1\n0 x 5\n").unwrap_err();
        assert!(matches!(err, ParseError::Edge { line: 2 }));

        // A negative weight is not a valid u32.
        let err = parse("3 1\n0 1 -5\n").unwrap_err();
        assert!(matches!(err, ParseError::Edge { line: 2 }));
    }

    #[test]
    fn test_parse_rejects_truncated_edge_list() {
        let err = parse("3 3\n0 1 5\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::TruncatedEdges {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_parse_surfaces_graph_errors() {
        // Vertex 9 out of range for 3 nodes.
        let err = parse("3 1\n0 9 5\n").unwrap_err();
        assert!(matches!(err, ParseError::Graph(_)));

        // Zero weight parses as an integer but fails construction.
        let err = parse("3 1\n0 1 0\n").unwrap_err();
        assert!(matches!(err, ParseError::Graph(_)));
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let edges = [
            Edge { u: 0, v: 1, weight: 2 },
            Edge { u: 1, v: 3, weight: 11 },
        ];
        let mut buf = Vec::new();
        write_graph(&mut buf, 4, &edges).unwrap();

        let g = parse_graph(io::Cursor::new(buf)).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(3, 1));
        assert!(g.has_edge(0, 1));
    }
}
