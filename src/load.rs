//! Loading graphs from the text description format.
//!
//! The format is line based:
//!
//! ```text
//! <vertex count>
//! <edge count>
//! <v> <w>
//! <v> <w>
//! ...
//! ```
//!
//! The edge count is informational and is not checked against the number of
//! edge lines. Edges are added in the order of the lines, which determines the
//! order of neighbors and therefore the traversal order. Blank lines between
//! edges are skipped.
//!
//! # Examples
//!
//! ```
//! use undigraph::Graph;
//!
//! let graph = "4\n2\n0 1\n2 3\n".parse::<Graph>()?;
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 2);
//! # Ok::<(), undigraph::LoadError>(())
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use thiserror::Error;

use crate::{error::Error, graph::Graph};

/// The error encountered while loading a graph description.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read graph description: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: missing {what}")]
    Missing { line: usize, what: &'static str },

    #[error("line {line}: malformed {what} {content:?}")]
    MalformedCount {
        line: usize,
        what: &'static str,
        content: String,
    },

    #[error("line {line}: malformed edge {content:?}")]
    MalformedEdge { line: usize, content: String },

    #[error("line {line}: {source}")]
    InvalidGraph {
        line: usize,
        #[source]
        source: Error,
    },
}

impl Graph {
    /// Reads a graph description from the reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (line, vertex_count) = parse_count(lines.next(), 1, "vertex count")?;
        let mut graph =
            Graph::try_from(vertex_count).map_err(|source| LoadError::InvalidGraph { line, source })?;

        let (_, _declared_edge_count) = parse_count(lines.next(), 2, "edge count")?;

        for (line, content) in lines {
            let content = content?;

            if content.trim().is_empty() {
                continue;
            }

            let (v, w) = parse_edge(&content).ok_or_else(|| LoadError::MalformedEdge {
                line,
                content: content.clone(),
            })?;

            graph
                .add_edge(v, w)
                .map_err(|source| LoadError::InvalidGraph { line, source })?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            declared_edges = _declared_edge_count,
            "loaded graph description"
        );

        Ok(graph)
    }

    /// Reads a graph description from the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl FromStr for Graph {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

fn parse_count(
    line: Option<(usize, io::Result<String>)>,
    expected_line: usize,
    what: &'static str,
) -> Result<(usize, i64), LoadError> {
    let (line, content) = match line {
        Some((line, content)) => (line, content?),
        None => {
            return Err(LoadError::Missing {
                line: expected_line,
                what,
            })
        }
    };

    match content.trim().parse() {
        Ok(count) => Ok((line, count)),
        Err(_) if content.trim().is_empty() => Err(LoadError::Missing { line, what }),
        Err(_) => Err(LoadError::MalformedCount {
            line,
            what,
            content,
        }),
    }
}

fn parse_edge(content: &str) -> Option<(usize, usize)> {
    let mut tokens = content.split_whitespace();

    let v = tokens.next()?.parse().ok()?;
    let w = tokens.next()?.parse().ok()?;

    match tokens.next() {
        Some(_) => None,
        None => Some((v, w)),
    }
}
