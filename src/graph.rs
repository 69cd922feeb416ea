//! Undirected graph stored as an adjacency list.
//!
//! Vertices are identified by dense indices `0..vertex_count`. The number of
//! vertices is fixed when the graph is created; only edges can be added
//! afterwards.
//!
//! # Examples
//!
//! ```
//! use undigraph::Graph;
//!
//! let mut graph = Graph::new(3);
//!
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(0, 0)?;
//!
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.self_loop_count(), 1);
//! assert_eq!(graph.neighbors(0)?, &[1, 0, 0]);
//! # Ok::<(), undigraph::Error>(())
//! ```

use std::{fmt, ops::Range};

use crate::error::Error;

/// Undirected, unlabeled graph in adjacency list representation.
///
/// Every edge `(v, w)` is stored twice, once in the list of `v` and once in
/// the list of `w`. A self-loop `(v, v)` therefore occurs twice in the list of
/// `v`. Parallel edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if the adjacency lists cannot be allocated. Use
    /// [`Graph::try_from`] for vertex counts that come from untrusted input.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    ///
    /// Computed from the adjacency lists in which every edge is counted from
    /// both of its endpoints.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns an iterator over all vertex ids in ascending order.
    pub fn vertex_ids(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    /// Adds an undirected edge between `v` and `w`.
    ///
    /// `w` is appended to the neighbors of `v` and `v` to the neighbors of
    /// `w`. Adding a self-loop appends `v` to its own list twice.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), Error> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        self.adjacency[v].push(w);
        self.adjacency[w].push(v);

        Ok(())
    }

    /// Adds all edges from the iterator in order.
    ///
    /// Stops at the first edge with an endpoint that is not a vertex of the
    /// graph. Edges preceding it stay in the graph.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (v, w) in edges {
            self.add_edge(v, w)?;
        }

        Ok(())
    }

    /// Returns the neighbors of `v` in the order the edges were added.
    ///
    /// The list contains duplicates for parallel edges and self-loops.
    pub fn neighbors(&self, v: usize) -> Result<&[usize], Error> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Returns the number of edge endpoints incident to `v`.
    ///
    /// A self-loop contributes two to the degree.
    pub fn degree(&self, v: usize) -> Result<usize, Error> {
        self.neighbors(v).map(<[usize]>::len)
    }

    /// Returns the maximum degree over all vertices, or zero if there are no
    /// vertices.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the average vertex degree, `2 * E / V`.
    pub fn average_degree(&self) -> Result<f64, Error> {
        if self.adjacency.is_empty() {
            return Err(Error::EmptyGraph);
        }

        Ok(2.0 * self.edge_count() as f64 / self.vertex_count() as f64)
    }

    /// Returns the number of self-loops.
    pub fn self_loop_count(&self) -> usize {
        let endpoints = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(v, neighbors)| neighbors.iter().filter(|&&w| w == v).count())
            .sum::<usize>();

        endpoints / 2
    }

    // Traversals only ever index with ids that were validated at their entry
    // point or come from the adjacency lists themselves.
    pub(crate) fn adjacent(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<(), Error> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl TryFrom<i64> for Graph {
    type Error = Error;

    fn try_from(vertex_count: i64) -> Result<Self, Self::Error> {
        let count = usize::try_from(vertex_count).map_err(|_| Error::InvalidSize(vertex_count))?;

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(count)
            .map_err(|_| Error::InvalidSize(vertex_count))?;
        adjacency.resize_with(count, Vec::new);

        Ok(Self { adjacency })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{v}:")?;
            for w in neighbors {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::{create_path_graph, create_tiny_graph};

    use super::*;

    #[test]
    fn empty() {
        let graph = Graph::new(0);

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.max_degree(), 0);
        assert_eq!(graph.self_loop_count(), 0);
        assert_matches!(graph.average_degree(), Err(Error::EmptyGraph));
    }

    #[test]
    fn vertices_without_edges() {
        let graph = Graph::new(4);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(graph.average_degree(), Ok(0.0));
    }

    #[test]
    fn add_edge_symmetric() {
        let mut graph = Graph::new(3);

        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 1).unwrap();

        assert_eq!(graph.neighbors(0).unwrap(), &[1]);
        assert_eq!(graph.neighbors(1).unwrap(), &[0, 2]);
        assert_eq!(graph.neighbors(2).unwrap(), &[1]);
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut graph = Graph::new(2);

        assert_eq!(
            graph.add_edge(0, 2),
            Err(Error::IndexOutOfRange {
                index: 2,
                vertex_count: 2
            })
        );
        assert_matches!(
            graph.add_edge(5, 0),
            Err(Error::IndexOutOfRange { index: 5, .. })
        );

        // Nothing was added for the rejected edges.
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(0).unwrap(), &[] as &[usize]);
    }

    #[test]
    fn self_loop() {
        let mut graph = Graph::new(3);

        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(0, 0).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.self_loop_count(), 1);
        assert_eq!(graph.degree(0), Ok(3));
        assert_eq!(graph.neighbors(0).unwrap(), &[1, 0, 0]);
    }

    #[test]
    fn parallel_edges() {
        let mut graph = Graph::new(2);

        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(0).unwrap(), &[1, 1]);
        assert_eq!(graph.self_loop_count(), 0);
    }

    #[test]
    fn query_out_of_range() {
        let graph = create_path_graph(3);

        assert_matches!(graph.neighbors(3), Err(Error::IndexOutOfRange { .. }));
        assert_matches!(graph.degree(usize::MAX), Err(Error::IndexOutOfRange { .. }));
        assert!(!graph.contains_vertex(3));
        assert!(graph.contains_vertex(2));
    }

    #[test]
    fn extend_with_edges_stops_at_invalid() {
        let mut graph = Graph::new(3);

        let result = graph.extend_with_edges([(0, 1), (1, 7), (1, 2)]);

        assert_matches!(result, Err(Error::IndexOutOfRange { index: 7, .. }));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn tiny_statistics() {
        let graph = create_tiny_graph();

        assert_eq!(graph.vertex_count(), 13);
        assert_eq!(graph.edge_count(), 13);
        assert_eq!(graph.max_degree(), 4);
        assert_eq!(graph.average_degree(), Ok(2.0));
        assert_eq!(graph.self_loop_count(), 0);
        assert_eq!(graph.neighbors(6).unwrap(), &[4, 0]);
    }

    #[test]
    fn try_from_count() {
        assert_eq!(Graph::try_from(3_i64).map(|g| g.vertex_count()), Ok(3));
        assert_eq!(Graph::try_from(0_i64).map(|g| g.vertex_count()), Ok(0));
        assert_eq!(Graph::try_from(-1_i64), Err(Error::InvalidSize(-1)));
    }

    #[test]
    fn try_from_unallocatable_count() {
        assert_eq!(
            Graph::try_from(i64::MAX),
            Err(Error::InvalidSize(i64::MAX))
        );
    }

    #[test]
    fn display() {
        let mut graph = Graph::new(3);
        graph.extend_with_edges([(0, 1), (0, 0)]).unwrap();

        assert_eq!(graph.to_string(), "0: 1 0 0\n1: 0\n2:\n");
    }
}
