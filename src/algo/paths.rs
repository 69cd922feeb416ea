//! Find [paths] from a single source vertex to all vertices reachable from it.
//!
//! The paths are given by the tree of a depth-first search started at the
//! source. A path found this way is *a* path, not necessarily the shortest
//! one.
//!
//! See available parameters [here](PathsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use undigraph::{algo::Paths, Graph};
//!
//! let mut graph = Graph::new(5);
//! graph.extend_with_edges([(0, 1), (1, 2), (2, 0), (3, 4)])?;
//!
//! let paths = Paths::on(&graph).run(0)?;
//!
//! assert!(paths.has_path_to(2)?);
//! assert!(!paths.has_path_to(3)?);
//!
//! // The edge (2, 0) closes a cycle, but the search reached 2 through 1.
//! assert_eq!(paths.path_to(2)?, Some(vec![0, 1, 2]));
//! # Ok::<(), undigraph::Error>(())
//! ```
//!
//! [paths]: https://en.wikipedia.org/wiki/Path_(graph_theory)

use fixedbitset::FixedBitSet;

use crate::{error::Error, graph::Graph};

mod builder;
mod dfs;

pub use builder::PathsBuilder;

// Parent of the source and of unreached vertices.
const NO_PARENT: usize = usize::MAX;

/// Reachability and depth-first search tree from a single source vertex.
///
/// The structure is a snapshot of the graph at the time of the computation.
/// It is not updated if edges are added to the graph afterwards.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Paths {
    source: usize,
    marked: FixedBitSet,
    parent: Vec<usize>,
}

impl Paths {
    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns `true` if there is a path between the source and `v`.
    ///
    /// The source always has a path to itself.
    pub fn has_path_to(&self, v: usize) -> Result<bool, Error> {
        self.check_vertex(v)?;
        Ok(self.marked.contains(v))
    }

    /// Returns the vertex from which `v` was discovered, or `None` for the
    /// source and for unreachable vertices.
    pub fn parent(&self, v: usize) -> Result<Option<usize>, Error> {
        self.check_vertex(v)?;

        match self.parent[v] {
            NO_PARENT => Ok(None),
            parent => Ok(Some(parent)),
        }
    }

    /// Returns the number of vertices reachable from the source, including the
    /// source itself.
    pub fn reached_count(&self) -> usize {
        self.marked.count_ones(..)
    }

    /// Returns the path from the source to `to`, both included, or `None` if
    /// `to` is not reachable.
    pub fn path_to(&self, to: usize) -> Result<Option<Vec<usize>>, Error> {
        if !self.has_path_to(to)? {
            return Ok(None);
        }

        let mut path = self.reconstruct(to).collect::<Vec<_>>();
        path.reverse();

        Ok(Some(path))
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order.
    ///
    /// The iterator is empty if the vertex is not reachable from the source or
    /// is not a vertex of the graph.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        let curr = (to < self.parent.len() && self.marked.contains(to)).then_some(to);

        PathReconstruction {
            curr,
            parent: &self.parent,
        }
    }

    fn check_vertex(&self, v: usize) -> Result<(), Error> {
        if v < self.parent.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: v,
                vertex_count: self.parent.len(),
            })
        }
    }
}

/// Iterator over the vertices of a path returned from [`Paths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: Option<usize>,
    parent: &'a [usize],
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;

        self.curr = match self.parent[curr] {
            NO_PARENT => None,
            parent => Some(parent),
        };

        Some(curr)
    }
}

/// Returns `true` if there is a path between `v` and `w`.
///
/// This runs a whole depth-first search from `v` on every call. Use
/// [`ConnectedComponents`](crate::algo::ConnectedComponents) for answering many
/// queries on the same graph.
pub fn is_path_between(graph: &Graph, v: usize, w: usize) -> Result<bool, Error> {
    Paths::on(graph).run(v)?.has_path_to(w)
}

/// Returns a path from `s` to `t`, both included, or `None` if they are not
/// connected.
pub fn path_between(graph: &Graph, s: usize, t: usize) -> Result<Option<Vec<usize>>, Error> {
    Paths::on(graph).run(s)?.path_to(t)
}
