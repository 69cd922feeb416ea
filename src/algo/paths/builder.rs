use crate::{error::Error, graph::Graph};

use super::{dfs::dfs, Paths};

/// Builder for [`Paths`].
pub struct PathsBuilder<'a> {
    graph: &'a Graph,
}

impl Paths {
    /// Initializes the builder for the algorithm on given graph.
    pub fn on(graph: &Graph) -> PathsBuilder<'_> {
        PathsBuilder { graph }
    }
}

impl<'a> PathsBuilder<'a> {
    /// Runs the depth-first search from `source`.
    ///
    /// Fails if `source` is not a vertex of the graph.
    pub fn run(self, source: usize) -> Result<Paths, Error> {
        self.graph.check_vertex(source)?;
        Ok(dfs(self.graph, source))
    }
}
