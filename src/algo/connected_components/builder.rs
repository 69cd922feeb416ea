use crate::graph::Graph;

use super::{dfs::dfs, ConnectedComponents};

/// Builder for [`ConnectedComponents`].
pub struct ConnectedComponentsBuilder<'a> {
    graph: &'a Graph,
}

impl ConnectedComponents {
    /// Initializes the builder for the algorithm on given graph.
    pub fn on(graph: &Graph) -> ConnectedComponentsBuilder<'_> {
        ConnectedComponentsBuilder { graph }
    }
}

impl<'a> ConnectedComponentsBuilder<'a> {
    /// Runs the algorithm.
    pub fn run(self) -> ConnectedComponents {
        dfs(self.graph)
    }
}
