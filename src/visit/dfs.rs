use fixedbitset::FixedBitSet;

use crate::graph::Graph;

use super::{VisitSet, Visitor};

/// A vertex discovered by the depth-first search together with the vertex it
/// was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsStep {
    pub vertex: usize,
    /// `None` for the root of the traversal.
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    // Position of the next neighbor to examine in the adjacency list.
    next: usize,
}

/// Depth-first search in preorder.
///
/// The visited set persists across [`start`](Dfs::start) calls until
/// [`reset`](Dfs::reset), so that multiple traversals started from different
/// roots never report a vertex twice.
#[derive(Debug)]
pub struct Dfs {
    stack: Vec<Frame>,
    visited: FixedBitSet,
}

/// Depth-first search from a single root returned from [`Dfs::start`].
pub struct DfsRooted<'a> {
    raw: &'a mut Dfs,
    root: Option<usize>,
}

impl Dfs {
    pub fn new(graph: &Graph) -> Self {
        Self {
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
        }
    }

    /// Starts the traversal from `root`.
    ///
    /// If the root was already visited by a previous traversal or is not a
    /// vertex of the graph the visitor is used with, the visitor yields
    /// nothing.
    pub fn start(&mut self, root: usize) -> DfsRooted<'_> {
        self.stack.clear();

        DfsRooted {
            raw: self,
            root: Some(root),
        }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &impl VisitSet {
        &self.visited
    }

    pub(crate) fn into_visited(self) -> FixedBitSet {
        self.visited
    }
}

impl<'a> Visitor<Graph> for DfsRooted<'a> {
    type Item = DfsStep;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if !graph.contains_vertex(root) || !self.raw.visited.visit(root) {
                return None;
            }

            self.raw.stack.push(Frame {
                vertex: root,
                next: 0,
            });

            return Some(DfsStep {
                vertex: root,
                parent: None,
            });
        }

        loop {
            let frame = self.raw.stack.last_mut()?;

            match graph.adjacent(frame.vertex).get(frame.next) {
                Some(&neighbor) => {
                    frame.next += 1;
                    let parent = frame.vertex;

                    if self.raw.visited.visit(neighbor) {
                        self.raw.stack.push(Frame {
                            vertex: neighbor,
                            next: 0,
                        });

                        return Some(DfsStep {
                            vertex: neighbor,
                            parent: Some(parent),
                        });
                    }
                }
                None => {
                    // All neighbors examined, backtrack.
                    self.raw.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::{create_path_graph, create_tiny_graph};

    use super::*;

    fn vertices(graph: &Graph, root: usize) -> Vec<usize> {
        let mut dfs = Dfs::new(graph);
        dfs.start(root)
            .into_iter(graph)
            .map(|step| step.vertex)
            .collect()
    }

    #[test]
    fn preorder_follows_insertion_order() {
        let graph = create_tiny_graph();

        // Adjacency of 0 is [5, 1, 2, 6], of 5 is [0, 4, 3], of 4 is
        // [3, 6, 5], of 3 is [4, 5].
        assert_eq!(vertices(&graph, 0), vec![0, 5, 4, 3, 6, 1, 2]);
        assert_eq!(vertices(&graph, 9), vec![9, 12, 11, 10]);
        assert_eq!(vertices(&graph, 7), vec![7, 8]);
    }

    #[test]
    fn parents() {
        let graph = create_tiny_graph();
        let mut dfs = Dfs::new(&graph);

        let steps = dfs.start(0).into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(
            steps[0],
            DfsStep {
                vertex: 0,
                parent: None
            }
        );
        assert!(steps.contains(&DfsStep {
            vertex: 6,
            parent: Some(4)
        }));
        assert!(steps.contains(&DfsStep {
            vertex: 3,
            parent: Some(4)
        }));
        assert!(steps.contains(&DfsStep {
            vertex: 1,
            parent: Some(0)
        }));
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let mut graph = Graph::new(3);
        graph
            .extend_with_edges([(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)])
            .unwrap();

        assert_eq!(vertices(&graph, 0), vec![0, 1, 2]);
    }

    #[test]
    fn visited_persists_across_starts() {
        let graph = create_tiny_graph();
        let mut dfs = Dfs::new(&graph);

        assert_eq!(dfs.start(7).into_iter(&graph).count(), 2);
        assert_eq!(dfs.start(8).into_iter(&graph).count(), 0);
        assert_eq!(dfs.visited().visited_count(), 2);

        dfs.reset();
        assert_eq!(dfs.start(8).into_iter(&graph).count(), 2);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let graph = create_path_graph(200_000);

        assert_eq!(vertices(&graph, 0).len(), 200_000);
    }

    #[test]
    fn root_out_of_range() {
        let graph = Graph::new(3);
        let mut dfs = Dfs::new(&graph);

        assert_eq!(dfs.start(5).into_iter(&graph).count(), 0);
        assert_eq!(dfs.start(usize::MAX).into_iter(&graph).count(), 0);
        assert_eq!(dfs.visited().visited_count(), 0);
        assert_eq!(dfs.start(0).into_iter(&graph).count(), 1);
    }

    #[test]
    fn isolated_root() {
        let graph = Graph::new(2);

        assert_eq!(vertices(&graph, 1), vec![1]);
    }
}
