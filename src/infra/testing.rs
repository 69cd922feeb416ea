//! Graph fixtures and invariant checkers used in tests, benchmarks and fuzzing.

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    algo::{ConnectedComponents, Paths},
    graph::Graph,
    visit::VisitSet,
};

const TINY_GRAPH: &str = include_str!("../../fixtures/tiny.txt");

/// The 13 vertex sample graph with three components: `{0, ..., 6}`,
/// `{7, 8}` and `{9, ..., 12}`.
pub fn create_tiny_graph() -> Graph {
    match TINY_GRAPH.parse() {
        Ok(graph) => graph,
        Err(error) => panic!("invalid tiny graph fixture: {error}"),
    }
}

/// A path `0 - 1 - ... - (vertex_count - 1)`.
pub fn create_path_graph(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);

    for v in 1..vertex_count {
        graph.add_edge(v - 1, v).unwrap();
    }

    graph
}

/// A cycle `0 - 1 - ... - (vertex_count - 1) - 0`.
pub fn create_cycle_graph(vertex_count: usize) -> Graph {
    let mut graph = create_path_graph(vertex_count);

    if vertex_count > 0 {
        graph.add_edge(vertex_count - 1, 0).unwrap();
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex {0} has neighbor {1} which is not a vertex")]
    NeighborOutOfRange(usize, usize),
    #[error("{1} occurs {2} times among neighbors of {0}, but {0} occurs {3} times among neighbors of {1}")]
    AsymmetricAdjacency(usize, usize, usize, usize),
    #[error("vertex {0} occurs an odd number of times among its own neighbors")]
    OddSelfLoop(usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("vertex {0} is reported reachable from {1} but it is not")]
    FalselyReachable(usize, usize),
    #[error("vertex {0} is reachable from {1} but it is not reported")]
    FalselyUnreachable(usize, usize),
    #[error("parent chain of vertex {0} does not lead to the source")]
    BrokenParentChain(usize),
    #[error("vertex {0} occurs in {1} components")]
    NotPartition(usize, usize),
    #[error("components {0} and {1} are connected")]
    ComponentsConnected(usize, usize),
    #[error("component {0} is not ordered by its lowest vertex")]
    ComponentOrder(usize),
}

/// Checks the structural invariants of the adjacency representation.
pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    let mut multiplicity = FxHashMap::<(usize, usize), usize>::default();
    let mut degree_sum = 0;

    for v in graph.vertex_ids() {
        let neighbors = graph.adjacent(v);
        degree_sum += neighbors.len();

        for &w in neighbors {
            if !graph.contains_vertex(w) {
                return Err(ConsistencyCheckError::NeighborOutOfRange(v, w));
            }

            *multiplicity.entry((v, w)).or_default() += 1;
        }
    }

    for (&(v, w), &count) in multiplicity.iter() {
        if v == w {
            if count % 2 != 0 {
                return Err(ConsistencyCheckError::OddSelfLoop(v));
            }
        } else {
            let reverse = multiplicity.get(&(w, v)).copied().unwrap_or(0);
            if reverse != count {
                return Err(ConsistencyCheckError::AsymmetricAdjacency(
                    v, w, count, reverse,
                ));
            }
        }
    }

    if degree_sum != 2 * graph.edge_count() {
        return Err(ConsistencyCheckError::HandshakingLemma(
            degree_sum,
            2 * graph.edge_count(),
        ));
    }

    Ok(())
}

// Reachability oracle: a plain push-all-neighbors search, independent of the
// visitor.
fn reachable(graph: &Graph, source: usize) -> FixedBitSet {
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut stack = vec![source];

    while let Some(v) = stack.pop() {
        if visited.visit(v) {
            stack.extend(graph.adjacent(v).iter().copied());
        }
    }

    visited
}

/// Checks that the paths mark exactly the component of the source and that
/// every reconstructed path is a valid walk in the graph.
pub fn check_paths(graph: &Graph, paths: &Paths) -> Result<(), ConsistencyCheckError> {
    let source = paths.source();
    let expected = reachable(graph, source);

    for v in graph.vertex_ids() {
        let reported = paths.has_path_to(v).unwrap_or(false);

        match (reported, expected.is_visited(v)) {
            (true, false) => return Err(ConsistencyCheckError::FalselyReachable(v, source)),
            (false, true) => return Err(ConsistencyCheckError::FalselyUnreachable(v, source)),
            (false, false) => continue,
            (true, true) => {}
        }

        let path = paths
            .path_to(v)
            .ok()
            .flatten()
            .ok_or(ConsistencyCheckError::BrokenParentChain(v))?;

        let valid_ends = path.first() == Some(&source) && path.last() == Some(&v);
        let valid_edges = path
            .windows(2)
            .all(|pair| graph.adjacent(pair[0]).contains(&pair[1]));

        if !valid_ends || !valid_edges || path.len() > graph.vertex_count() {
            return Err(ConsistencyCheckError::BrokenParentChain(v));
        }
    }

    Ok(())
}

/// Checks that the components partition the vertex set, that distinct
/// components are not connected and that they are ordered by their roots.
pub fn check_components(
    graph: &Graph,
    components: &ConnectedComponents,
) -> Result<(), ConsistencyCheckError> {
    let mut occurrences = vec![0usize; graph.vertex_count()];

    for component in components.iter() {
        for &v in component {
            match occurrences.get_mut(v) {
                Some(count) => *count += 1,
                None => return Err(ConsistencyCheckError::NotPartition(v, 0)),
            }
        }
    }

    if let Some((v, &count)) = occurrences.iter().enumerate().find(|&(_, &c)| c != 1) {
        return Err(ConsistencyCheckError::NotPartition(v, count));
    }

    let mut previous_root = None;

    for (i, component) in components.iter().enumerate() {
        let root = component[0];

        if component.iter().any(|&v| v < root) || previous_root.is_some_and(|p| p >= root) {
            return Err(ConsistencyCheckError::ComponentOrder(i));
        }
        previous_root = Some(root);

        let expected = reachable(graph, root);

        if let Some(j) = components
            .iter()
            .enumerate()
            .find(|(j, other)| *j != i && expected.is_visited(other[0]))
            .map(|(j, _)| j)
        {
            return Err(ConsistencyCheckError::ComponentsConnected(i, j));
        }

        if let Some(&v) = component.iter().find(|&&v| !expected.is_visited(v)) {
            return Err(ConsistencyCheckError::FalselyReachable(v, root));
        }
    }

    Ok(())
}
