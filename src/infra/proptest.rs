use proptest::{collection::vec, strategy::Strategy};

use crate::graph::Graph;

/// Strategy generating graphs with `1..=max_vertex_count` vertices and up to
/// `max_edge_count` edges, including self-loops and parallel edges.
pub fn graph_strategy(
    max_vertex_count: usize,
    max_edge_count: usize,
) -> impl Strategy<Value = Graph> {
    (1..=max_vertex_count.max(1)).prop_flat_map(move |vertex_count| {
        vec((0..vertex_count, 0..vertex_count), 0..=max_edge_count).prop_map(move |edges| {
            let mut graph = Graph::new(vertex_count);
            graph
                .extend_with_edges(edges)
                .expect("endpoints are generated within the vertex range");
            graph
        })
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::testing::check_consistency;

    use super::*;

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_graph_strategy_bounds(graph in graph_strategy(16, 32)) {
            prop_assert!(graph.vertex_count() >= 1);
            prop_assert!(graph.vertex_count() <= 16);
            prop_assert!(graph.edge_count() <= 32);
            prop_assert!(check_consistency(&graph).is_ok());
        }
    }
}
