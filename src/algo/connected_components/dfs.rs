use crate::{
    graph::Graph,
    visit::{Dfs, VisitSet, Visitor},
};

use super::ConnectedComponents;

pub fn dfs(graph: &Graph) -> ConnectedComponents {
    let mut traversal = Dfs::new(graph);
    let mut components = Vec::new();
    let mut component_of = vec![0; graph.vertex_count()];

    // Scanning in ascending order makes the root the lowest vertex of its
    // component.
    for root in graph.vertex_ids() {
        if traversal.visited().is_visited(root) {
            continue;
        }

        let index = components.len();
        let component = traversal
            .start(root)
            .into_iter(graph)
            .map(|step| {
                component_of[step.vertex] = index;
                step.vertex
            })
            .collect::<Vec<_>>();

        components.push(component);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "computed connected components"
    );

    ConnectedComponents {
        components,
        component_of,
    }
}
