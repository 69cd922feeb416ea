use crate::{
    graph::Graph,
    visit::{Dfs, DfsStep, Visitor},
};

use super::{Paths, NO_PARENT};

pub fn dfs(graph: &Graph, source: usize) -> Paths {
    let mut traversal = Dfs::new(graph);
    let mut parent = vec![NO_PARENT; graph.vertex_count()];

    for DfsStep { vertex, parent: from } in traversal.start(source).into_iter(graph) {
        if let Some(from) = from {
            parent[vertex] = from;
        }
    }

    let marked = traversal.into_visited();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        source,
        reached = marked.count_ones(..),
        "computed depth-first paths"
    );

    Paths {
        source,
        marked,
        parent,
    }
}
