#![allow(dead_code)]

use fastrand::Rng;
use petgraph::graph::{NodeIndex, UnGraph};
use undigraph::Graph;

pub const RANDOM_SEED: u64 = 0x5eed_0f_9a_b1e5;

/// Iterator of random pairs `(v, w)` with `w < v < vertex_count`, each pair
/// included with probability `p`.
///
/// Instead of rolling a die for every pair, the gap to the next included pair
/// is sampled from the geometric distribution.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n { Some((*v, *w)) } else { None }
    }
}

pub fn undigraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph {
    let mut graph = Graph::new(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((v, w)) = edges.next_edge(rng) {
        graph.add_edge(v, w).unwrap();
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((v, w)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }

    graph
}
