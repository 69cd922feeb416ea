use arbitrary::{Arbitrary, Unstructured};

use crate::graph::Graph;

const MAX_VERTEX_COUNT: usize = 256;
const MAX_EDGE_COUNT: usize = 1024;

/// An arbitrary index which is mapped into the range of a concrete collection
/// only when used.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

impl<'a> Arbitrary<'a> for Graph {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTEX_COUNT)?;
        let edges = u.arbitrary::<Vec<(Index, Index)>>()?;

        let mut graph = Graph::new(vertex_count);

        for (v, w) in edges.into_iter().take(MAX_EDGE_COUNT) {
            if let (Some(v), Some(w)) = (v.get(vertex_count), w.get(vertex_count)) {
                graph
                    .add_edge(v, w)
                    .map_err(|_| arbitrary::Error::IncorrectFormat)?;
            }
        }

        Ok(graph)
    }
}
