//! Find [connected] components in a graph.
//!
//! See available parameters [here](ConnectedComponentsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use undigraph::{algo::ConnectedComponents, Graph};
//!
//! let mut graph = Graph::new(6);
//! graph.extend_with_edges([(0, 3), (3, 4), (1, 2), (5, 5)])?;
//!
//! let components = ConnectedComponents::on(&graph).run();
//!
//! assert_eq!(components.len(), 3);
//! assert_eq!(
//!     components.iter().collect::<Vec<_>>(),
//!     vec![&[0, 3, 4][..], &[1, 2][..], &[5][..]]
//! );
//!
//! assert!(components.connected(0, 4));
//! assert!(!components.connected(0, 1));
//! # Ok::<(), undigraph::Error>(())
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Component_(graph_theory)

mod builder;
mod dfs;

pub use builder::ConnectedComponentsBuilder;

/// Connected components of a graph.
///
/// Components are ordered by their lowest vertex, which is also the first
/// vertex of the component. Vertices within a component are in depth-first
/// visitation order.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    components: Vec<Vec<usize>>,
    // Index of the component for each vertex.
    component_of: Vec<usize>,
}

impl ConnectedComponents {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Returns the index of the component containing `v`, or `None` if `v` is
    /// not a vertex of the graph.
    pub fn component_of(&self, v: usize) -> Option<usize> {
        self.component_of.get(v).copied()
    }

    /// Returns `true` if `x` and `y` are in the same component.
    ///
    /// Returns `false` if any of them is not a vertex of the graph.
    pub fn connected(&self, x: usize, y: usize) -> bool {
        match (self.component_of(x), self.component_of(y)) {
            (Some(cx), Some(cy)) => cx == cy,
            _ => false,
        }
    }

    /// Returns the component with the most vertices, the earliest one on ties.
    pub fn largest(&self) -> Option<&[usize]> {
        let mut largest: Option<&[usize]> = None;

        for component in self.iter() {
            if largest.map_or(true, |largest| component.len() > largest.len()) {
                largest = Some(component);
            }
        }

        largest
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Vec<usize>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [usize];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}

impl<'a> IntoIterator for &'a ConnectedComponents {
    type Item = &'a [usize];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
