//! Undirected graphs in adjacency list representation, with depth-first search
//! based reachability, path finding and connected components.
//!
//! # Examples
//!
//! ```
//! use undigraph::{
//!     algo::{is_path_between, ConnectedComponents, Paths},
//!     Graph,
//! };
//!
//! let graph = "6\n4\n0 1\n1 2\n3 4\n4 5\n".parse::<Graph>()?;
//!
//! let paths = Paths::on(&graph).run(0)?;
//! assert_eq!(paths.path_to(2)?, Some(vec![0, 1, 2]));
//! assert!(!is_path_between(&graph, 0, 5)?);
//!
//! let components = ConnectedComponents::on(&graph).run();
//! assert_eq!(components.len(), 2);
//! assert!(components.connected(3, 5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algo;
pub mod collections;
pub mod error;
pub mod graph;
pub mod infra;
pub mod load;
pub mod visit;

#[doc(inline)]
pub use self::{error::Error, graph::Graph, load::LoadError};
