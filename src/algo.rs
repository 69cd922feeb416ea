//! Traversal-based algorithms on [`Graph`](crate::Graph).

pub mod connected_components;
pub mod paths;

pub use connected_components::ConnectedComponents;
pub use paths::{is_path_between, path_between, Paths};
