use thiserror::Error;

/// The error type for graph construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A graph cannot have a negative number of vertices.
    #[error("invalid vertex count {0}")]
    InvalidSize(i64),

    /// A vertex id outside of `0..vertex_count`.
    #[error("vertex {index} is out of range for a graph with {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    /// A statistic that is undefined for a graph without vertices.
    #[error("the graph has no vertices")]
    EmptyGraph,
}
