//! General purpose containers.

pub mod queue;

pub use queue::Queue;
