//! Error types for graph construction and rendering.

use std::fmt::Debug;

/// Errors produced while validating configuration or rendering a graph.
#[derive(Debug, thiserror::Error)]
pub enum Error<N: Debug> {
    #[error("invalid render configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("cyclic input detected at node {node:?}")]
    CyclicInput { node: N },
}

pub type Result<T, N> = std::result::Result<T, Error<N>>;
