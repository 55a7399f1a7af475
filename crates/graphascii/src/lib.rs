#![forbid(unsafe_code)]

//! Thin facade over [`graphascii_core`]: re-exports the rendering engine and layers optional,
//! feature-gated ingestion adapters on top of it. The engine itself never parses anything; this
//! crate is where external graph descriptions become a [`Graph`].

pub mod adapter;
pub mod error;

#[cfg(feature = "dot")]
pub mod dot;

pub use adapter::GraphSource;
pub use error::{AdapterError, Result};
pub use graphascii_core::{render, Error, Graph, RenderOptions, Spacing, Symbol};

#[cfg(feature = "dot")]
pub use dot::{parse as parse_dot, DotSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_source_round_trips_through_the_adapter_trait() {
        let graph = DotSource::new("digraph { a [label=\"A\"]; a -> b; }")
            .into_graph()
            .unwrap();
        let out = render(&graph, &RenderOptions::default()).unwrap();
        assert!(out.contains('o'));
    }
}
