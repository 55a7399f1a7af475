//! The ingestion contract adapters implement to hand the core engine a [`Graph`].

use graphascii_core::Graph;

/// A source of graph data that can be converted into a [`Graph`] for rendering.
///
/// This is the entire ingestion contract: the core crate never parses anything itself, so every
/// front-end (DOT, a build script's own in-memory model, ...) goes through this trait.
pub trait GraphSource<N: Ord + Clone> {
    type Error;

    fn into_graph(self) -> Result<Graph<N>, Self::Error>;
}
