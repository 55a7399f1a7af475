#![forbid(unsafe_code)]

//! ASCII-art rendering engine for directed acyclic graphs.
//!
//! `graphascii-core` turns a [`Graph`] into a multi-line ASCII diagram: nodes stacked by height
//! (longest path to a sink), edges drawn as diagonal/straight path segments, and labels printed
//! to the right of each row. Ingestion from external formats (DOT, etc.) lives in the `graphascii`
//! facade crate, which depends on this one; this crate never parses anything itself.

pub mod canvas;
pub mod cursor;
pub mod error;
pub mod graph;
pub mod plan;
pub mod printer;
pub mod string_util;
pub mod symbol;

pub use error::{Error, Result};
pub use graph::Graph;
pub use printer::{RenderOptions, Spacing};
pub use symbol::Symbol;

use std::fmt::Debug;

/// Render `graph` to its ASCII diagram form.
///
/// Empty graphs render as the empty string. A cycle anywhere in `graph` is reported as
/// [`Error::CyclicInput`] before any layout work begins.
pub fn render<N: Ord + Clone + Debug>(graph: &Graph<N>, options: &RenderOptions) -> Result<String, N> {
    options.validate::<N>()?;

    if graph.is_empty() {
        return Ok(String::new());
    }

    let heights = tracing::debug_span!("height").in_scope(|| graph.height())?;
    let height_groups = tracing::debug_span!("height_groups").in_scope(|| graph.height_groups())?;
    tracing::trace!(levels = height_groups.len(), "computed height groups");

    let plan = tracing::debug_span!("plan")
        .in_scope(|| plan::make_plan(graph, &height_groups, &heights));

    let cursors =
        tracing::debug_span!("cursors").in_scope(|| cursor::make_cursors(graph, &plan));

    let rendered_canvas =
        tracing::debug_span!("canvas").in_scope(|| canvas::make_canvas(graph, &cursors));

    let output = tracing::debug_span!("print")
        .in_scope(|| printer::print_canvas(&rendered_canvas, options));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn graph_from(pairs: &[(i32, &[i32])]) -> Graph<i32> {
        let edges: BTreeMap<i32, BTreeSet<i32>> = pairs
            .iter()
            .map(|(k, vs)| (*k, vs.iter().copied().collect()))
            .collect();
        Graph::new(BTreeMap::new(), edges)
    }

    #[test]
    fn empty_graph_renders_to_empty_string() {
        let g: Graph<i32> = Graph::new(BTreeMap::new(), BTreeMap::new());
        assert_eq!(render(&g, &RenderOptions::default()).unwrap(), "");
    }

    #[test]
    fn single_node_renders_one_row() {
        let mut labels = BTreeMap::new();
        labels.insert(0, "root".to_string());
        let g = Graph::new(labels, BTreeMap::new());
        let out = render(&g, &RenderOptions::default()).unwrap();
        assert!(out.starts_with('o'));
        assert!(out.contains("root"));
    }

    #[test]
    fn cyclic_graph_is_rejected_before_layout() {
        let g = graph_from(&[(0, &[1]), (1, &[0])]);
        assert!(matches!(
            render(&g, &RenderOptions::default()),
            Err(Error::CyclicInput { .. })
        ));
    }

    #[test]
    fn two_leaves_sharing_a_root_renders_a_v_shape() {
        let mut labels = BTreeMap::new();
        labels.insert(0, "a".to_string());
        labels.insert(1, "b".to_string());
        labels.insert(2, "c".to_string());
        let edges = graph_from(&[(0, &[2]), (1, &[2]), (2, &[])]).edges().clone();
        let g = Graph::new(labels, edges);

        let out = render(&g, &RenderOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('o') && lines[0].contains('o'));
        assert!(lines[1].contains('x') || lines[1].contains('/') || lines[1].contains('\\'));
        assert!(lines[2].trim_start().starts_with('o'));
    }

    #[test]
    fn invalid_config_is_rejected_before_any_work() {
        let g = graph_from(&[(0, &[1]), (1, &[])]);
        let options = RenderOptions {
            spaces: usize::MAX,
            ..RenderOptions::default()
        };
        assert!(matches!(render(&g, &options), Err(Error::InvalidConfig { .. })));
    }
}
