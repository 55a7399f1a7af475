//! Graph model: nodes, labels, edges, and the height-based ordering derived from them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::error::Error;

/// A directed acyclic graph used exclusively for rendering.
///
/// `labels` maps every known node to its label string; `edges` maps a node to the set of nodes
/// it has a directed edge toward. Both are ordered containers so that iteration order depends
/// only on `N`'s [`Ord`] implementation, never on construction order or hashing -- this is what
/// makes [`Graph::height_groups`] reproducible for any two equivalent inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: Ord + Clone> {
    labels: BTreeMap<N, String>,
    edges: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Ord + Clone + Debug> Graph<N> {
    /// Build a graph from labels and edges, registering any edge endpoint missing from `labels`
    /// with an empty-string label. This is a compatibility concession for ingestion adapters
    /// that emit edges before nodes.
    pub fn new(mut labels: BTreeMap<N, String>, edges: BTreeMap<N, BTreeSet<N>>) -> Self {
        for (src, dsts) in &edges {
            labels.entry(src.clone()).or_default();
            for dst in dsts {
                labels.entry(dst.clone()).or_default();
            }
        }
        Graph { labels, edges }
    }

    pub fn labels(&self) -> &BTreeMap<N, String> {
        &self.labels
    }

    pub fn edges(&self) -> &BTreeMap<N, BTreeSet<N>> {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get_node_label(&self, node: &N) -> &str {
        self.labels.get(node).map(String::as_str).unwrap_or("")
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.edges.get(node).into_iter().flatten()
    }

    /// Return a new graph over the same node set with every edge reversed.
    pub fn reverse(&self) -> Graph<N> {
        let mut edges: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
        for (src, dsts) in &self.edges {
            for dst in dsts {
                edges.entry(dst.clone()).or_default().insert(src.clone());
            }
        }
        Graph {
            labels: self.labels.clone(),
            edges,
        }
    }

    /// Compute each node's height: the length of the longest directed path starting at it.
    ///
    /// Uses an explicit iterative post-order traversal (rather than naive recursion) so deep
    /// chains do not exhaust the call stack, and so a node revisited while still on the active
    /// traversal stack can be reported as [`Error::CyclicInput`] instead of looping forever.
    pub fn height(&self) -> Result<BTreeMap<N, u32>, Error<N>> {
        let mut memo: BTreeMap<N, u32> = BTreeMap::new();

        let roots: Vec<N> = self.labels.keys().cloned().collect();
        for root in roots {
            if memo.contains_key(&root) {
                continue;
            }
            self.height_from(root, &mut memo)?;
        }

        Ok(memo)
    }

    fn height_from(&self, start: N, memo: &mut BTreeMap<N, u32>) -> Result<(), Error<N>> {
        struct Frame<N> {
            node: N,
            neighbors: Vec<N>,
            idx: usize,
            best: u32,
        }

        let mut on_stack: BTreeSet<N> = BTreeSet::new();
        let mut stack: Vec<Frame<N>> = Vec::new();

        on_stack.insert(start.clone());
        stack.push(Frame {
            neighbors: self.neighbors(&start).cloned().collect(),
            node: start,
            idx: 0,
            best: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if frame.idx >= frame.neighbors.len() {
                let done = stack.pop().expect("frame just borrowed from this stack");
                on_stack.remove(&done.node);
                memo.insert(done.node, done.best);
                if let Some(parent) = stack.last_mut() {
                    parent.best = parent.best.max(1 + done.best);
                    parent.idx += 1;
                }
                continue;
            }

            let next = frame.neighbors[frame.idx].clone();
            if let Some(&h) = memo.get(&next) {
                frame.best = frame.best.max(1 + h);
                frame.idx += 1;
                continue;
            }
            if on_stack.contains(&next) {
                return Err(Error::CyclicInput { node: next });
            }

            on_stack.insert(next.clone());
            stack.push(Frame {
                neighbors: self.neighbors(&next).cloned().collect(),
                node: next,
                idx: 0,
                best: 0,
            });
        }

        Ok(())
    }

    /// Group nodes by height, each group sorted by `(-(h(n) + h_rev(n)), label(n))` so that
    /// "central" nodes (long descendants and long ancestors) sort toward column 0 and ties break
    /// on label text.
    pub fn height_groups(&self) -> Result<BTreeMap<u32, Vec<N>>, Error<N>> {
        let heights = self.height()?;
        let reverse_heights = self.reverse().height()?;

        let mut groups: BTreeMap<u32, Vec<N>> = BTreeMap::new();
        for (node, &h) in &heights {
            groups.entry(h).or_default().push(node.clone());
        }

        for group in groups.values_mut() {
            group.sort_by(|a, b| {
                let score_a = heights[a] + reverse_heights.get(a).copied().unwrap_or(0);
                let score_b = heights[b] + reverse_heights.get(b).copied().unwrap_or(0);
                score_b
                    .cmp(&score_a)
                    .then_with(|| self.get_node_label(a).cmp(self.get_node_label(b)))
            });
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_of(pairs: &[(i32, &[i32])]) -> BTreeMap<i32, BTreeSet<i32>> {
        pairs
            .iter()
            .map(|(k, vs)| (*k, vs.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn leaf_has_height_zero() {
        let g: Graph<i32> = Graph::new(BTreeMap::new(), edges_of(&[(0, &[1]), (1, &[])]));
        let h = g.height().unwrap();
        assert_eq!(h[&1], 0);
        assert_eq!(h[&0], 1);
    }

    #[test]
    fn self_loop_is_cyclic() {
        let g: Graph<i32> = Graph::new(BTreeMap::new(), edges_of(&[(0, &[0])]));
        assert!(matches!(g.height(), Err(Error::CyclicInput { node: 0 })));
    }

    #[test]
    fn missing_endpoints_get_empty_labels() {
        let g: Graph<i32> = Graph::new(BTreeMap::new(), edges_of(&[(0, &[1])]));
        assert_eq!(g.get_node_label(&0), "");
        assert_eq!(g.get_node_label(&1), "");
    }

    #[test]
    fn height_groups_sorts_central_nodes_first() {
        // 0 -> 2, 1 -> 2: both leaves at height 1, node 2 at height 0.
        let g: Graph<i32> = Graph::new(BTreeMap::new(), edges_of(&[(0, &[2]), (1, &[2]), (2, &[])]));
        let groups = g.height_groups().unwrap();
        assert_eq!(groups[&0], vec![2]);
        assert_eq!(groups[&1], vec![0, 1]);
    }
}
