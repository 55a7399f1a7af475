//! Cursor builder: materializes path segments between each pair of adjacent height levels.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::plan::Plan;

/// One path segment: `node`'s path currently sits at column `current` and must reach column
/// `target` by the end of the relaxation loop for this level pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<N> {
    pub node: N,
    pub current: i64,
    pub target: i64,
}

impl<N: Clone> Cursor<N> {
    pub fn shifted(&self, delta: i64) -> Cursor<N> {
        Cursor {
            node: self.node.clone(),
            current: self.current + delta,
            target: self.target,
        }
    }
}

/// Cursors at one level, split by whether the path terminates at a defined node one level down
/// (`nodes`) or continues on as passing-by (`paths`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursors<N> {
    pub nodes: Vec<Cursor<N>>,
    pub paths: Vec<Cursor<N>>,
}

/// Build cursors for every height, from `h_max` down to `0`.
pub fn make_cursors<N: Ord + Clone + Debug>(
    graph: &Graph<N>,
    plan: &BTreeMap<u32, Plan<N>>,
) -> BTreeMap<u32, Cursors<N>> {
    let mut out: BTreeMap<u32, Cursors<N>> = BTreeMap::new();

    let Some(&h_max) = plan.keys().max() else {
        return out;
    };

    let mut h = h_max;
    loop {
        let cursors = if h == 0 || !plan.contains_key(&(h - 1)) {
            trivial_cursors(&plan[&h])
        } else {
            make_cursor(graph, &plan[&h], &plan[&h - 1])
        };
        out.insert(h, cursors);

        if h == 0 {
            break;
        }
        h -= 1;
    }

    out
}

fn trivial_cursors<N: Clone>(level: &Plan<N>) -> Cursors<N> {
    let nodes = level
        .defined
        .iter()
        .enumerate()
        .map(|(i, node)| Cursor {
            node: node.clone(),
            current: (i as i64) * 2,
            target: (i as i64) * 2,
        })
        .collect();

    let n = level.defined.len();
    let paths = level
        .passing_by
        .iter()
        .enumerate()
        .map(|(j, node)| {
            let col = ((n + j) as i64) * 2;
            Cursor {
                node: node.clone(),
                current: col,
                target: col,
            }
        })
        .collect();

    Cursors { nodes, paths }
}

fn make_cursor<N: Ord + Clone + Debug>(graph: &Graph<N>, curr: &Plan<N>, next: &Plan<N>) -> Cursors<N> {
    let mut node_to_node: Vec<Cursor<N>> = Vec::new();
    let mut node_to_passby: Vec<Cursor<N>> = Vec::new();
    let mut passby_to_node: Vec<Cursor<N>> = Vec::new();
    let mut passby_to_passby: Vec<Cursor<N>> = Vec::new();

    // node -> node, node -> passby: defined nodes at the current level.
    for (i, node) in curr.defined.iter().enumerate() {
        let i = i as i64;
        for neighbor in graph.edges().get(node).into_iter().flatten() {
            if let Some(j) = next.defined.iter().position(|m| m == neighbor) {
                node_to_node.push(Cursor {
                    node: node.clone(),
                    current: i * 2,
                    target: (j as i64) * 2,
                });
            }
        }
        if let Some(j) = next.passing_by.iter().position(|m| m == node) {
            node_to_passby.push(Cursor {
                node: node.clone(),
                current: i * 2,
                target: ((next.defined.len() + j) as i64) * 2,
            });
        }
    }

    // passby -> node, passby -> passby: nodes merely passing through the current level.
    let base = curr.defined.len();
    for (k, node) in curr.passing_by.iter().enumerate() {
        let i = (base + k) as i64;
        for neighbor in graph.edges().get(node).into_iter().flatten() {
            if let Some(j) = next.defined.iter().position(|m| m == neighbor) {
                passby_to_node.push(Cursor {
                    node: node.clone(),
                    current: i * 2,
                    target: (j as i64) * 2,
                });
            }
        }
        if let Some(j) = next.passing_by.iter().position(|m| m == node) {
            passby_to_passby.push(Cursor {
                node: node.clone(),
                current: i * 2,
                target: ((next.defined.len() + j) as i64) * 2,
            });
        }
    }

    let mut nodes = node_to_node;
    nodes.extend(node_to_passby);

    let mut paths = passby_to_node;
    paths.extend(passby_to_passby);

    Cursors { nodes, paths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn graph_from(pairs: &[(i32, &[i32])]) -> Graph<i32> {
        let edges: BTreeMap<i32, BTreeSet<i32>> = pairs
            .iter()
            .map(|(k, vs)| (*k, vs.iter().copied().collect()))
            .collect();
        Graph::new(BTreeMap::new(), edges)
    }

    #[test]
    fn two_leaves_sharing_a_root() {
        let g = graph_from(&[(0, &[2]), (1, &[2]), (2, &[])]);
        let heights = g.height().unwrap();
        let groups = g.height_groups().unwrap();
        let plan = crate::plan::make_plan(&g, &groups, &heights);
        let cursors = make_cursors(&g, &plan);

        assert_eq!(
            cursors[&1].nodes,
            vec![
                Cursor { node: 0, current: 0, target: 0 },
                Cursor { node: 1, current: 2, target: 0 },
            ]
        );
        assert_eq!(
            cursors[&0].nodes,
            vec![Cursor { node: 2, current: 0, target: 0 }]
        );
    }

    #[test]
    fn skip_edge_builds_passby_cursors() {
        let g = graph_from(&[(0, &[1, 3]), (1, &[2]), (2, &[3]), (3, &[])]);
        let heights = g.height().unwrap();
        let groups = g.height_groups().unwrap();
        let plan = crate::plan::make_plan(&g, &groups, &heights);
        let cursors = make_cursors(&g, &plan);

        assert_eq!(
            cursors[&3].nodes,
            vec![
                Cursor { node: 0, current: 0, target: 0 },
                Cursor { node: 0, current: 0, target: 2 },
            ]
        );
        assert_eq!(cursors[&2].paths, vec![Cursor { node: 0, current: 2, target: 2 }]);
        assert_eq!(cursors[&1].paths, vec![Cursor { node: 0, current: 2, target: 0 }]);
    }
}
