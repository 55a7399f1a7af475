//! Planner: partitions each height level into nodes defined there and nodes merely passing by.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::graph::Graph;

/// At a given height, the nodes that live there (`defined`) and the nodes whose path must
/// traverse this level on the way to a deeper descendant (`passing_by`).
///
/// ```text
/// Height  DAG    Label     Defined   Passing-by
/// 2       o      L0        L0        -
///         |\
/// 1       o |    L1        L1        L0
///         |/
/// 0       o      L2        L2        -
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan<N> {
    pub defined: Vec<N>,
    pub passing_by: Vec<N>,
}

/// Build the per-height plan for every height in `height_groups`.
///
/// `heights` is the full node -> height map (as computed once by [`Graph::height`]); the planner
/// only ever needs to know whether a neighbor's height is below the level currently being
/// walked, so the map is passed in rather than recomputed.
pub fn make_plan<N: Ord + Clone + Debug>(
    graph: &Graph<N>,
    height_groups: &BTreeMap<u32, Vec<N>>,
    heights: &BTreeMap<N, u32>,
) -> BTreeMap<u32, Plan<N>> {
    let mut plan: BTreeMap<u32, Plan<N>> = height_groups
        .iter()
        .map(|(&h, nodes)| {
            (
                h,
                Plan {
                    defined: nodes.clone(),
                    passing_by: Vec::new(),
                },
            )
        })
        .collect();

    let Some(&h_max) = height_groups.keys().max() else {
        return plan;
    };

    let mut h = h_max;
    while h >= 2 {
        compute_passing_by(graph, heights, h, &mut plan);
        h -= 1;
    }

    plan
}

fn compute_passing_by<N: Ord + Clone + Debug>(
    graph: &Graph<N>,
    heights: &BTreeMap<N, u32>,
    h: u32,
    plan: &mut BTreeMap<u32, Plan<N>>,
) {
    if !(plan.contains_key(&h) && plan.contains_key(&(h - 1))) {
        return;
    }

    let candidates: Vec<N> = {
        let current = &plan[&h];
        current
            .defined
            .iter()
            .chain(current.passing_by.iter())
            .cloned()
            .collect()
    };

    let mut skips: Vec<N> = Vec::new();
    for node in candidates {
        let next_defined = &plan[&(h - 1)].defined;
        let skips_next_level = graph
            .edges()
            .get(&node)
            .into_iter()
            .flatten()
            .any(|neighbor| {
                let neighbor_height = heights.get(neighbor).copied().unwrap_or(0);
                neighbor_height < h && !next_defined.contains(neighbor)
            });
        if skips_next_level {
            skips.push(node);
        }
    }

    plan.get_mut(&(h - 1)).unwrap().passing_by.extend(skips);
}
