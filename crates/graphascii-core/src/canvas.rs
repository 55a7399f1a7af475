//! Canvas drawer: turns cursors into rows of symbols via relaxation and conflict merging.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::cursor::{Cursor, Cursors};
use crate::graph::Graph;
use crate::symbol::Symbol;

/// Draw the full canvas: one node row followed by zero or more path rows, per height level, top
/// to bottom. The row emitted after the bottommost level is always a vestigial hold-only row
/// (there is no level below it to connect to) and is dropped.
pub fn make_canvas<N: Ord + Clone + Debug>(
    graph: &Graph<N>,
    cursors_by_height: &BTreeMap<u32, Cursors<N>>,
) -> Vec<Vec<Symbol>> {
    let mut canvas: Vec<Vec<Symbol>> = Vec::new();

    let Some(&h_max) = cursors_by_height.keys().max() else {
        return canvas;
    };

    let mut h = h_max;
    loop {
        let cursors = &cursors_by_height[&h];
        tracing::trace!(height = h, "drawing node row");
        canvas.push(draw_node_row(graph, cursors));

        let combined: Vec<Cursor<N>> = cursors
            .nodes
            .iter()
            .cloned()
            .chain(cursors.paths.iter().cloned())
            .collect();
        canvas.extend(draw_path_rows(combined));

        if h == 0 {
            break;
        }
        h -= 1;
    }

    canvas.pop();
    canvas
}

fn draw_node_row<N: Ord + Clone + Debug>(graph: &Graph<N>, cursors: &Cursors<N>) -> Vec<Symbol> {
    let mut symbols: BTreeMap<i64, Symbol> = BTreeMap::new();
    for cursor in &cursors.paths {
        symbols.insert(cursor.current, Symbol::Hold);
    }
    // Nodes are written last, so a column carrying both a hold and a node keeps the node.
    for cursor in &cursors.nodes {
        symbols.insert(
            cursor.current,
            Symbol::Node(graph.get_node_label(&cursor.node).to_string()),
        );
    }
    densify(symbols)
}

fn draw_path_rows<N: Clone + PartialEq>(cursors: Vec<Cursor<N>>) -> Vec<Vec<Symbol>> {
    make_symbols(cursors)
        .into_iter()
        .map(|row| densify(merge_row(row)))
        .collect()
}

fn densify(symbols: BTreeMap<i64, Symbol>) -> Vec<Symbol> {
    let Some(&max_col) = symbols.keys().max() else {
        return Vec::new();
    };
    (0..=max_col)
        .map(|c| symbols.get(&c).cloned().unwrap_or(Symbol::Space))
        .collect()
}

#[derive(Debug, Clone)]
struct Step<N> {
    cursor: Cursor<N>,
    symbols: Vec<(i64, Symbol)>,
}

impl<N: Clone> Step<N> {
    fn has_position(&self, pos: i64) -> bool {
        self.symbols.iter().any(|(p, _)| *p == pos)
    }
}

/// Run the slide-left relaxation to a fixed point, emitting one sparse symbol row per pass. As
/// in the ported source, a level whose cursors are already all settled still emits exactly one
/// row (a straight hold, or nothing further to move) before the loop recognizes convergence --
/// that single row is what draws the `|` connectors between aligned nodes, and is the source of
/// the one vestigial row `make_canvas` trims off the very end of the whole diagram.
fn make_symbols<N: Clone + PartialEq>(mut cursors: Vec<Cursor<N>>) -> Vec<Vec<(i64, Symbol)>> {
    let mut canvas: Vec<Vec<(i64, Symbol)>> = Vec::new();

    loop {
        let settled = cursors.iter().all(|c| c.current == c.target);
        if settled && !canvas.is_empty() {
            break;
        }

        let steps = relax(move_cursors(&cursors));
        cursors = steps.iter().map(|s| s.cursor.clone()).collect();
        let row: Vec<(i64, Symbol)> = steps.into_iter().flat_map(|s| s.symbols).collect();
        canvas.push(row);
    }

    canvas
}

fn move_cursors<N: Clone>(cursors: &[Cursor<N>]) -> Vec<Step<N>> {
    cursors
        .iter()
        .map(|cursor| {
            if cursor.current < cursor.target {
                Step {
                    cursor: cursor.shifted(2),
                    symbols: vec![(cursor.current + 1, Symbol::Right)],
                }
            } else if cursor.current > cursor.target {
                Step {
                    cursor: cursor.shifted(-2),
                    symbols: vec![(cursor.current - 1, Symbol::Left)],
                }
            } else {
                Step {
                    cursor: cursor.clone(),
                    symbols: vec![(cursor.current, Symbol::Hold)],
                }
            }
        })
        .collect()
}

fn relax<N: Clone + PartialEq>(mut steps: Vec<Step<N>>) -> Vec<Step<N>> {
    let mut next = slide_left(&steps);
    while !steps_equal(&steps, &next) {
        steps = next;
        next = slide_left(&steps);
    }
    next
}

fn slide_left<N: Clone>(steps: &[Step<N>]) -> Vec<Step<N>> {
    steps
        .iter()
        .map(|step| {
            let current = step.cursor.current;
            if current <= step.cursor.target {
                return step.clone();
            }

            let step_curr = find_step(steps, current);
            let step_left = find_step(steps, current - 1);

            match (step_curr, step_left) {
                (None, None) => {
                    let mut moved = step.clone();
                    moved.cursor = moved.cursor.shifted(-2);
                    moved.symbols.push((current - 1, Symbol::LeftMove));
                    moved.symbols.push((current, Symbol::LeftMove));
                    moved
                }
                (None, Some(left)) => {
                    if left.cursor.target != step.cursor.target {
                        step.clone()
                    } else {
                        let mut moved = step.clone();
                        moved.cursor = moved.cursor.shifted(-2);
                        moved.symbols.push((current, Symbol::LeftMove));
                        moved
                    }
                }
                (Some(curr), _) => {
                    if curr.cursor.target != step.cursor.target {
                        step.clone()
                    } else {
                        let mut moved = step.clone();
                        moved.cursor = moved.cursor.shifted(-2);
                        moved
                    }
                }
            }
        })
        .collect()
}

fn find_step<N: Clone>(steps: &[Step<N>], position: i64) -> Option<&Step<N>> {
    steps.iter().find(|step| step.has_position(position))
}

fn steps_equal<N: PartialEq>(a: &[Step<N>], b: &[Step<N>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(sa, sb)| {
        sa.cursor.node == sb.cursor.node
            && sa.cursor.current == sb.cursor.current
            && sa.cursor.target == sb.cursor.target
            && symbols_set_eq(&sa.symbols, &sb.symbols)
    })
}

fn symbols_set_eq(a: &[(i64, Symbol)], b: &[(i64, Symbol)]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    for item in a {
        let Some(slot) = b
            .iter()
            .enumerate()
            .find(|(i, other)| !used[*i] && *other == item)
            .map(|(i, _)| i)
        else {
            return false;
        };
        used[slot] = true;
    }
    true
}

fn merge_row(symbols: Vec<(i64, Symbol)>) -> BTreeMap<i64, Symbol> {
    let mut groups: BTreeMap<i64, Vec<Symbol>> = BTreeMap::new();
    for (pos, sym) in symbols {
        groups.entry(pos).or_default().push(sym);
    }
    groups
        .into_iter()
        .map(|(pos, syms)| {
            let merged = syms
                .into_iter()
                .reduce(resolve_conflict)
                .expect("group_by never produces an empty group");
            (pos, merged)
        })
        .collect()
}

/// Resolve two symbols landing on the same column. Commutative except for the documented
/// fallback on same-direction diagonal collisions (`Left+Left`, `Right+Right`), which keep the
/// first operand -- not exercised by any known fixture, preserved rather than guessed at.
fn resolve_conflict(a: Symbol, b: Symbol) -> Symbol {
    if matches!(a, Symbol::Node(_)) {
        return a;
    }
    if matches!(b, Symbol::Node(_)) {
        return b;
    }
    if matches!(b, Symbol::Space) {
        return a;
    }
    if matches!(a, Symbol::Space) {
        return b;
    }
    if matches!(a, Symbol::Left) && matches!(b, Symbol::Right) {
        return Symbol::Cross;
    }
    if matches!(a, Symbol::Right) && matches!(b, Symbol::Left) {
        return Symbol::Cross;
    }
    if matches!(a, Symbol::Cross) && matches!(b, Symbol::Left | Symbol::Right) {
        return Symbol::Cross;
    }
    if matches!(b, Symbol::Cross) && matches!(a, Symbol::Left | Symbol::Right) {
        return Symbol::Cross;
    }
    a
}
