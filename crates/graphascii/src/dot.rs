//! Reader for the small subset of Graphviz DOT needed to populate `(labels, edges)`.
//!
//! Tokenizing and grammar are split the way the rest of the workspace splits textual-format
//! parsing: [`logos`] produces the token stream (`dot::tokens`) and a `lalrpop` grammar
//! (`dot_grammar.lalrpop`) consumes it, producing a small parse tree (`dot::ast`) that a semantic
//! pass turns into a [`Graph<String>`]. That pass also checks the one construct the grammar can't
//! reject on its own: `--` edges inside a `digraph`.
//!
//! Subgraphs, ports (`a:n`), and HTML-like labels (`<...>`) are unsupported: the grammar has no
//! production that accepts them, so encountering one surfaces as an ordinary parse error via
//! [`AdapterError::DotParse`].

use std::collections::{BTreeMap, BTreeSet};

use graphascii_core::Graph;

mod ast;
mod errors;
mod tokens;

lalrpop_util::lalrpop_mod!(
    #[allow(clippy::all)]
    dot_grammar,
    "/dot_grammar.rs"
);

use crate::adapter::GraphSource;
use crate::error::AdapterError;
use ast::{Document, EdgeOp, Statement};

/// A DOT source string, ready to be turned into a [`Graph<String>`] via [`GraphSource`].
pub struct DotSource<'a> {
    pub text: &'a str,
}

impl<'a> DotSource<'a> {
    pub fn new(text: &'a str) -> Self {
        DotSource { text }
    }
}

impl<'a> GraphSource<String> for DotSource<'a> {
    type Error = AdapterError;

    fn into_graph(self) -> Result<Graph<String>, AdapterError> {
        parse(self.text)
    }
}

/// Parse a DOT document directly into a [`Graph<String>`].
pub fn parse(input: &str) -> Result<Graph<String>, AdapterError> {
    let document = dot_grammar::DotParser::new()
        .parse(tokens::Lexer::new(input))
        .map_err(|err| errors::describe(err, input))?;
    build_graph(document, input)
}

fn build_graph(document: Document, input: &str) -> Result<Graph<String>, AdapterError> {
    let mut labels: BTreeMap<String, String> = BTreeMap::new();
    let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for statement in document.statements {
        let Statement::Chain { ids, ops, attrs } = statement;
        for id in &ids {
            labels.entry(id.clone()).or_default();
        }

        for ((loc, op), pair) in ops.iter().zip(ids.windows(2)) {
            if document.is_digraph && matches!(op, EdgeOp::Undirected) {
                return Err(AdapterError::DotParse {
                    message: "undirected '--' edges are not supported in a digraph".to_string(),
                    line: input[..*loc].matches('\n').count() + 1,
                });
            }
            edges.entry(pair[0].clone()).or_default().insert(pair[1].clone());
        }

        if ids.len() == 1 {
            if let Some((_, value)) = attrs.iter().find(|(key, _)| key == "label") {
                labels.insert(ids[0].clone(), value.clone());
            }
        }
    }

    Ok(Graph::new(labels, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_digraph() {
        let g = parse("digraph { a -> b; }").unwrap();
        assert!(g.edges()[&"a".to_string()].contains(&"b".to_string()));
    }

    #[test]
    fn parses_node_labels_and_edge_chains() {
        let g = parse(r#"digraph { a [label="Alpha"]; a -> b -> c; }"#).unwrap();
        assert_eq!(g.get_node_label(&"a".to_string()), "Alpha");
        assert!(g.edges()[&"a".to_string()].contains(&"b".to_string()));
        assert!(g.edges()[&"b".to_string()].contains(&"c".to_string()));
    }

    #[test]
    fn strict_keyword_and_a_graph_name_are_accepted() {
        let g = parse("strict digraph G { a -> b; }").unwrap();
        assert!(g.edges()[&"a".to_string()].contains(&"b".to_string()));
    }

    #[test]
    fn skips_comments() {
        let g = parse("digraph { // a top comment\n a -> b; /* trailing */ }").unwrap();
        assert!(g.edges()[&"a".to_string()].contains(&"b".to_string()));
    }

    #[test]
    fn quoted_identifiers_with_escapes_round_trip() {
        let g = parse(r#"digraph { "a\"b" -> c; }"#).unwrap();
        assert!(g.edges()[&"a\"b".to_string()].contains(&"c".to_string()));
    }

    #[test]
    fn undirected_graph_accepts_dash_dash_edges() {
        let g = parse("graph { a -- b; }").unwrap();
        assert!(g.edges()[&"a".to_string()].contains(&"b".to_string()));
    }

    #[test]
    fn rejects_undirected_edges_in_a_digraph() {
        let err = parse("digraph { a -- b; }").unwrap_err();
        assert!(matches!(err, AdapterError::DotParse { .. }));
    }

    #[test]
    fn rejects_subgraphs() {
        let err = parse("digraph { subgraph cluster_0 { a; } }").unwrap_err();
        assert!(matches!(err, AdapterError::DotParse { .. }));
    }

    #[test]
    fn rejects_html_like_labels() {
        let err = parse("digraph { a [label=<<b>bold</b>>]; }").unwrap_err();
        assert!(matches!(err, AdapterError::DotParse { .. }));
    }

    #[test]
    fn rejects_ports() {
        let err = parse("digraph { a:n -> b; }").unwrap_err();
        assert!(matches!(err, AdapterError::DotParse { .. }));
    }

    #[test]
    fn multi_node_attribute_lists_do_not_relabel_every_node_in_the_chain() {
        let g = parse(r#"digraph { a -> b [color="red"]; }"#).unwrap();
        assert_eq!(g.get_node_label(&"a".to_string()), "");
        assert_eq!(g.get_node_label(&"b".to_string()), "");
    }
}
