//! Parse tree produced by `dot_grammar.lalrpop`, before semantic validation.

#[derive(Debug, Clone, PartialEq)]
pub(super) enum EdgeOp {
    Directed,
    Undirected,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Statement {
    /// `a -> b -> c [label="..."];`. `ops` pairs each edge operator with the byte offset it
    /// started at, so the semantic pass can point at the right line when it rejects one.
    Chain {
        ids: Vec<String>,
        ops: Vec<(usize, EdgeOp)>,
        attrs: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Document {
    pub(super) is_digraph: bool,
    pub(super) statements: Vec<Statement>,
}
