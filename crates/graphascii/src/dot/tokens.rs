//! `logos`-derived token stream feeding the `lalrpop` grammar in `dot_grammar.lalrpop`.

use logos::Logos;

/// Carries the byte offset of the failing position so the outer parser can report a line number.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct LexError {
    pub(crate) message: String,
    pub(crate) offset: usize,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub(crate) enum Tok {
    #[token("strict")]
    StrictKw,
    #[token("graph")]
    GraphKw,
    #[token("digraph")]
    DigraphKw,
    #[token("subgraph")]
    SubgraphKw,
    #[token("->")]
    Arrow,
    #[token("--")]
    DashDash,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("=")]
    Equals,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    /// HTML-like label (`<...>`, depth-counted). Never accepted by the grammar; kept as its own
    /// variant so rejecting it reads as "unsupported construct", not "lex failure".
    #[token("<", lex_html)]
    Html,
    #[regex(r#""([^"\\]|\\.)*""#, unquote)]
    #[regex(r"[A-Za-z_][A-Za-z0-9_.]*", |lex| lex.slice().to_string())]
    Ident(String),
}

fn unquote(lex: &mut logos::Lexer<Tok>) -> String {
    let raw = lex.slice();
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn lex_html(lex: &mut logos::Lexer<Tok>) -> Result<(), LexError> {
    let rest = lex.remainder();
    let mut depth = 1i32;
    let mut end = 0usize;
    for (idx, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
        end = idx + c.len_utf8();
        if depth == 0 {
            break;
        }
    }
    if depth != 0 {
        return Err(LexError {
            message: "unterminated HTML-like label".to_string(),
            offset: 0,
        });
    }
    lex.bump(end);
    Ok(())
}

/// Adapts a `logos` lexer to the `(start, token, end)` triples `lalrpop`'s external-lexer
/// interface expects.
pub(crate) struct Lexer<'input> {
    inner: logos::Lexer<'input, Tok>,
}

impl<'input> Lexer<'input> {
    pub(crate) fn new(input: &'input str) -> Self {
        Lexer { inner: Tok::lexer(input) }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Result<(usize, Tok, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = self.inner.span();
        Some(token.map(|tok| (span.start, tok, span.end)).map_err(|mut err| {
            err.offset = span.start;
            err
        }))
    }
}
