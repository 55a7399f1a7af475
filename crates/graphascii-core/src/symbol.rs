//! Symbol definitions: the glyph alphabet the canvas drawer emits.

/// A single unit of rendered output. Only the [`Symbol::Node`] variant carries a label.
///
/// Pattern-match on this directly; no `is_node`/`is_cross` helpers are exposed, since those are
/// not part of the contract (they'd just shadow the match arms callers already need to write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A node glyph, carrying that node's label (empty string if the node has none).
    Node(String),
    /// A straight vertical hold: a path continuing unchanged through this row.
    Hold,
    /// A path stepping one column left on its way down.
    Left,
    /// A path stepping one column right on its way down.
    Right,
    /// A horizontal left move consumed by slide-left relaxation.
    LeftMove,
    /// Reserved: a horizontal right move. No code path currently constructs this; kept so a
    /// future right-ward relaxation pass has a home.
    RightMove,
    /// Two diagonal paths intersecting in the same column.
    Cross,
    /// Blank space.
    Space,
}

impl Symbol {
    /// The single ASCII character used to render this symbol.
    pub fn to_char(&self) -> char {
        match self {
            Symbol::Node(_) => 'o',
            Symbol::Hold => '|',
            Symbol::Left => '/',
            Symbol::Right => '\\',
            Symbol::LeftMove => '_',
            Symbol::RightMove => '_',
            Symbol::Cross => 'x',
            Symbol::Space => ' ',
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Symbol::Node(label) => Some(label.as_str()),
            _ => None,
        }
    }
}
