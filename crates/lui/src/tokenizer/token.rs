//! Token variants produced by the scanner.
//!
//! Tokens are immutable once emitted; the scanner only ever reads back
//! over prior output to classify bare words, it never rewrites a token.

use std::fmt;

/// Whether a comment is stripped or rendered into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `// text` — dropped by the parser.
    Private,
    /// `//* text` — emitted as a CSS comment.
    Public,
}

/// Which side of a layer span a marker closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerEdge {
    Start,
    End,
}

impl fmt::Display for LayerEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerEdge::Start => write!(f, "START"),
            LayerEdge::End => write!(f, "END"),
        }
    }
}

/// A literal value: bare integers stay numeric, everything else
/// (unit-suffixed, fractional, decimal, words, colors) is text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Number(i64),
    Text(String),
}

impl Literal {
    pub fn text(s: impl Into<String>) -> Self {
        Literal::Text(s.into())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One scanned token. Each variant carries exactly the fields meaningful
/// to it, so illegal combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A statement keyword (`ADD`, `VAR`, ...).
    Keyword(String),
    /// A recognized base property name.
    Property(String),
    /// A property-expansion suffix (`$top`, `$all`, ...).
    Identifier(String),
    /// A literal value, possibly already unit-suffixed.
    Value(Literal),
    /// A standalone unit token (currently only `%`).
    ValueType(String),
    /// A variable-declaration name (the word after `VAR`).
    Variable(String),
    /// A `{name}` reference, with an optional unit override.
    VariableRef { name: String, unit: Option<String> },
    /// The literal right-hand side of an `@` media condition.
    MediaValue(String),
    /// An `@{name}` media condition backed by a variable.
    MediaVariableRef(String),
    /// A recognized pseudo-class fragment, without the leading colon.
    PseudoClass(String),
    /// A line comment.
    Comment { visibility: Visibility, text: String },
    /// Synthetic per-file boundary inserted by the import resolver.
    LayerMarker { name: String, edge: LayerEdge },
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// End of a logical line.
    Newline,
    /// A character the scanner cannot classify. Kept in the stream
    /// rather than failing the scan.
    Unknown(char),
}
