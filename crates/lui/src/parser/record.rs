//! Parser output records.

use crate::tokenizer::LayerEdge;

/// One unit of parser output, consumed in order by the CSS generator.
///
/// The variants are closed: a layer record carries exactly a name and an
/// edge, so malformed shapes cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A public comment, rendered as `/* text */`.
    Comment(String),
    /// A layer-span boundary.
    Layer { name: String, edge: LayerEdge },
    /// One CSS rule to emit.
    Declaration(Declaration),
}

/// A single CSS rule: property, resolved values and optional selector
/// or media refinements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    /// Non-empty; joined with a space at render time.
    pub values: Vec<String>,
    /// Variable name(s) the values came from, used to shorten the
    /// synthesized class name.
    pub optional_name: Option<String>,
    /// Selector suffix including the leading colon (`:hover`).
    pub pseudo_class: Option<String>,
    /// Normalized condition string (`(min-width: 768px)`).
    pub media: Option<String>,
}

impl Declaration {
    /// A plain declaration with no pseudo-class, media or optional name.
    pub fn new(property: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            property: property.into(),
            values,
            optional_name: None,
            pseudo_class: None,
            media: None,
        }
    }
}
