//! Closed vocabularies of the LUI language.
//!
//! Every table here is consumed strictly as an is-member-of predicate by
//! the tokenizer, parser and generator. Adding a word to a set is the
//! whole story of teaching the language a new property, unit, identifier
//! or pseudo-class.

use phf::{Set, phf_set};

/// Statement keywords. `STYLE` is reserved but currently has no handler.
pub static KEYWORDS: Set<&'static str> = phf_set! {
    "ADD", "IMPORT", "STYLE", "VAR", "LAYER", "TEMPLATE",
};

/// Property-expansion suffixes accepted after `$`.
pub static IDENTIFIERS: Set<&'static str> = phf_set! {
    "none", "all", "left", "right", "top", "bottom",
    "inline", "block", "color", "center", "start", "end",
};

/// Unit suffixes accepted on values and variable references.
pub static UNITS: Set<&'static str> = phf_set! {
    "%", "px", "em", "rem", "vh", "vw", "vmin", "vmax",
    "mm", "cm", "in", "pt", "pc", "ch", "ex",
};

/// Base property words the scanner may classify as a PROPERTY token.
pub static BASE_PROPERTIES: Set<&'static str> = phf_set! {
    "width", "height", "min-width", "max-width", "min-height", "max-height",
    "margin", "padding", "border", "background", "color", "font",
    "display", "position", "gap", "opacity", "overflow", "flex",
    "text-align", "z-index", "animation",
};

/// Every property the compiler may emit, including expansion targets.
pub static PROPERTIES: Set<&'static str> = phf_set! {
    "width", "height", "min-width", "max-width", "min-height", "max-height",
    "margin", "margin-top", "margin-right", "margin-bottom", "margin-left",
    "margin-inline", "margin-block",
    "padding", "padding-top", "padding-right", "padding-bottom", "padding-left",
    "padding-inline", "padding-block",
    "border", "border-top", "border-right", "border-bottom", "border-left",
    "border-width", "border-style", "border-color", "border-radius",
    "background", "background-color", "background-image", "background-position",
    "background-size",
    "color",
    "font", "font-size", "font-weight", "font-style", "font-family",
    "display", "position", "top", "right", "bottom", "left",
    "gap", "row-gap", "column-gap",
    "opacity", "overflow", "overflow-x", "overflow-y",
    "flex", "flex-direction", "flex-wrap", "flex-grow", "flex-shrink",
    "flex-basis",
    "text-align", "z-index", "animation",
};

/// Properties whose bare numeric values get the default length unit.
pub static PROPERTIES_REQUIRING_UNITS: Set<&'static str> = phf_set! {
    "width", "height", "min-width", "max-width", "min-height", "max-height",
    "margin-top", "margin-right", "margin-bottom", "margin-left",
    "margin-inline", "margin-block",
    "padding-top", "padding-right", "padding-bottom", "padding-left",
    "padding-inline", "padding-block",
    "border-width", "border-radius",
    "font-size",
    "top", "right", "bottom", "left",
    "gap", "row-gap", "column-gap",
    "flex-basis",
};

/// Function heads that make a value pass validation unmodified.
pub static CSS_FUNCTIONS: Set<&'static str> = phf_set! {
    "rgb", "rgba", "hsl", "hsla", "calc", "var", "url",
    "min", "max", "clamp", "linear-gradient", "radial-gradient",
    "translate", "rotate", "scale",
};

/// Bare words the scanner may classify as a plain VALUE token.
pub static BARE_VALUE_KEYWORDS: Set<&'static str> = phf_set! {
    "auto", "inherit", "initial", "unset", "revert", "revert-layer",
    "none", "normal",
    "solid", "dashed", "dotted", "double",
    "bold", "bolder", "lighter", "italic",
    "center", "left", "right", "justify",
    "absolute", "relative", "fixed", "sticky", "static",
    "hidden", "visible", "scroll",
    "block", "inline", "inline-block", "flex", "grid",
    "row", "column", "wrap", "nowrap",
    "transparent", "currentcolor",
    "red", "green", "blue", "black", "white", "gray", "grey",
    "yellow", "orange", "purple", "pink",
};

/// Intrinsic sizing keywords accepted for unit-requiring properties.
pub static INTRINSIC_SIZING: Set<&'static str> = phf_set! {
    "max-content", "min-content", "fit-content", "-webkit-fill-available",
};

/// Recognized pseudo-class names (without the leading colon or arguments).
pub static PSEUDO_CLASSES: Set<&'static str> = phf_set! {
    "hover", "focus", "focus-within", "focus-visible",
    "active", "visited", "link",
    "disabled", "enabled", "checked", "empty",
    "first-child", "last-child", "nth-child", "not",
};

/// Default length unit injected for bare numeric values.
pub const DEFAULT_LENGTH_UNIT: &str = "px";

/// Default extension assumed on extension-less import paths.
pub const SOURCE_EXTENSION: &str = "lui";
