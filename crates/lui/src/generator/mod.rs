//! CSS text generation.
//!
//! The generator consumes parser records in order and renders the final
//! stylesheet: values are validated (with default length-unit
//! injection), class names synthesized, declarations sharing a media
//! condition grouped into one `@media` block, and layer boundaries
//! rendered as nested `@layer` blocks when layering is enabled.
//!
//! ## Submodules
//!
//! - [`class_name`]: selector synthesis per [`ClassNameFormat`]

pub mod class_name;

pub use class_name::format_class_name;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LuiError;
use crate::options::{ClassNameFormat, CompileOptions, RenderMode};
use crate::parser::{Declaration, Record};
use crate::tokenizer::LayerEdge;
use crate::vocab;

/// Multi-part shorthand properties whose values pass through unmodified.
static COMPOUND_PROPERTIES: [&str; 6] =
    ["border", "margin", "padding", "background", "font", "animation"];

/// A value already carrying a unit or a global keyword.
static UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(^|\s)(auto|inherit|initial|revert|revert-layer|unset|(-?\d+(\.\d+)?)(px|em|rem|%|vw|vh|vmin|vmax|ch|ex|mm|cm|in|pt|pc))(\s|$)",
    )
    .expect("unit pattern compiles")
});

static COLOR_HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#([0-9a-f]{3}){1,2}$").expect("hex pattern compiles"));

static COLOR_FUNC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgb(a?)\(.*\)$|^hsl(a?)\(.*\)$").expect("color fn pattern compiles")
});

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d*\.?\d+$").expect("numeric pattern compiles"));

/// Strict shape check for emitted media conditions.
static MEDIA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\((min-width|max-width): ?([0-9]+(px|rem|em|%|vw|vh)|var\(--[a-zA-Z0-9-]+\))\)$")
        .expect("media pattern compiles")
});

/// Renders parser records as CSS text according to the compile options.
pub struct CssGenerator<'a> {
    options: &'a CompileOptions,
    layer_stack: Vec<String>,
}

impl<'a> CssGenerator<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            layer_stack: Vec::new(),
        }
    }

    /// Renders `records` in input order; media-conditioned declarations
    /// are buffered per condition and flushed as grouped `@media` blocks
    /// after the main pass.
    pub fn generate(&mut self, records: &[Record]) -> Result<String, LuiError> {
        let mut lines: Vec<String> = Vec::new();
        let mut media_groups: Vec<(String, Vec<String>)> = Vec::new();

        if self.options.layers {
            let mut layer_names: Vec<&str> = Vec::new();
            for record in records {
                if let Record::Layer { name, .. } = record {
                    if !layer_names.contains(&name.as_str()) {
                        layer_names.push(name);
                    }
                }
            }
            if !layer_names.is_empty() {
                lines.push(format!("@layer {};", layer_names.join(", ")));
            }
        }

        for record in records {
            match record {
                Record::Comment(text) => {
                    lines.push(format!("{}/* {} */", self.indent(), text));
                }
                Record::Layer { name, edge } => {
                    if let Some(rendered) = self.layer_boundary(name, *edge) {
                        lines.push(rendered);
                    }
                }
                Record::Declaration(decl) => {
                    let block = self.format_block(decl)?;
                    match &decl.media {
                        Some(condition) => {
                            match media_groups.iter_mut().find(|(c, _)| c == condition) {
                                Some((_, blocks)) => blocks.push(block),
                                None => media_groups.push((condition.clone(), vec![block])),
                            }
                        }
                        None => lines.push(block),
                    }
                }
            }
        }

        log::debug!(
            "rendered {} top-level lines, {} media groups",
            lines.len(),
            media_groups.len()
        );

        let block_sep = match self.options.mode {
            RenderMode::Minimalistic => "",
            _ => "\n",
        };
        for (condition, blocks) in media_groups {
            let content = blocks.join(block_sep);
            lines.push(self.format_media_query(&condition, &content)?);
        }

        if self.options.layers && !self.layer_stack.is_empty() {
            lines.push("}".to_string());
        }

        Ok(lines.join(block_sep).trim().to_string())
    }

    /// Maintains the layer stack and renders the boundary. With layering
    /// off, markers are invisible: no text, and no indent depth either.
    fn layer_boundary(&mut self, name: &str, edge: LayerEdge) -> Option<String> {
        if !self.options.layers {
            return None;
        }
        match edge {
            LayerEdge::Start => {
                let rendered = format!("{}@layer {} {{", self.indent(), name);
                self.layer_stack.push(name.to_string());
                Some(rendered)
            }
            LayerEdge::End => {
                self.layer_stack.pop();
                Some("}".to_string())
            }
        }
    }

    /// One CSS rule: selector (with pseudo-class suffix) and the
    /// validated declaration body.
    fn format_block(&self, decl: &Declaration) -> Result<String, LuiError> {
        let class_name = format_class_name(decl, self.options.class_format);
        let pseudo = decl.pseudo_class.as_deref().unwrap_or("");
        let value = validate_value(&decl.values.join(" "), &decl.property)?;
        let property = &decl.property;
        let indent = self.indent();

        Ok(match self.options.mode {
            RenderMode::Minimalistic => {
                format!("{indent}{class_name}{pseudo}{{{property}:{value}}}")
            }
            RenderMode::Standard => format!(
                "{indent}{class_name}{pseudo} {{\n{indent}  {property}: {value};\n{indent}}}"
            ),
            RenderMode::Pretty => format!(
                "{indent}{class_name}{pseudo} {{\n{indent}    {property}: {value};\n{indent}}}\n"
            ),
        })
    }

    fn format_media_query(&self, condition: &str, content: &str) -> Result<String, LuiError> {
        let condition = if self.options.mobile_first {
            condition.to_string()
        } else {
            condition.replace("min-width", "max-width")
        };

        if !MEDIA_RE.is_match(&condition) {
            return Err(LuiError::Render(format!(
                "invalid media query condition: {condition}"
            )));
        }

        let indent = self.indent();
        Ok(match self.options.mode {
            RenderMode::Minimalistic => format!("{indent}@media {condition}{{{content}}}"),
            RenderMode::Standard => format!("{indent}@media {condition} {{\n{content}\n{indent}}}"),
            RenderMode::Pretty => format!("{indent}@media {condition} {{\n{content}\n{indent}}}\n"),
        })
    }

    /// Indentation tracks open `@layer` nesting.
    fn indent(&self) -> String {
        let unit = match self.options.mode {
            RenderMode::Minimalistic => return String::new(),
            RenderMode::Standard => "  ",
            RenderMode::Pretty => "    ",
        };
        unit.repeat(self.layer_stack.len())
    }
}

/// Convenience entry matching the pipeline contract.
pub fn generate(
    records: &[Record],
    class_format: ClassNameFormat,
    mode: RenderMode,
) -> Result<String, LuiError> {
    let options = CompileOptions {
        class_format,
        mode,
        ..CompileOptions::default()
    };
    CssGenerator::new(&options).generate(records)
}

/// Normalizes one declaration value, injecting the default length unit
/// for bare numbers on unit-requiring properties.
fn validate_value(value: &str, property: &str) -> Result<String, LuiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LuiError::Render(format!(
            "empty value for property {property}"
        )));
    }

    if COMPOUND_PROPERTIES.contains(&property) {
        return Ok(trimmed.to_string());
    }

    if !needs_default_unit(trimmed, property) {
        return Ok(trimmed.to_string());
    }

    if NUMERIC_RE.is_match(trimmed) {
        return Ok(format!("{trimmed}{}", vocab::DEFAULT_LENGTH_UNIT));
    }

    if vocab::INTRINSIC_SIZING.contains(trimmed.to_ascii_lowercase().as_str()) {
        return Ok(trimmed.to_string());
    }

    Err(LuiError::Render(format!(
        "invalid value '{value}' for property '{property}': expected a number with unit or valid CSS value"
    )))
}

fn needs_default_unit(value: &str, property: &str) -> bool {
    if UNIT_RE.is_match(value) {
        return false;
    }
    if is_css_function(value) {
        return false;
    }
    if COLOR_HEX_RE.is_match(value) || COLOR_FUNC_RE.is_match(value) {
        return false;
    }
    vocab::PROPERTIES_REQUIRING_UNITS.contains(property)
}

fn is_css_function(value: &str) -> bool {
    vocab::CSS_FUNCTIONS
        .iter()
        .any(|head| value.starts_with(&format!("{head}(")))
}
