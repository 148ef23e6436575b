//! # LUI - Layered UI Stylesheet Compiler
//!
//! A compiler for LUI, a small declarative stylesheet-authoring language
//! that targets plain CSS. LUI files declare styling rules, variables,
//! layered imports, media conditions and pseudo-class variants:
//!
//! ```text
//! VAR gutter = 16px
//! ADD margin $all {gutter}
//! ADD background :hover #222
//! ADD padding @768px 20px
//! IMPORT (buttons)
//! ```
//!
//! This crate provides the whole compile pipeline:
//!
//! - **Import resolution**: [`resolver::ImportResolver`] expands
//!   `IMPORT`/`TEMPLATE` directives depth-first (with cycle detection)
//!   into one combined text, bracketing each file with layer markers
//! - **Tokenizing**: [`tokenizer::tokenize`] scans the combined text
//!   into typed tokens, classifying bare words by context
//! - **Parsing**: [`parser::Parser`] expands statements into
//!   declaration records, resolving variables through a
//!   [`store::VariableStore`]
//! - **Generation**: [`generator::CssGenerator`] renders the records as
//!   CSS, grouping media conditions and nesting `@layer` blocks
//!
//! ## Quick Start
//!
//! ```rust
//! use lui::{CompileOptions, compile};
//!
//! let options = CompileOptions::default();
//! let output = compile("ADD width 100px\n", &options).expect("valid LUI");
//! assert!(output.css.contains("width: 100px"));
//! ```
//!
//! Compilation is single-threaded and synchronous: it either runs to
//! completion or aborts on the first error ([`LuiError`]). Nothing is
//! shared across invocations; variable state lives in a per-compile
//! store.
//!
//! ## Modules
//!
//! - [`resolver`]: import/dependency resolution
//! - [`tokenizer`]: lexical analysis
//! - [`parser`]: semantic parsing and property expansion
//! - [`store`]: the per-compile variable store
//! - [`generator`]: CSS code generation
//! - [`vocab`]: the language's closed vocabularies
//! - [`options`]: per-compile configuration
//! - [`error`]: the error taxonomy

pub mod error;
pub mod generator;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod store;
pub mod tokenizer;
pub mod vocab;

pub use error::LuiError;
pub use options::{ClassNameFormat, CompileOptions, RenderMode};
pub use resolver::{ImportResolver, ResolvedSource};
pub use store::VariableStore;

use std::collections::BTreeMap;

/// The result of a successful compile.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// The generated CSS text.
    pub css: String,
    /// Every variable binding accumulated during the parse, rendered.
    pub variables: BTreeMap<String, String>,
    /// Number of records that survived deduplication.
    pub record_count: usize,
}

/// Compiles resolved LUI source text to CSS.
///
/// `source` is expected to have imports already expanded (see
/// [`ImportResolver`]); plain single-file sources work as-is.
pub fn compile(source: &str, options: &CompileOptions) -> Result<Compilation, LuiError> {
    let tokens = tokenizer::tokenize(source)?;
    log::debug!("{} tokens", tokens.len());

    let mut store = VariableStore::new();
    let records = parser::Parser::new(&mut store).parse(&tokens)?;

    let css = generator::CssGenerator::new(options).generate(&records)?;

    Ok(Compilation {
        css,
        variables: store.all(),
        record_count: records.len(),
    })
}
