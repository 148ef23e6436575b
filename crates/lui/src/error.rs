//! Error types for LUI compilation.
//!
//! Every failure the pipeline can produce is a variant of [`LuiError`],
//! so the host can format load, cycle, lexical, semantic and rendering
//! failures uniformly. The first error aborts the whole compile; no
//! partial output is ever produced.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while compiling a LUI stylesheet.
///
/// # Examples
///
/// ```rust
/// use lui::tokenizer::tokenize;
///
/// // Unknown identifier after `$` is a lexical error with a position.
/// let result = tokenize("ADD margin $sideways 4px");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum LuiError {
    /// A file named by an `IMPORT` or `TEMPLATE` directive could not be read.
    #[error("failed to load {directive} at {path:?}: {source}")]
    Load {
        /// The directive keyword, lower-cased (`import` or `template`).
        directive: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// An import chain reached a file that is still being resolved.
    #[error("circular import detected: {path:?}")]
    CircularImport { path: PathBuf },

    /// The scanner met input it cannot classify.
    ///
    /// Carries the 1-based line and column where scanning stopped.
    #[error("{message} ({line}:{column})")]
    Lexical {
        message: String,
        line: usize,
        column: usize,
    },

    /// A statement is structurally wrong: missing or duplicate keyword,
    /// missing property or value, undefined variable, or an expanded
    /// property outside the recognized set.
    #[error("{0}")]
    Semantic(String),

    /// CSS generation rejected a value or media condition.
    #[error("{0}")]
    Render(String),

    /// An I/O error outside of directive loading (reading the entry file).
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl LuiError {
    /// Shorthand for a lexical error at a scanner position.
    pub(crate) fn lexical(message: impl Into<String>, line: usize, column: usize) -> Self {
        LuiError::Lexical {
            message: message.into(),
            line,
            column,
        }
    }
}
