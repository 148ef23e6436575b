//! Per-compile configuration.
//!
//! One [`CompileOptions`] value is built by the host (the CLI, or a test)
//! and passed by reference through the pipeline. There is no process-wide
//! configuration state.

use std::str::FromStr;

use thiserror::Error;

/// A mode string the host passed that names no known mode.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown {kind} mode: {value}")]
pub struct UnknownMode {
    kind: &'static str,
    value: String,
}

/// Strategy for synthesizing class names from declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassNameFormat {
    /// One lower-case character per property segment, vowel-stripped
    /// variable names: `.w_sz`, `.bc_fff`.
    #[default]
    Minimalistic,
    /// Same compact prefix, but names and tags are kept whole: `.w_size`.
    Standard,
    /// Capitalized property segments: `.BackgroundColor_fff`.
    FullName,
}

impl FromStr for ClassNameFormat {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimalistic" => Ok(ClassNameFormat::Minimalistic),
            "standard" => Ok(ClassNameFormat::Standard),
            "full-name" => Ok(ClassNameFormat::FullName),
            other => Err(UnknownMode {
                kind: "class-name format",
                value: other.to_string(),
            }),
        }
    }
}

/// Whitespace and indentation style of the emitted CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Single-line rules, no indentation.
    Minimalistic,
    /// 2-space indentation.
    #[default]
    Standard,
    /// 4-space indentation, blank line after each rule.
    Pretty,
}

impl FromStr for RenderMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimalistic" => Ok(RenderMode::Minimalistic),
            "standard" => Ok(RenderMode::Standard),
            "pretty" => Ok(RenderMode::Pretty),
            other => Err(UnknownMode {
                kind: "render",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for a single compile invocation.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub class_format: ClassNameFormat,
    pub mode: RenderMode,
    /// When set, layer markers become `@layer` blocks and a leading
    /// `@layer a, b, c;` statement is emitted.
    pub layers: bool,
    /// When unset, `min-width` media conditions are rewritten to
    /// `max-width` at render time.
    pub mobile_first: bool,
}
