//! Import resolution.
//!
//! Given an entry file, [`ImportResolver`] walks `IMPORT`/`TEMPLATE`
//! directives depth-first and produces one combined source text in
//! which every file's (directive-stripped) body is wrapped in a pair of
//! `LAYER <name> START/END` markers. Dependencies appear before the
//! files that import them, deepest first, with the entry file's own
//! body last.
//!
//! Bookkeeping is explicit: a content cache keyed by canonical path, a
//! set of files whose imports were already expanded (a diamond includes
//! the shared dependency exactly once), and a stack of files currently
//! being resolved for cycle detection.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, space1},
    combinator::map,
    sequence::{delimited, preceded},
};

use crate::error::LuiError;
use crate::vocab::SOURCE_EXTENSION;

/// The two directive kinds, differing only in how their path resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    /// Resolves relative to the importing file's directory.
    Import,
    /// Resolves relative to the fixed templates root.
    Template,
}

impl Directive {
    fn name(self) -> &'static str {
        match self {
            Directive::Import => "import",
            Directive::Template => "template",
        }
    }
}

/// The combined source text plus every file that contributed to it.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub text: String,
    pub files: Vec<PathBuf>,
}

/// Depth-first `IMPORT`/`TEMPLATE` expansion with cycle detection.
pub struct ImportResolver {
    templates_root: PathBuf,
    /// Layer name used for the entry file instead of its own stem.
    output_stem: String,
    cache: HashMap<PathBuf, String>,
    expanded: HashSet<PathBuf>,
    resolving: Vec<PathBuf>,
}

impl ImportResolver {
    pub fn new(templates_root: impl Into<PathBuf>, output_stem: impl Into<String>) -> Self {
        Self {
            templates_root: templates_root.into(),
            output_stem: output_stem.into(),
            cache: HashMap::new(),
            expanded: HashSet::new(),
            resolving: Vec::new(),
        }
    }

    /// Resolves the import graph under `entry` into one combined text.
    pub fn resolve(&mut self, entry: &Path) -> Result<ResolvedSource, LuiError> {
        let entry = canonicalize(entry);
        self.expanded.insert(entry.clone());

        let mut files = Vec::new();
        let text = self.resolve_file(&entry, None, &mut files)?;

        log::debug!("resolved {} source files for {}", files.len(), entry.display());
        Ok(ResolvedSource { text, files })
    }

    /// Pushes `path` onto the resolving stack for the duration of its
    /// expansion. The pop runs on the error path too, so a resolver can
    /// be reused after a failed resolve.
    fn resolve_file(
        &mut self,
        path: &PathBuf,
        via: Option<Directive>,
        files: &mut Vec<PathBuf>,
    ) -> Result<String, LuiError> {
        self.resolving.push(path.clone());
        let resolved = self.expand_file(path, via, files);
        self.resolving.pop();
        resolved
    }

    fn expand_file(
        &mut self,
        path: &PathBuf,
        via: Option<Directive>,
        files: &mut Vec<PathBuf>,
    ) -> Result<String, LuiError> {
        let content = self.read_cached(path, via)?;

        let mut combined = String::new();
        let mut body = String::new();

        for line in content.lines() {
            match parse_directive(line) {
                Some((directive, raw_path)) => {
                    let target = self.resolve_target(path, directive, raw_path);
                    if self.resolving.contains(&target) {
                        return Err(LuiError::CircularImport { path: target });
                    }
                    if self.expanded.insert(target.clone()) {
                        let nested = self.resolve_file(&target, Some(directive), files)?;
                        combined.push_str(&nested);
                    }
                    // The directive line itself never reaches the tokenizer.
                }
                None => {
                    body.push_str(line);
                    body.push('\n');
                }
            }
        }

        files.push(path.clone());

        let layer = if via.is_none() {
            self.output_stem.clone()
        } else {
            layer_name(path)
        };
        combined.push_str(&format!("LAYER {layer} START\n{body}LAYER {layer} END\n"));
        Ok(combined)
    }

    fn read_cached(&mut self, path: &PathBuf, via: Option<Directive>) -> Result<String, LuiError> {
        if let Some(content) = self.cache.get(path) {
            return Ok(content.clone());
        }

        let content = fs::read_to_string(path).map_err(|source| match via {
            None => LuiError::Io(source),
            Some(directive) => LuiError::Load {
                directive: directive.name().to_string(),
                path: path.clone(),
                source,
            },
        })?;
        self.cache.insert(path.clone(), content.clone());
        Ok(content)
    }

    fn resolve_target(&self, importer: &Path, directive: Directive, raw: &str) -> PathBuf {
        let base = match directive {
            Directive::Import => importer.parent().unwrap_or_else(|| Path::new(".")),
            Directive::Template => self.templates_root.as_path(),
        };

        let mut target = base.join(raw);
        if target.extension().is_none() {
            target.set_extension(SOURCE_EXTENSION);
        }
        canonicalize(&target)
    }
}

/// Canonical form when the file exists; the joined path otherwise, so
/// error messages still name what was asked for.
fn canonicalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn layer_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("layer")
        .to_string()
}

/// Line-anchored `IMPORT (path)` / `TEMPLATE (path)`.
fn parse_directive(line: &str) -> Option<(Directive, &str)> {
    let result: IResult<&str, (Directive, &str)> = nom::sequence::tuple((
        alt((
            map(tag("IMPORT"), |_| Directive::Import),
            map(tag("TEMPLATE"), |_| Directive::Template),
        )),
        preceded(
            space1,
            delimited(char('('), take_while1(|c| c != ')'), char(')')),
        ),
    ))(line.trim_start());

    match result {
        Ok((_, (directive, path))) => Some((directive, path.trim())),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_both_directives() {
        assert_eq!(
            parse_directive("IMPORT (buttons.lui)"),
            Some((Directive::Import, "buttons.lui"))
        );
        assert_eq!(
            parse_directive("TEMPLATE (reset)"),
            Some((Directive::Template, "reset"))
        );
    }

    #[test]
    fn ordinary_lines_are_not_directives() {
        assert_eq!(parse_directive("ADD width 100px"), None);
        assert_eq!(parse_directive("// IMPORT nothing"), None);
        assert_eq!(parse_directive("IMPORT()"), None);
    }
}
