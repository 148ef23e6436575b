//! Statement parsing and semantic expansion.
//!
//! The parser groups the token stream into logical lines (layer markers
//! are forced onto their own line), dispatches each line on its single
//! statement keyword, resolves variables through the [`VariableStore`],
//! expands properties, and post-processes the record list: duplicate
//! declarations are dropped and empty layer spans are elided.
//!
//! ## Submodules
//!
//! - [`expand`]: base-property to property-family expansion
//! - [`record`]: the [`Record`] / [`Declaration`] output types

pub mod expand;
pub mod record;

pub use record::{Declaration, Record};

use crate::error::LuiError;
use crate::store::{VariableSlot, VariableStore};
use crate::tokenizer::{LayerEdge, Literal, Token, Visibility};
use crate::vocab;
use expand::expand_property;

/// Parses a token stream into declaration records, reading and writing
/// variables through the store it borrows.
pub struct Parser<'a> {
    store: &'a mut VariableStore,
}

impl<'a> Parser<'a> {
    pub fn new(store: &'a mut VariableStore) -> Self {
        Self { store }
    }

    /// Consumes `tokens` and produces the deduplicated record list.
    pub fn parse(&mut self, tokens: &[Token]) -> Result<Vec<Record>, LuiError> {
        let mut records = Vec::new();

        for line in group_by_line(tokens) {
            match line.first() {
                None => continue,
                Some(Token::LayerMarker { name, edge }) => {
                    records.push(Record::Layer {
                        name: name.clone(),
                        edge: *edge,
                    });
                }
                Some(Token::Comment {
                    visibility: Visibility::Private,
                    ..
                }) => continue,
                Some(Token::Comment {
                    visibility: Visibility::Public,
                    text,
                }) => records.push(Record::Comment(text.clone())),
                Some(_) => records.extend(self.statement(line)?),
            }
        }

        let records = remove_duplicates(records);
        let records = collapse_empty_layers(records);
        log::debug!("parsed {} records", records.len());
        Ok(records)
    }

    /// One keyword-led logical line.
    fn statement(&mut self, line: &[Token]) -> Result<Vec<Record>, LuiError> {
        let mut records = Vec::new();

        // Trailing public comments ride along with the statement.
        for token in line {
            if let Token::Comment {
                visibility: Visibility::Public,
                text,
            } = token
            {
                records.push(Record::Comment(text.clone()));
            }
        }

        let keywords: Vec<&str> = line
            .iter()
            .filter_map(|t| match t {
                Token::Keyword(k) => Some(k.as_str()),
                _ => None,
            })
            .collect();

        let keyword = match keywords.as_slice() {
            [] => return Err(LuiError::Semantic("invalid line: no keyword found".into())),
            [one] => *one,
            _ => {
                return Err(LuiError::Semantic(
                    "invalid line: multiple keywords found".into(),
                ));
            }
        };

        match keyword {
            "ADD" => records.extend(self.add_statement(line)?),
            "VAR" => self.var_statement(line)?,
            // Already resolved and stripped upstream; recognized so the
            // keyword itself never errors.
            "IMPORT" | "TEMPLATE" | "LAYER" => {}
            other => {
                return Err(LuiError::Semantic(format!("invalid keyword: {other}")));
            }
        }

        Ok(records)
    }

    /// `VAR <name> = <value> [<value> ...]` — binds slots in the store.
    fn var_statement(&mut self, line: &[Token]) -> Result<(), LuiError> {
        let names: Vec<&str> = line
            .iter()
            .filter_map(|t| match t {
                Token::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();

        let name = match names.as_slice() {
            [] => {
                return Err(LuiError::Semantic(
                    "VAR statement requires a variable name".into(),
                ));
            }
            [one] => *one,
            _ => {
                return Err(LuiError::Semantic(
                    "VAR statement requires exactly one variable name".into(),
                ));
            }
        };

        let mut slots = Vec::new();
        let mut iter = line.iter().peekable();
        while let Some(token) = iter.next() {
            match token {
                Token::Value(literal) => {
                    let (value, unit) = match literal {
                        Literal::Number(n) => (n.to_string(), None),
                        Literal::Text(text) => split_unit_suffix(text),
                    };
                    // A standalone `%` right after the value is its unit.
                    let unit = match (unit, iter.peek()) {
                        (None, Some(Token::ValueType(vt))) => {
                            iter.next();
                            Some(vt.clone())
                        }
                        (unit, _) => unit,
                    };
                    slots.push(VariableSlot::new(value, unit));
                }
                Token::VariableRef { name: ref_name, unit } => {
                    let source = self
                        .store
                        .slots(ref_name)
                        .ok_or_else(|| {
                            LuiError::Semantic(format!("variable not found: {ref_name}"))
                        })?
                        .to_vec();
                    for slot in source {
                        let unit = unit.clone().or(slot.unit);
                        slots.push(VariableSlot::new(slot.value, unit));
                    }
                }
                _ => {}
            }
        }

        if slots.is_empty() {
            return Err(LuiError::Semantic("VAR statement requires a value".into()));
        }

        self.store.define(name, slots);
        Ok(())
    }

    /// `ADD <property> [$id ...] [:pseudo] [@media] <value> ...`.
    fn add_statement(&mut self, line: &[Token]) -> Result<Vec<Record>, LuiError> {
        let properties: Vec<&str> = line
            .iter()
            .filter_map(|t| match t {
                Token::Property(p) => Some(p.as_str()),
                _ => None,
            })
            .collect();

        let base = match properties.as_slice() {
            [] => {
                return Err(LuiError::Semantic(
                    "ADD statement requires a property".into(),
                ));
            }
            [one] => *one,
            _ => {
                return Err(LuiError::Semantic(
                    "ADD statement requires exactly one property".into(),
                ));
            }
        };

        let mut values = Vec::new();
        let mut ref_names = Vec::new();
        let mut only_refs = true;
        let mut iter = line.iter().peekable();
        while let Some(token) = iter.next() {
            match token {
                Token::Value(literal) => {
                    only_refs = false;
                    let mut value = literal.to_string();
                    if let Some(Token::ValueType(vt)) = iter.peek() {
                        value.push_str(vt);
                        iter.next();
                    }
                    values.push(value);
                }
                Token::Variable(word) => {
                    only_refs = false;
                    values.push(word.clone());
                }
                Token::VariableRef { name, unit } => {
                    let slots = self
                        .store
                        .slots(name)
                        .ok_or_else(|| LuiError::Semantic(format!("variable not found: {name}")))?;
                    let rendered = slots
                        .iter()
                        .map(|slot| {
                            let unit = unit.as_deref().or(slot.unit.as_deref()).unwrap_or("");
                            format!("{}{}", slot.value, unit)
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    values.push(rendered);
                    ref_names.push(name.clone());
                }
                _ => {}
            }
        }

        if values.is_empty() {
            return Err(LuiError::Semantic(
                "ADD statement requires at least one value".into(),
            ));
        }

        let optional_name = if only_refs && !ref_names.is_empty() {
            Some(ref_names.join("-"))
        } else {
            None
        };

        let pseudo_class = line.iter().find_map(|t| match t {
            Token::PseudoClass(name) => Some(format!(":{name}")),
            _ => None,
        });

        let media = self.media_condition(line);

        let identifiers: Vec<&str> = line
            .iter()
            .filter_map(|t| match t {
                Token::Identifier(id) => Some(id.as_str()),
                _ => None,
            })
            .collect();

        let mut expanded = Vec::new();
        if identifiers.is_empty() {
            expanded.extend(expand_property(base, "none")?);
        } else {
            for identifier in identifiers {
                expanded.extend(expand_property(base, identifier)?);
            }
        }

        Ok(expanded
            .into_iter()
            .map(|property| {
                Record::Declaration(Declaration {
                    property,
                    values: values.clone(),
                    optional_name: optional_name.clone(),
                    pseudo_class: pseudo_class.clone(),
                    media: media.clone(),
                })
            })
            .collect())
    }

    /// Normalizes the line's media token into a `(min-width: ...)`
    /// condition. An unresolved media variable reference drops the
    /// condition silently instead of failing.
    fn media_condition(&self, line: &[Token]) -> Option<String> {
        for token in line {
            match token {
                Token::MediaValue(raw) => {
                    let (value, unit) = split_unit_suffix(raw);
                    let unit = unit.unwrap_or_else(|| {
                        if value.chars().all(|c| c.is_ascii_digit()) {
                            vocab::DEFAULT_LENGTH_UNIT.to_string()
                        } else {
                            String::new()
                        }
                    });
                    return Some(format!("(min-width: {value}{unit})"));
                }
                Token::MediaVariableRef(name) => {
                    return self
                        .store
                        .get(name)
                        .map(|value| format!("(min-width: {value})"));
                }
                _ => {}
            }
        }
        None
    }
}

/// Splits a literal like `50px` into its value and unit parts. Text
/// without a recognized trailing unit is kept whole.
fn split_unit_suffix(text: &str) -> (String, Option<String>) {
    let boundary = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic() || *c == '%')
        .last()
        .map(|(idx, _)| idx);

    if let Some(idx) = boundary {
        let (value, suffix) = text.split_at(idx);
        let numeric = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_digit() || c == '-' || c == '.' || c == '/');
        if numeric && vocab::UNITS.contains(suffix) {
            return (value.to_string(), Some(suffix.to_string()));
        }
    }

    (text.to_string(), None)
}

/// Splits logical lines on NEWLINE tokens; every layer marker becomes a
/// single-token line of its own.
fn group_by_line(tokens: &[Token]) -> Vec<&[Token]> {
    let mut groups = Vec::new();
    let mut start = 0;

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Newline => {
                if idx > start {
                    groups.push(&tokens[start..idx]);
                }
                start = idx + 1;
            }
            Token::LayerMarker { .. } => {
                if idx > start {
                    groups.push(&tokens[start..idx]);
                }
                groups.push(&tokens[idx..=idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if start < tokens.len() {
        groups.push(&tokens[start..]);
    }

    groups
}

/// Drops later records with an identical (property, values) pair.
/// Layer boundaries are exempt.
fn remove_duplicates(records: Vec<Record>) -> Vec<Record> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let key = match &record {
            Record::Layer { .. } => None,
            Record::Comment(text) => Some(("COMMENT".to_string(), vec![text.clone()])),
            Record::Declaration(decl) => Some((decl.property.clone(), decl.values.clone())),
        };
        match key {
            Some(key) => {
                if seen.insert(key) {
                    unique.push(record);
                }
            }
            None => unique.push(record),
        }
    }

    unique
}

/// Removes START/END pairs with nothing between them, repeating until
/// no empty span remains (an elided inner span can empty its parent).
fn collapse_empty_layers(mut records: Vec<Record>) -> Vec<Record> {
    loop {
        let empty_pair = records.windows(2).position(|pair| {
            matches!(
                (&pair[0], &pair[1]),
                (
                    Record::Layer { name: a, edge: LayerEdge::Start },
                    Record::Layer { name: b, edge: LayerEdge::End },
                ) if a == b
            )
        });

        match empty_pair {
            Some(idx) => {
                records.drain(idx..idx + 2);
            }
            None => return records,
        }
    }
}
