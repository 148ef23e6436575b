//! Variable storage for a single compile pass.
//!
//! A [`VariableStore`] maps a variable name to an ordered list of
//! (value, unit) slots. It is a pure data holder: unit legality and
//! reference existence are the parser's responsibility. One store is
//! created per compile and passed by reference into the parser, so
//! nothing leaks across invocations.

use std::collections::{BTreeMap, HashMap};

/// One slot of a variable binding: a raw value and an optional unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSlot {
    pub value: String,
    pub unit: Option<String>,
}

impl VariableSlot {
    pub fn new(value: impl Into<String>, unit: Option<String>) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    fn render(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{}{}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

/// Mapping from variable name to its ordered value slots.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    variables: HashMap<String, Vec<VariableSlot>>,
}

impl VariableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `slots`, replacing any prior binding.
    pub fn define(&mut self, name: impl Into<String>, slots: Vec<VariableSlot>) {
        self.variables.insert(name.into(), slots);
    }

    /// Returns the rendered value of `name`: each slot as `value`
    /// immediately followed by its unit, slots joined with one space.
    pub fn get(&self, name: &str) -> Option<String> {
        self.variables.get(name).map(|slots| {
            slots
                .iter()
                .map(VariableSlot::render)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Returns the raw slots of `name`.
    pub fn slots(&self, name: &str) -> Option<&[VariableSlot]> {
        self.variables.get(name).map(Vec::as_slice)
    }

    /// Removes a binding, reporting whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.variables.remove(name).is_some()
    }

    /// Drops every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Every binding rendered, keyed by name.
    pub fn all(&self) -> BTreeMap<String, String> {
        self.variables
            .keys()
            .map(|name| (name.clone(), self.get(name).unwrap_or_default()))
            .collect()
    }
}
