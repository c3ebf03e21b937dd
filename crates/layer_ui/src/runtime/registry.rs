//! Per-screen registries keyed by component id.
//!
//! Iteration follows registration order, so whole-form validation checks
//! fields top to bottom and reports the first failure the user would see.

use super::validation::CompiledRule;
use crate::element::ElementId;
use std::collections::HashMap;

/// Insertion-ordered map from component id to `T`.
///
/// Re-registering an id replaces the value but keeps its original slot.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    order: Vec<String>,
    entries: HashMap<String, T>,
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Inserts or replaces. Returns the previous value.
    pub fn insert(&mut self, id: impl Into<String>, value: T) -> Option<T> {
        let id = id.into();
        match self.entries.insert(id.clone(), value) {
            Some(previous) => Some(previous),
            None => {
                self.order.push(id);
                None
            }
        }
    }

    /// Looks up an id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// True if the id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|value| (id.as_str(), value)))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the engine knows about the current screen by id.
#[derive(Debug, Default)]
pub struct Registries {
    /// Every element with a non-empty id.
    pub views: Registry<ElementId>,
    /// Input elements.
    pub inputs: Registry<ElementId>,
    /// Compiled rules per input, in declared order.
    pub rules: Registry<Vec<CompiledRule>>,
    /// The single submit trigger (last one registered wins).
    pub submit_button: Option<ElementId>,
}

impl Registries {
    /// Empties all four registries.
    pub fn clear(&mut self) {
        self.views.clear();
        self.inputs.clear();
        self.rules.clear();
        self.submit_button = None;
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty() && self.inputs.is_empty() && self.rules.is_empty() && self.submit_button.is_none()
    }
}
