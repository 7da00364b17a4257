//! Value/position tables for list selectors

use std::collections::HashMap;
use std::hash::Hash;

/// Bidirectional mapping between selector positions and the values shown there
///
/// Built once per edit session so that both directions are O(1) and can
/// never disagree.
#[derive(Debug, Clone)]
pub struct SelectionTable<T> {
    values: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> SelectionTable<T> {
    /// Build a table from values in display order; later duplicates are skipped
    pub fn new(values: &[T]) -> Self {
        let mut table = Self {
            values: Vec::with_capacity(values.len()),
            positions: HashMap::with_capacity(values.len()),
        };
        for &value in values {
            if !table.positions.contains_key(&value) {
                table.positions.insert(value, table.values.len());
                table.values.push(value);
            }
        }
        table
    }

    pub fn index_of(&self, value: T) -> Option<usize> {
        self.positions.get(&value).copied()
    }

    pub fn value_at(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}
