//! All entry changes detected for one mapping property.

use core::fmt;
use std::collections::HashSet;

use auditdiff_core::{DiffError, DiffResult, DiffValue};

use crate::entry::{EntryChange, EntryChangeType};

/// Entry changes of a single mapping property, in the order they were reported.
///
/// Because [`EntryChange`] identity is its key, two records for the same key
/// would be indistinguishable in any set-based consumer. Construction therefore
/// rejects duplicate keys instead of trusting the diffing engine to keep
/// "added" and "removed" mutually exclusive.
#[derive(Debug, Clone)]
pub struct MapChange<K, V> {
    property: String,
    entries: Vec<EntryChange<K, V>>,
}

impl<K: DiffValue, V> MapChange<K, V> {
    pub fn new(
        property: impl Into<String>,
        entries: impl IntoIterator<Item = EntryChange<K, V>>,
    ) -> DiffResult<Self> {
        let property = property.into();
        if property.trim().is_empty() {
            return Err(DiffError::invalid_argument(
                "map change property name must not be empty",
            ));
        }

        let entries: Vec<_> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.wrapped_key()) {
                tracing::warn!(
                    property = %property,
                    key = ?entry.key(),
                    change = %entry.change_type(),
                    "duplicate key in map change"
                );
                return Err(DiffError::invalid_argument(format!(
                    "duplicate entry change for key {:?} in property '{property}'",
                    entry.key()
                )));
            }
        }

        Ok(Self { property, entries })
    }

    /// Change recorded for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&EntryChange<K, V>> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> MapChange<K, V> {
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn entries(&self) -> &[EntryChange<K, V>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<EntryChange<K, V>> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn added(&self) -> impl Iterator<Item = &EntryChange<K, V>> {
        self.of_type(EntryChangeType::EntryAdded)
    }

    pub fn removed(&self) -> impl Iterator<Item = &EntryChange<K, V>> {
        self.of_type(EntryChangeType::EntryRemoved)
    }

    pub fn value_changes(&self) -> impl Iterator<Item = &EntryChange<K, V>> {
        self.of_type(EntryChangeType::EntryValueChanged)
    }

    fn of_type(&self, change_type: EntryChangeType) -> impl Iterator<Item = &EntryChange<K, V>> {
        self.entries
            .iter()
            .filter(move |entry| entry.change_type() == change_type)
    }
}

impl<'a, K, V> IntoIterator for &'a MapChange<K, V> {
    type Item = &'a EntryChange<K, V>;
    type IntoIter = core::slice::Iter<'a, EntryChange<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapChange<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.property)?;
        for entry in &self.entries {
            write!(f, "\n  {entry}")?;
        }
        Ok(())
    }
}
