//! A single key-level change inside a mapping diff.

use core::fmt;
use core::hash::{Hash, Hasher};

use auditdiff_core::{Atomic, DiffError, DiffResult};

/// Seed mixed into every [`EntryChange`] hash ahead of the key.
pub const ENTRY_CHANGE_HASH_SEED: u64 = 0x454e_5452_595f_4348;

/// Discriminant of an entry change, for callers that must tell variants apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntryChangeType {
    EntryAdded,
    EntryRemoved,
    EntryValueChanged,
}

impl fmt::Display for EntryChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryChangeType::EntryAdded => "entry_added",
            EntryChangeType::EntryRemoved => "entry_removed",
            EntryChangeType::EntryValueChanged => "entry_value_changed",
        };
        f.write_str(name)
    }
}

/// Variant-specific payload of an entry change.
///
/// "Left" is the older snapshot, "right" the newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryChangeKind<V> {
    /// Key exists only on the right.
    Added { value: Atomic<V> },
    /// Key exists only on the left.
    Removed { value: Atomic<V> },
    /// Key exists on both sides with different values.
    ValueChanged { left: Atomic<V>, right: Atomic<V> },
}

impl<V> EntryChangeKind<V> {
    pub fn change_type(&self) -> EntryChangeType {
        match self {
            EntryChangeKind::Added { .. } => EntryChangeType::EntryAdded,
            EntryChangeKind::Removed { .. } => EntryChangeType::EntryRemoved,
            EntryChangeKind::ValueChanged { .. } => EntryChangeType::EntryValueChanged,
        }
    }
}

/// Something happened to `key` between two snapshots of a mapping.
///
/// Identity is the key and nothing else: an `Added` and a `Removed` change for
/// the same key are equal and hash the same. `PartialEq` and `Hash` live on this
/// struct, so no variant can override them. Use [`EntryChange::same_change`] or
/// compare [`EntryChange::change_type`] when the variant matters.
#[derive(Debug, Clone)]
pub struct EntryChange<K, V> {
    key: Atomic<K>,
    kind: EntryChangeKind<V>,
}

impl<K, V> EntryChange<K, V> {
    fn with_kind(key: K, kind: EntryChangeKind<V>) -> Self {
        Self {
            key: Atomic::new(key),
            kind,
        }
    }

    fn try_with_kind(key: Option<K>, kind: EntryChangeKind<V>) -> DiffResult<Self> {
        let key = key.ok_or_else(|| {
            tracing::debug!(change = %kind.change_type(), "rejected entry change without a key");
            DiffError::invalid_argument("entry change key must be present")
        })?;
        Ok(Self::with_kind(key, kind))
    }

    pub fn added(key: K, value: V) -> Self {
        Self::with_kind(
            key,
            EntryChangeKind::Added {
                value: Atomic::new(value),
            },
        )
    }

    pub fn removed(key: K, value: V) -> Self {
        Self::with_kind(
            key,
            EntryChangeKind::Removed {
                value: Atomic::new(value),
            },
        )
    }

    pub fn value_changed(key: K, left: V, right: V) -> Self {
        Self::with_kind(
            key,
            EntryChangeKind::ValueChanged {
                left: Atomic::new(left),
                right: Atomic::new(right),
            },
        )
    }

    /// Like [`EntryChange::added`], failing with `InvalidArgument` on a missing key.
    pub fn try_added(key: Option<K>, value: V) -> DiffResult<Self> {
        Self::try_with_kind(
            key,
            EntryChangeKind::Added {
                value: Atomic::new(value),
            },
        )
    }

    pub fn try_removed(key: Option<K>, value: V) -> DiffResult<Self> {
        Self::try_with_kind(
            key,
            EntryChangeKind::Removed {
                value: Atomic::new(value),
            },
        )
    }

    pub fn try_value_changed(key: Option<K>, left: V, right: V) -> DiffResult<Self> {
        Self::try_with_kind(
            key,
            EntryChangeKind::ValueChanged {
                left: Atomic::new(left),
                right: Atomic::new(right),
            },
        )
    }

    /// The original, unboxed key.
    pub fn key(&self) -> &K {
        self.key.get()
    }

    pub fn wrapped_key(&self) -> &Atomic<K> {
        &self.key
    }

    pub fn kind(&self) -> &EntryChangeKind<V> {
        &self.kind
    }

    pub fn change_type(&self) -> EntryChangeType {
        self.kind.change_type()
    }

    /// Value of an added or removed entry.
    pub fn value(&self) -> Option<&V> {
        match &self.kind {
            EntryChangeKind::Added { value } | EntryChangeKind::Removed { value } => {
                Some(value.get())
            }
            EntryChangeKind::ValueChanged { .. } => None,
        }
    }

    /// Value in the older snapshot, if the key existed there.
    pub fn left_value(&self) -> Option<&V> {
        match &self.kind {
            EntryChangeKind::Removed { value } => Some(value.get()),
            EntryChangeKind::ValueChanged { left, .. } => Some(left.get()),
            EntryChangeKind::Added { .. } => None,
        }
    }

    /// Value in the newer snapshot, if the key exists there.
    pub fn right_value(&self) -> Option<&V> {
        match &self.kind {
            EntryChangeKind::Added { value } => Some(value.get()),
            EntryChangeKind::ValueChanged { right, .. } => Some(right.get()),
            EntryChangeKind::Removed { .. } => None,
        }
    }

    pub fn into_parts(self) -> (K, EntryChangeKind<V>) {
        (self.key.into_inner(), self.kind)
    }
}

impl<K: PartialEq, V: PartialEq> EntryChange<K, V> {
    /// Full comparison: key, variant and payload.
    pub fn same_change(&self, other: &Self) -> bool {
        self.key == other.key && self.kind == other.kind
    }
}

impl<K: PartialEq, V> PartialEq for EntryChange<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for EntryChange<K, V> {}

impl<K: Hash, V> Hash for EntryChange<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ENTRY_CHANGE_HASH_SEED.hash(state);
        self.key.hash(state);
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for EntryChange<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntryChangeKind::Added { value } => {
                write!(f, "entry ['{}' : '{}'] added", self.key, value)
            }
            EntryChangeKind::Removed { value } => {
                write!(f, "entry ['{}' : '{}'] removed", self.key, value)
            }
            EntryChangeKind::ValueChanged { left, right } => write!(
                f,
                "entry ['{}'] changed from '{}' to '{}'",
                self.key, left, right
            ),
        }
    }
}
