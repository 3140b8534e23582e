//! Change records for keyed mapping properties.
//!
//! The diffing engine emits one [`EntryChange`] per key that differs between two
//! snapshots of a mapping and groups them into a [`MapChange`] for the property.

pub mod entry;
pub mod map;

pub use entry::{ENTRY_CHANGE_HASH_SEED, EntryChange, EntryChangeKind, EntryChangeType};
pub use map::MapChange;
