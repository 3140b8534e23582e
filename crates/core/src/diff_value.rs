//! Capability required from anything used as a mapping key or value in a diff.

use core::fmt::Debug;
use core::hash::Hash;

/// Minimal "comparable and hashable" capability.
///
/// Domain types never implement this by hand: the blanket impl below covers
/// every `Eq + Hash + Debug` type, so user-defined keys keep their own equality
/// and hashing without knowing the diff layer exists.
///
/// ```
/// use auditdiff_core::DiffValue;
///
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// struct Sku(String);
///
/// fn accepts<T: DiffValue>(_: &T) {}
/// accepts(&Sku("A-1".into()));
/// accepts(&42_u32);
/// ```
pub trait DiffValue: Eq + Hash + Debug {}

impl<T: Eq + Hash + Debug + ?Sized> DiffValue for T {}
