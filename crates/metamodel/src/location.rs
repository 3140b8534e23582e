//! Declarative persistence-location metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MetamodelError, MetamodelResult};

/// Names the collection or table where a type's audit snapshots are persisted.
///
/// This is pure metadata with no behavior of its own; a type carries it at most
/// once because a trait can only be implemented once per type. The registry
/// reads it through [`crate::PersistenceRegistry::register`].
///
/// Prefer the [`persistence_location!`](crate::persistence_location) macro:
///
/// ```
/// use auditdiff_metamodel::{PersistenceLocation, persistence_location};
///
/// struct Order;
/// persistence_location!(Order, "orders_audit");
///
/// assert_eq!(Order::TYPE_NAME, "Order");
/// assert_eq!(Order::LOCATION, "orders_audit");
/// ```
pub trait PersistenceLocation {
    /// Identifier of the annotated type in the registry.
    const TYPE_NAME: &'static str;

    /// The collection or table name used when persisting.
    const LOCATION: &'static str;
}

/// Attach a [`PersistenceLocation`] to a type.
///
/// The type name defaults to the identifier; pass `type_name = "..."` to
/// register under a different one.
#[macro_export]
macro_rules! persistence_location {
    ($ty:ident, $location:expr) => {
        $crate::persistence_location!($ty, $location, type_name = stringify!($ty));
    };
    ($ty:ident, $location:expr, type_name = $type_name:expr) => {
        impl $crate::PersistenceLocation for $ty {
            const TYPE_NAME: &'static str = $type_name;
            const LOCATION: &'static str = $location;
        }
    };
}

/// Plain table of type name to persistence location.
///
/// The data-only counterpart of [`PersistenceLocation`], for types whose
/// locations come from configuration rather than code:
///
/// ```json
/// { "locations": { "Order": "orders_audit", "Customer": "customers_audit" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceTable {
    #[serde(default)]
    locations: BTreeMap<String, String>,
}

impl PersistenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> MetamodelResult<Self> {
        serde_json::from_str(json).map_err(|e| MetamodelError::InvalidTable(e.to_string()))
    }

    pub fn with(mut self, type_name: impl Into<String>, location: impl Into<String>) -> Self {
        self.locations.insert(type_name.into(), location.into());
        self
    }

    /// Entries ordered by type name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.locations
            .iter()
            .map(|(type_name, location)| (type_name.as_str(), location.as_str()))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;
    crate::persistence_location!(Invoice, "invoices_audit", type_name = "billing.Invoice");

    #[test]
    fn macro_allows_explicit_type_name() {
        assert_eq!(Invoice::TYPE_NAME, "billing.Invoice");
        assert_eq!(Invoice::LOCATION, "invoices_audit");
    }

    #[test]
    fn table_parses_from_json() {
        let table = PersistenceTable::from_json(
            r#"{ "locations": { "Order": "orders_audit", "Customer": "customers_audit" } }"#,
        )
        .unwrap();

        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("Customer", "customers_audit"), ("Order", "orders_audit")]
        );
    }

    #[test]
    fn missing_locations_key_is_an_empty_table() {
        assert!(PersistenceTable::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = PersistenceTable::from_json(r#"{ "locations": [] }"#).unwrap_err();
        assert!(matches!(err, MetamodelError::InvalidTable(_)));
    }

    #[test]
    fn builder_overwrites_same_type() {
        let table = PersistenceTable::new()
            .with("Order", "a")
            .with("Order", "orders_audit");
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next(), Some(("Order", "orders_audit")));
    }
}
