//! Registration of audited types and resolution of their storage identifiers.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{MetamodelError, MetamodelResult};
use crate::location::{PersistenceLocation, PersistenceTable};

/// Maps type names to the identifier of their audit storage target.
///
/// Populated once at setup (`&mut self`) and read afterwards (`&self`). The
/// registry only hands back the identifier; turning it into an actual table or
/// collection is up to the storage layer.
#[derive(Debug, Clone, Default)]
pub struct PersistenceRegistry {
    locations: BTreeMap<String, String>,
}

impl PersistenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type from its declarative [`PersistenceLocation`].
    pub fn register<T: PersistenceLocation>(&mut self) -> MetamodelResult<()> {
        self.register_named(T::TYPE_NAME, T::LOCATION)
    }

    /// Register a type by name.
    ///
    /// Registering the same location twice is a no-op; a different location for
    /// an already registered type is rejected.
    pub fn register_named(
        &mut self,
        type_name: impl Into<String>,
        location: impl Into<String>,
    ) -> MetamodelResult<()> {
        let type_name = type_name.into();
        let location = location.into();
        if self.check(&type_name, &location)? {
            debug!(type_name = %type_name, location = %location, "persistence location already registered");
            return Ok(());
        }

        debug!(type_name = %type_name, location = %location, "registered persistence location");
        self.locations.insert(type_name, location);
        Ok(())
    }

    /// Register every entry of `table`.
    ///
    /// All entries are validated first; on error nothing is registered.
    pub fn register_table(&mut self, table: &PersistenceTable) -> MetamodelResult<()> {
        for (type_name, location) in table.iter() {
            self.check(type_name, location)?;
        }
        for (type_name, location) in table.iter() {
            self.register_named(type_name, location)?;
        }
        Ok(())
    }

    /// Validates an entry; `Ok(true)` when the exact entry is already present.
    fn check(&self, type_name: &str, location: &str) -> MetamodelResult<bool> {
        if type_name.trim().is_empty() {
            warn!("rejected persistence registration without a type name");
            return Err(MetamodelError::InvalidTypeName);
        }
        if location.trim().is_empty() {
            warn!(type_name = %type_name, "rejected empty persistence location");
            return Err(MetamodelError::EmptyLocation(type_name.to_string()));
        }
        match self.locations.get(type_name) {
            Some(existing) if existing == location => Ok(true),
            Some(existing) => {
                warn!(
                    type_name = %type_name,
                    existing = %existing,
                    requested = %location,
                    "conflicting persistence location"
                );
                Err(MetamodelError::ConflictingLocation {
                    type_name: type_name.to_string(),
                    existing: existing.clone(),
                    requested: location.to_string(),
                })
            }
            None => Ok(false),
        }
    }

    /// The location registered for `type_name`, exactly as given.
    pub fn resolve(&self, type_name: &str) -> Option<&str> {
        self.locations.get(type_name).map(String::as_str)
    }

    pub fn location_for(&self, type_name: &str) -> MetamodelResult<&str> {
        self.resolve(type_name)
            .ok_or_else(|| MetamodelError::NotRegistered(type_name.to_string()))
    }

    pub fn location_of<T: PersistenceLocation>(&self) -> MetamodelResult<&str> {
        self.location_for(T::TYPE_NAME)
    }

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
