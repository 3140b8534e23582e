//! Type-level metadata consumed when audited types are registered.

pub mod error;
pub mod location;
pub mod registry;

pub use error::{MetamodelError, MetamodelResult};
pub use location::{PersistenceLocation, PersistenceTable};
pub use registry::PersistenceRegistry;
