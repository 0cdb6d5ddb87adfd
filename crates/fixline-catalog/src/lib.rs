//! Fixline Catalog
//!
//! Read access to the department/category catalog that the router scores
//! against. The catalog is seeded/admin-managed and immutable from the
//! router's viewpoint; this crate provides the collaborator trait, an
//! in-memory implementation, and YAML seed loading.

pub mod catalog;
pub mod memory;
pub mod seed;

pub use catalog::CategoryCatalog;
pub use memory::MemoryCatalog;
pub use seed::{CatalogSeed, CategorySeed, DepartmentSeed};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::CategoryCatalog;
    pub use crate::memory::MemoryCatalog;
    pub use crate::seed::CatalogSeed;
}
