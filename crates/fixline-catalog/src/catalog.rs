//! Catalog trait and ordering contract

use async_trait::async_trait;
use fixline_core::{Category, Department, Result};

/// Read access to the department/category catalog.
///
/// `categories_in` must return categories ordered by name ascending, then
/// slug ascending. The router breaks score ties by taking the first category
/// seen, so a stable fetch order is part of this contract, not an
/// implementation detail.
#[async_trait]
pub trait CategoryCatalog: Send + Sync {
    /// Categories owned by the given department, in contract order.
    ///
    /// An unknown department yields an empty list, not an error.
    async fn categories_in(&self, department_id: &str) -> Result<Vec<Category>>;

    /// Look up a single department by id.
    async fn department(&self, department_id: &str) -> Result<Option<Department>>;

    /// All departments, ordered by name ascending.
    async fn departments(&self) -> Result<Vec<Department>>;
}

/// Sort categories into contract order (name ascending, then slug).
pub(crate) fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
}
