//! In-memory catalog implementation

use crate::catalog::{sort_categories, CategoryCatalog};
use async_trait::async_trait;
use fixline_core::{Category, Department, Result};

/// In-memory catalog backed by seeded departments and categories.
///
/// Suitable for tests, the CLI, and deployments where the catalog is small
/// and admin-managed. Reads enforce the ordering contract regardless of
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    departments: Vec<Department>,
    categories: Vec<Category>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a department
    pub fn with_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    /// Add a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Number of seeded departments
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Number of seeded categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Resolve a department by slug (CLI convenience, not part of the trait)
    pub fn department_by_slug(&self, slug: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.slug == slug)
    }
}

#[async_trait]
impl CategoryCatalog for MemoryCatalog {
    async fn categories_in(&self, department_id: &str) -> Result<Vec<Category>> {
        let mut matching: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.department_id == department_id)
            .cloned()
            .collect();

        sort_categories(&mut matching);
        Ok(matching)
    }

    async fn department(&self, department_id: &str) -> Result<Option<Department>> {
        Ok(self
            .departments
            .iter()
            .find(|d| d.id == department_id)
            .cloned())
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        let mut all = self.departments.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
