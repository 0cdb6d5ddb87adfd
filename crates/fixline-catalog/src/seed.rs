//! Seed file loading and the built-in campus dataset

use crate::memory::MemoryCatalog;
use fixline_core::{types::DEFAULT_ESCALATE_AFTER_HRS, Category, Department, Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

/// Declarative catalog seed, loaded from YAML or built in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSeed {
    /// Departments with their nested categories
    pub departments: Vec<DepartmentSeed>,
}

/// A department entry in the seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSeed {
    /// Display name
    pub name: String,

    /// Stable lowercase key
    pub slug: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hours before an unresolved complaint escalates
    #[serde(default = "default_escalation")]
    pub escalate_after_hrs: u32,

    /// Categories owned by this department
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
}

/// A category entry in the seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySeed {
    /// Display name
    pub name: String,

    /// Stable lowercase key used to look up the keyword set
    pub slug: String,
}

fn default_escalation() -> u32 {
    DEFAULT_ESCALATE_AFTER_HRS
}

impl CatalogSeed {
    /// Parse a seed from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse catalog seed: {}", e)))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load a seed from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// The campus dataset shipped with Fixline: Hostel, Water, Internet,
    /// and Security departments with their routing categories.
    pub fn campus_default() -> Self {
        Self {
            departments: vec![
                DepartmentSeed {
                    name: "Hostel".to_string(),
                    slug: "hostel".to_string(),
                    description: Some("Hostel and accommodation".to_string()),
                    escalate_after_hrs: 48,
                    categories: vec![
                        category_seed("Room Maintenance", "room-maintenance"),
                        category_seed("Mess/Cafeteria", "mess"),
                    ],
                },
                DepartmentSeed {
                    name: "Water".to_string(),
                    slug: "water".to_string(),
                    description: Some("Water supply and plumbing".to_string()),
                    escalate_after_hrs: 24,
                    categories: vec![
                        category_seed("Leakage", "leakage"),
                        category_seed("Water Quality", "water-quality"),
                    ],
                },
                DepartmentSeed {
                    name: "Internet".to_string(),
                    slug: "internet".to_string(),
                    description: Some("Network and connectivity".to_string()),
                    escalate_after_hrs: 24,
                    categories: vec![
                        category_seed("WiFi", "wifi"),
                        category_seed("LAN", "lan"),
                    ],
                },
                DepartmentSeed {
                    name: "Security".to_string(),
                    slug: "security".to_string(),
                    description: Some("Campus safety and security".to_string()),
                    escalate_after_hrs: 12,
                    categories: vec![
                        category_seed("Gate", "gate"),
                        category_seed("Surveillance", "surveillance"),
                    ],
                },
            ],
        }
    }

    /// Check slugs and names before building a catalog
    pub fn validate(&self) -> Result<()> {
        let slug_re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$")
            .map_err(|e| Error::internal(format!("failed to compile slug regex: {}", e)))?;

        let mut department_slugs = HashSet::new();
        let mut category_slugs = HashSet::new();

        for dept in &self.departments {
            if dept.name.trim().is_empty() {
                return Err(Error::config("department name must not be empty"));
            }
            if !slug_re.is_match(&dept.slug) {
                return Err(Error::config(format!(
                    "invalid department slug: {:?}",
                    dept.slug
                )));
            }
            if !department_slugs.insert(dept.slug.as_str()) {
                return Err(Error::config(format!(
                    "duplicate department slug: {:?}",
                    dept.slug
                )));
            }

            for category in &dept.categories {
                if category.name.trim().is_empty() {
                    return Err(Error::config(format!(
                        "category name must not be empty (department {:?})",
                        dept.slug
                    )));
                }
                if !slug_re.is_match(&category.slug) {
                    return Err(Error::config(format!(
                        "invalid category slug: {:?}",
                        category.slug
                    )));
                }
                if !category_slugs.insert(category.slug.as_str()) {
                    return Err(Error::config(format!(
                        "duplicate category slug: {:?}",
                        category.slug
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build an in-memory catalog, minting ids for every record
    pub fn build(&self) -> Result<MemoryCatalog> {
        self.validate()?;

        let mut catalog = MemoryCatalog::new();
        let mut category_count = 0usize;

        for dept in &self.departments {
            let department_id = Uuid::new_v4().to_string();

            let mut department =
                Department::new(&department_id, &dept.name, &dept.slug)
                    .with_escalation(dept.escalate_after_hrs);
            if let Some(description) = &dept.description {
                department = department.with_description(description);
            }
            catalog = catalog.with_department(department);

            for category in &dept.categories {
                catalog = catalog.with_category(Category::new(
                    Uuid::new_v4().to_string(),
                    &category.name,
                    &category.slug,
                    &department_id,
                ));
                category_count += 1;
            }
        }

        info!(
            departments = self.departments.len(),
            categories = category_count,
            "catalog seed loaded"
        );

        Ok(catalog)
    }
}

fn category_seed(name: &str, slug: &str) -> CategorySeed {
    CategorySeed {
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;

    #[test]
    fn test_campus_default_is_valid() {
        let seed = CatalogSeed::campus_default();
        seed.validate().unwrap();
        assert_eq!(seed.departments.len(), 4);
    }

    #[tokio::test]
    async fn test_build_links_categories_to_departments() {
        let catalog = CatalogSeed::campus_default().build().unwrap();
        assert_eq!(catalog.department_count(), 4);
        assert_eq!(catalog.category_count(), 8);

        let water = catalog.department_by_slug("water").unwrap().clone();
        let categories = catalog.categories_in(&water.id).await.unwrap();
        let slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["leakage", "water-quality"]);
    }

    #[test]
    fn test_seed_yaml_roundtrip() {
        let seed = CatalogSeed::campus_default();
        let yaml = serde_yaml::to_string(&seed).unwrap();
        let parsed = CatalogSeed::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.departments.len(), seed.departments.len());
    }

    #[test]
    fn test_rejects_invalid_slug() {
        let yaml = r#"
departments:
  - name: Water
    slug: "Water Dept"
"#;
        let err = CatalogSeed::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, fixline_core::Error::Config(_)));
    }

    #[test]
    fn test_rejects_duplicate_category_slug() {
        let yaml = r#"
departments:
  - name: Water
    slug: water
    categories:
      - name: Leakage
        slug: leakage
      - name: Leaks Again
        slug: leakage
"#;
        let err = CatalogSeed::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, fixline_core::Error::Config(_)));
    }

    #[test]
    fn test_escalation_defaults_when_omitted() {
        let yaml = r#"
departments:
  - name: Water
    slug: water
"#;
        let seed = CatalogSeed::from_yaml(yaml).unwrap();
        assert_eq!(seed.departments[0].escalate_after_hrs, 48);
    }

    #[test]
    fn test_from_file() {
        let seed = CatalogSeed::campus_default();
        let yaml = serde_yaml::to_string(&seed).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, yaml).unwrap();

        let loaded = CatalogSeed::from_file(&path).unwrap();
        assert_eq!(loaded.departments.len(), 4);
    }
}
