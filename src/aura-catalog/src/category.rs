//! Assistant categories (admin-managed).

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::CatalogError;

/// A gallery category with its display treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name from the platform icon set.
    pub icon: String,
    /// Hex accent color, `#RRGGBB`.
    pub color: String,
}

/// In-memory category registry.
#[derive(Debug)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRegistry {
    pub fn new() -> Self {
        let seed = [
            ("Productivity", "Briefcase", "#2563eb"),
            ("Writing", "FileText", "#16a34a"),
            ("Research & Analysis", "BarChart2", "#9333ea"),
            ("Programming", "Code", "#0891b2"),
            ("Marketing", "Megaphone", "#ea580c"),
            ("Education", "GraduationCap", "#ca8a04"),
            ("Lifestyle", "Users", "#db2777"),
        ];
        Self {
            categories: seed
                .iter()
                .map(|(name, icon, color)| Category {
                    id: Uuid::new_v4().to_string(),
                    name: (*name).to_string(),
                    icon: (*icon).to_string(),
                    color: (*color).to_string(),
                })
                .collect(),
        }
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Adds a category. Names must be unique (case-insensitive).
    pub fn add(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<&Category, CatalogError> {
        let name = name.into();
        if self.get_by_name(&name).is_some() {
            return Err(CatalogError::duplicate("category", name));
        }
        info!(%name, "category added");
        self.categories.push(Category {
            id: Uuid::new_v4().to_string(),
            name,
            icon: icon.into(),
            color: color.into(),
        });
        Ok(self.categories.last().expect("just pushed"))
    }

    /// Renames a category or changes its display treatment.
    pub fn update(
        &mut self,
        name: &str,
        new_name: Option<String>,
        icon: Option<String>,
        color: Option<String>,
    ) -> Result<(), CatalogError> {
        if let Some(ref candidate) = new_name {
            if !candidate.eq_ignore_ascii_case(name) && self.get_by_name(candidate).is_some() {
                return Err(CatalogError::duplicate("category", candidate.clone()));
            }
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::not_found("category", name))?;
        if let Some(new_name) = new_name {
            category.name = new_name;
        }
        if let Some(icon) = icon {
            category.icon = icon;
        }
        if let Some(color) = color {
            category.color = color;
        }
        info!(%name, "category updated");
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), CatalogError> {
        let before = self.categories.len();
        self.categories
            .retain(|c| !c.name.eq_ignore_ascii_case(name));
        if self.categories.len() == before {
            return Err(CatalogError::not_found("category", name));
        }
        info!(%name, "category removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_categories() {
        let registry = CategoryRegistry::new();
        assert!(registry.get_by_name("Writing").is_some());
        assert!(registry.get_by_name("writing").is_some());
        assert_eq!(registry.list().len(), 7);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut registry = CategoryRegistry::new();
        let err = registry.add("Writing", "Pen", "#ffffff").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));

        registry.add("Design", "Image", "#111111").unwrap();
        assert!(registry.get_by_name("Design").is_some());
    }

    #[test]
    fn test_update_and_remove() {
        let mut registry = CategoryRegistry::new();
        registry
            .update("Marketing", Some("Growth".into()), None, None)
            .unwrap();
        assert!(registry.get_by_name("Marketing").is_none());
        assert!(registry.get_by_name("Growth").is_some());

        registry.remove("Growth").unwrap();
        assert!(matches!(
            registry.remove("Growth"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_rename_onto_existing_rejected() {
        let mut registry = CategoryRegistry::new();
        let err = registry
            .update("Marketing", Some("Writing".into()), None, None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }
}
