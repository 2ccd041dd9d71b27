use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Read-only reference data mapping product names to shelf-life months,
/// loaded from a `[products]` TOML table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfLifeCatalog {
    products: HashMap<String, u32>,
}

impl ShelfLifeCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: ShelfLifeCatalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Validate for ShelfLifeCatalog {
    fn validate(&self) -> Result<()> {
        for (name, &months) in &self.products {
            validate_non_empty_string("products", name)?;
            validate_range("shelf_life_months", months, 0, 600)?;
        }
        Ok(())
    }
}

impl Catalog for ShelfLifeCatalog {
    fn shelf_life_months(&self, name: &str) -> Option<u32> {
        self.products.get(name).copied()
    }

    fn matching(&self, input: &str) -> Vec<String> {
        let needle = input.trim();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut names: Vec<String> = self
            .products
            .keys()
            .filter(|name| name.contains(needle))
            .cloned()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[products]
"아삭 오이 피클" = 6
"아삭 오이&무 피클" = 6
"#;

    #[test]
    fn test_load_and_lookup() {
        let catalog = ShelfLifeCatalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.shelf_life_months("아삭 오이 피클"), Some(6));
        assert_eq!(catalog.shelf_life_months("없는 제품"), None);
    }

    #[test]
    fn test_substring_matching() {
        let catalog = ShelfLifeCatalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.matching("오이").len(), 2);
        assert_eq!(catalog.matching("무"), vec!["아삭 오이&무 피클".to_string()]);
        assert!(catalog.matching("  ").is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_months() {
        let bad = r#"
[products]
"영원한 피클" = 9999
"#;
        assert!(ShelfLifeCatalog::from_toml(bad).is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(ShelfLifeCatalog::from_toml("not toml at all [").is_err());
    }
}
