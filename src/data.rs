//! Embedded Adhkar Catalog
//!
//! The content catalog is generated offline and shipped inside the binary.

use crate::models::Catalog;

static CATALOG_JSON: &str = include_str!("../assets/adhkar.json");

/// Parse the embedded catalog. A malformed catalog degrades to an empty
/// one (the UI then shows the empty-state notice) rather than panicking.
pub fn load_catalog() -> Catalog {
    match serde_json::from_str(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            web_sys::console::error_1(
                &format!("[DATA] failed to parse embedded catalog: {}", err).into(),
            );
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountSpec;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        assert!(!catalog.categories.is_empty());

        // Every category carries a key, a title, and at least one item
        for cat in &catalog.categories {
            assert!(!cat.key.is_empty());
            assert!(!cat.title.is_empty());
            assert!(!cat.items.is_empty(), "category {} has no items", cat.key);
        }
    }

    #[test]
    fn test_embedded_catalog_ordering() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.first_key().as_deref(), Some("azkhar_tayyiba"));
    }

    #[test]
    fn test_embedded_catalog_has_unbounded_items() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        let unbounded = catalog
            .categories
            .iter()
            .flat_map(|c| &c.items)
            .filter(|i| i.count == CountSpec::Unbounded)
            .count();
        assert!(unbounded > 0);
    }
}
