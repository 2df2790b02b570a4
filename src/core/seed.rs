// Estatery - core/seed.rs
//
// Embedded seed listings used whenever no catalog store exists yet or the
// stored data is unreadable. Compiled into the binary with include_str! so
// a fresh install always has a populated catalog regardless of the working
// directory at runtime.

use crate::core::model::{Property, PropertyDefinition};

/// Embedded seed sources. Each tuple is (filename, JSON content).
pub fn seed_sources() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "rental_listings.json",
            include_str!("../../seed/rental_listings.json"),
        ),
        (
            "sale_listings.json",
            include_str!("../../seed/sale_listings.json"),
        ),
    ]
}

/// Build the full seed catalog: rentals first, then sale listings, each
/// normalised into canonical form.
///
/// The embedded JSON is part of the crate and covered by tests, so a parse
/// failure here is a build defect rather than a runtime condition.
pub fn seed_catalog() -> Vec<Property> {
    let mut catalog = Vec::new();
    for (filename, content) in seed_sources() {
        let definitions: Vec<PropertyDefinition> = serde_json::from_str(content)
            .unwrap_or_else(|e| panic!("embedded seed '{filename}' is malformed: {e}"));
        catalog.extend(definitions.into_iter().map(PropertyDefinition::normalise));
    }
    catalog
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;
    use crate::core::price::parse_price;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog_parses_and_is_populated() {
        let catalog = seed_catalog();
        assert!(catalog.len() >= 12);
        assert!(catalog.iter().any(|p| p.category == Category::Rent));
        assert!(catalog.iter().any(|p| p.category == Category::Buy));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = seed_catalog();
        let ids: HashSet<i64> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_prices_all_parse() {
        for property in seed_catalog() {
            assert!(
                parse_price(&property.price) > 0.0,
                "listing {} has unparseable price '{}'",
                property.id,
                property.price
            );
        }
    }

    #[test]
    fn test_seed_records_are_complete() {
        for property in seed_catalog() {
            assert!(!property.display_name.is_empty());
            assert!(!property.location.is_empty());
            assert!(!property.image_list.is_empty());
            assert!(property.agent.is_some());
        }
    }
}
