// Estatery - core/stats.rs
//
// Catalog summary statistics for the admin dashboard tiles.
// Single pass over the collection; prices go through the shared parser.

use crate::core::model::{Category, Property, PropertyKind};
use crate::core::price::parse_price;

/// Summary figures over the whole catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    /// Total listings.
    pub total: usize,

    /// Listings in the buy category.
    pub for_sale: usize,

    /// Listings in the rent category.
    pub for_rent: usize,

    /// Count of apartment listings.
    pub apartments: usize,

    /// Count of villa listings.
    pub villas: usize,

    /// Count of house listings.
    pub houses: usize,

    /// Mean parsed price across all listings; 0 for an empty catalog.
    pub average_price: f64,
}

impl CatalogStats {
    /// Compute all figures in one pass.
    pub fn compute(properties: &[Property]) -> Self {
        let mut stats = CatalogStats {
            total: properties.len(),
            ..Default::default()
        };

        let mut price_sum = 0.0;
        for property in properties {
            match property.category {
                Category::Buy => stats.for_sale += 1,
                Category::Rent => stats.for_rent += 1,
            }
            match property.kind {
                PropertyKind::Apartment => stats.apartments += 1,
                PropertyKind::Villa => stats.villas += 1,
                PropertyKind::House => stats.houses += 1,
                _ => {}
            }
            price_sum += parse_price(&property.price);
        }

        if stats.total > 0 {
            stats.average_price = price_sum / stats.total as f64;
        }
        stats
    }
}

// =============================================================================
// Unit tests
// =============================================================================
