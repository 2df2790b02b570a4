// Estatery - core/filter.rs
//
// Composable filter predicate for property listings.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Category, Property, PropertyKind};
use crate::core::price::parse_price;
use crate::util::constants;

/// Complete filter state. All fields are AND-combined when applied.
///
/// Every field has a sentinel default meaning "no constraint": the default
/// option of the corresponding search control. A field left at its sentinel
/// does not filter; unknown values in `budget` behave the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Location constraint (case-insensitive substring containment).
    /// Sentinel: the whole-city default `"Hyderabad, India"`.
    pub location: String,

    /// Building type constraint (exact label match). Sentinel: `"All Types"`.
    /// For rental listings the value `"Full House"` is a synonym class
    /// matching either `House` or `Villa`.
    pub property_type: String,

    /// Bedroom-count constraint, e.g. `"3"` (exactly three) or `"3+"`
    /// (three or more). Sentinel: `"Any"`.
    pub bhk: String,

    /// Named budget band over the parsed price. Sentinels: `"Any Price"`
    /// (sale searches) and `"Any Budget"` (rental searches).
    pub budget: String,

    /// Case-insensitive substring search over title and location.
    /// Empty = no filter.
    pub text_search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location: constants::ANY_LOCATION.to_string(),
            property_type: constants::ALL_TYPES.to_string(),
            bhk: constants::ANY_BHK.to_string(),
            budget: constants::ANY_PRICE.to_string(),
            text_search: String::new(),
        }
    }
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.location == constants::ANY_LOCATION
            && self.property_type == constants::ALL_TYPES
            && self.bhk == constants::ANY_BHK
            && budget_is_sentinel(&self.budget)
            && self.text_search.is_empty()
    }

    /// Number of non-sentinel fields, for "N filters active" display.
    pub fn active_count(&self) -> usize {
        [
            self.location != constants::ANY_LOCATION,
            self.property_type != constants::ALL_TYPES,
            self.bhk != constants::ANY_BHK,
            !budget_is_sentinel(&self.budget),
            !self.text_search.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Check if a single listing passes all active filters.
    ///
    /// Pure and total: malformed prices degrade to 0, missing fields were
    /// already normalised to sentinel-safe defaults, and an unrecognised
    /// budget band simply does not filter.
    pub fn matches(&self, property: &Property) -> bool {
        // Location: case-insensitive substring containment.
        if self.location != constants::ANY_LOCATION
            && !property
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
        {
            return false;
        }

        // Building type: exact label match, with the rental "Full House"
        // synonym class covering both House and Villa.
        if self.property_type != constants::ALL_TYPES {
            let matched = if self.property_type == constants::FULL_HOUSE
                && property.category == Category::Rent
            {
                matches!(property.kind, PropertyKind::House | PropertyKind::Villa)
            } else {
                property.kind.label() == self.property_type
            };
            if !matched {
                return false;
            }
        }

        // Bedroom count: "N+" means at least N, bare "N" means exactly N.
        if self.bhk != constants::ANY_BHK {
            if let Some(n) = leading_integer(&self.bhk) {
                if self.bhk.ends_with('+') {
                    if property.beds < n {
                        return false;
                    }
                } else if property.beds != n {
                    return false;
                }
            }
            // A bhk value with no leading integer places no constraint.
        }

        // Budget band over the parsed price.
        if !budget_is_sentinel(&self.budget)
            && !budget_allows(&self.budget, property.category, parse_price(&property.price))
        {
            return false;
        }

        // Text search over title and location.
        if !self.text_search.is_empty() {
            let needle = self.text_search.to_lowercase();
            if !property.display_name.to_lowercase().contains(&needle)
                && !property.location.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }
}

/// Both budget sentinels mean "no constraint" regardless of search type.
fn budget_is_sentinel(budget: &str) -> bool {
    budget == constants::ANY_PRICE || budget == constants::ANY_BUDGET
}

/// Leading unsigned integer of a filter string, e.g. 3 for "3+" or "3 BHK".
fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Check a parsed price against a named budget band.
///
/// Bands differ for sale and rental listings; range bands are inclusive at
/// both ends. An unrecognised band name does not filter.
fn budget_allows(band: &str, category: Category, price: f64) -> bool {
    use crate::util::constants::{
        RENT_BAND_HIGH, RENT_BAND_LOW, RENT_BAND_MID, SALE_BAND_HIGH, SALE_BAND_LOW, SALE_BAND_MID,
    };

    match category {
        Category::Buy => match band {
            "Under ₹50 L" => price < SALE_BAND_LOW,
            "₹50 L - ₹1 Cr" => price >= SALE_BAND_LOW && price <= SALE_BAND_MID,
            "₹1 Cr - ₹3 Cr" => price >= SALE_BAND_MID && price <= SALE_BAND_HIGH,
            "Above ₹3 Cr" => price > SALE_BAND_HIGH,
            _ => true,
        },
        Category::Rent => match band {
            "Under ₹10k" => price < RENT_BAND_LOW,
            "₹10k - ₹25k" => price >= RENT_BAND_LOW && price <= RENT_BAND_MID,
            "₹25k - ₹50k" => price >= RENT_BAND_MID && price <= RENT_BAND_HIGH,
            "Above ₹50k" => price > RENT_BAND_HIGH,
            _ => true,
        },
    }
}

// =============================================================================
// Unit tests
// =============================================================================
