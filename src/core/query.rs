// Estatery - core/query.rs
//
// The shared catalog query engine: category pre-selection, filtering,
// stable sorting, and pagination. Every listing surface (rent and buy
// pages, search results, admin dashboard) runs through this one path
// instead of reimplementing it.
//
// Core layer: a pure function of its inputs. Holds no state between calls,
// performs no I/O, and never fails: malformed input degrades to empty or
// best-effort results.

use crate::core::filter::FilterState;
use crate::core::model::{Category, Property};
use crate::core::price::parse_price;

// =============================================================================
// Query specification
// =============================================================================

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// No reordering; the curated input order is preserved.
    #[default]
    Featured,

    /// Ascending by parsed price.
    PriceLow,

    /// Descending by parsed price.
    PriceHigh,

    /// Descending by id. Larger id is treated as more recent: admin-added
    /// listings take epoch-millisecond ids, which dominate the small fixture
    /// ids. An approximation of recency, not a true timestamp.
    Newest,

    /// Ascending lexicographic by display title (admin dashboard).
    Title,
}

impl SortBy {
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Featured => "Featured",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
            SortBy::Newest => "Newest First",
            SortBy::Title => "Title A-Z",
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortBy::Featured),
            "price_low" => Ok(SortBy::PriceLow),
            "price_high" => Ok(SortBy::PriceHigh),
            "newest" => Ok(SortBy::Newest),
            "title" => Ok(SortBy::Title),
            other => Err(format!(
                "unknown sort order '{other}' (expected featured, price_low, \
                 price_high, newest, or title)"
            )),
        }
    }
}

/// Which slice of the filtered-and-sorted set to return.
///
/// Both modes go through the same slicing primitive; `total` always reports
/// the filtered-set length before slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSpec {
    /// The whole result set.
    #[default]
    All,

    /// Incremental reveal: the first `n` results ("Load More" style).
    VisibleCount(usize),

    /// True page window for the admin table/grid. `page` is 1-based.
    Window { page: usize, per_page: usize },
}

/// Complete query parameters.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    /// Restrict to one category before filtering. The rent and buy pages
    /// each pin their own category so listings never cross-contaminate;
    /// the admin dashboard passes `None` to see everything.
    pub category: Option<Category>,

    pub filter: FilterState,
    pub sort: SortBy,
    pub page: PageSpec,
}

/// Ordered, paginated query output.
#[derive(Debug)]
pub struct QueryResult<'a> {
    /// The requested page of listings, in final order.
    pub items: Vec<&'a Property>,

    /// Filtered-set size before pagination ("Showing X of `total`").
    pub total: usize,
}

// =============================================================================
// Query execution
// =============================================================================

/// Run a query and return indices into `properties`.
///
/// Returns `(ordered_indices, total)` where the indices are already
/// paginated and `total` is the filtered-set length pre-slice. Index form
/// avoids copying listings and lets callers that own the collection keep a
/// stable view into it.
pub fn query_indices(properties: &[Property], spec: &QuerySpec) -> (Vec<usize>, usize) {
    let mut working: Vec<usize> = properties
        .iter()
        .enumerate()
        .filter(|(_, p)| spec.category.map_or(true, |c| p.category == c))
        .filter(|(_, p)| spec.filter.matches(p))
        .map(|(idx, _)| idx)
        .collect();

    // All orderings use a stable sort so that listings comparing equal keep
    // their relative input order; repeated queries over unchanged input must
    // paginate deterministically.
    match spec.sort {
        SortBy::Featured => {}
        SortBy::PriceLow => {
            working.sort_by(|&a, &b| {
                parse_price(&properties[a].price).total_cmp(&parse_price(&properties[b].price))
            });
        }
        SortBy::PriceHigh => {
            working.sort_by(|&a, &b| {
                parse_price(&properties[b].price).total_cmp(&parse_price(&properties[a].price))
            });
        }
        SortBy::Newest => {
            working.sort_by(|&a, &b| properties[b].id.cmp(&properties[a].id));
        }
        SortBy::Title => {
            working.sort_by(|&a, &b| {
                properties[a]
                    .display_name
                    .cmp(&properties[b].display_name)
            });
        }
    }

    let total = working.len();
    let (start, end) = page_bounds(spec.page, total);
    working.truncate(end);
    working.drain(..start);
    (working, total)
}

/// Run a query and return listing references.
pub fn query<'a>(properties: &'a [Property], spec: &QuerySpec) -> QueryResult<'a> {
    let (indices, total) = query_indices(properties, spec);
    QueryResult {
        items: indices.into_iter().map(|idx| &properties[idx]).collect(),
        total,
    }
}

/// Resolve a page spec to a clamped `[start, end)` window over `total`
/// results. The single slicing primitive behind both pagination modes.
fn page_bounds(page: PageSpec, total: usize) -> (usize, usize) {
    let (start, end) = match page {
        PageSpec::All => (0, total),
        PageSpec::VisibleCount(n) => (0, n),
        PageSpec::Window { page, per_page } => {
            // Page numbers are 1-based; page 0 is treated as page 1.
            let page = page.max(1);
            let start = (page - 1).saturating_mul(per_page);
            (start, start.saturating_add(per_page))
        }
    };
    (start.min(total), end.min(total))
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::PropertyDefinition;

    fn listing(id: i64, price: &str, category: &str) -> Property {
        let def: PropertyDefinition = serde_json::from_str(&format!(
            r#"{{ "id": {id}, "name": "Listing {id}", "price": "{price}",
                 "category": "{category}", "type": "Apartment", "beds": 3,
                 "location": "Hyderabad" }}"#
        ))
        .unwrap();
        def.normalise()
    }

    fn ids(result: &QueryResult<'_>) -> Vec<i64> {
        result.items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_query_returns_input_order() {
        let properties = vec![
            listing(3, "₹30,000", "rent"),
            listing(1, "₹10,000", "rent"),
            listing(2, "₹20,000", "rent"),
        ];
        let result = query(&properties, &QuerySpec::default());
        assert_eq!(ids(&result), vec![3, 1, 2]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_category_isolation() {
        let properties = vec![
            listing(1, "₹25,000", "rent"),
            listing(101, "₹1.5 Cr", "buy"),
            listing(2, "₹18,000", "rent"),
            listing(102, "₹85 Lakhs", "buy"),
        ];

        let rentals = query(
            &properties,
            &QuerySpec {
                category: Some(Category::Rent),
                ..Default::default()
            },
        );
        assert_eq!(ids(&rentals), vec![1, 2]);
        assert!(rentals.items.iter().all(|p| p.category == Category::Rent));

        let sales = query(
            &properties,
            &QuerySpec {
                category: Some(Category::Buy),
                ..Default::default()
            },
        );
        assert_eq!(ids(&sales), vec![101, 102]);
    }

    #[test]
    fn test_price_low_sorts_by_parsed_units() {
        // ₹85 Lakhs (8.5M) is cheaper than ₹1.5 Cr (15M) even though the
        // literal 85 is larger than 1.5.
        let properties = vec![listing(101, "₹1.5 Cr", "buy"), listing(102, "₹85 Lakhs", "buy")];
        let result = query(
            &properties,
            &QuerySpec {
                sort: SortBy::PriceLow,
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![102, 101]);
    }

    #[test]
    fn test_price_high_is_reverse_of_price_low() {
        let properties = vec![
            listing(1, "₹18,000", "rent"),
            listing(2, "₹35,000", "rent"),
            listing(3, "₹25,000", "rent"),
        ];
        let result = query(
            &properties,
            &QuerySpec {
                sort: SortBy::PriceHigh,
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        // Two listings share a price; their relative input order must
        // survive the sort in both directions.
        let properties = vec![
            listing(7, "₹25,000", "rent"),
            listing(4, "₹25,000", "rent"),
            listing(9, "₹10,000", "rent"),
        ];

        let ascending = query(
            &properties,
            &QuerySpec {
                sort: SortBy::PriceLow,
                ..Default::default()
            },
        );
        assert_eq!(ids(&ascending), vec![9, 7, 4]);

        let descending = query(
            &properties,
            &QuerySpec {
                sort: SortBy::PriceHigh,
                ..Default::default()
            },
        );
        assert_eq!(ids(&descending), vec![7, 4, 9]);
    }

    #[test]
    fn test_newest_sorts_by_id_descending() {
        let properties = vec![
            listing(2, "₹20,000", "rent"),
            listing(1700000000000, "₹30,000", "rent"),
            listing(5, "₹10,000", "rent"),
        ];
        let result = query(
            &properties,
            &QuerySpec {
                sort: SortBy::Newest,
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![1700000000000, 5, 2]);
    }

    #[test]
    fn test_title_sorts_lexicographically() {
        let mut a = listing(1, "₹20,000", "rent");
        a.display_name = "Skyline Apartments".to_string();
        let mut b = listing(2, "₹30,000", "rent");
        b.display_name = "Cozy Nest".to_string();
        let mut c = listing(3, "₹10,000", "rent");
        c.display_name = "Green Valley".to_string();

        let properties = vec![a, b, c];
        let result = query(
            &properties,
            &QuerySpec {
                sort: SortBy::Title,
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_visible_count_slice() {
        let properties: Vec<Property> = (1..=5)
            .map(|id| listing(id, "₹20,000", "rent"))
            .collect();
        let result = query(
            &properties,
            &QuerySpec {
                page: PageSpec::VisibleCount(3),
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![1, 2, 3]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_visible_count_beyond_total_returns_everything() {
        let properties: Vec<Property> = (1..=3)
            .map(|id| listing(id, "₹20,000", "rent"))
            .collect();
        let result = query(
            &properties,
            &QuerySpec {
                page: PageSpec::VisibleCount(50),
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_covers_every_listing_exactly_once() {
        let properties: Vec<Property> = (1..=11)
            .map(|id| listing(id, "₹20,000", "rent"))
            .collect();

        for per_page in 1..=12 {
            let total_pages = properties.len().div_ceil(per_page);
            let mut seen: Vec<i64> = Vec::new();
            for page in 1..=total_pages {
                let result = query(
                    &properties,
                    &QuerySpec {
                        page: PageSpec::Window { page, per_page },
                        ..Default::default()
                    },
                );
                assert_eq!(result.total, properties.len());
                seen.extend(result.items.iter().map(|p| p.id));
            }
            let expected: Vec<i64> = (1..=11).collect();
            assert_eq!(seen, expected, "per_page={per_page}");
        }
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        let properties: Vec<Property> = (1..=3)
            .map(|id| listing(id, "₹20,000", "rent"))
            .collect();
        let result = query(
            &properties,
            &QuerySpec {
                page: PageSpec::Window {
                    page: 5,
                    per_page: 10,
                },
                ..Default::default()
            },
        );
        assert!(result.items.is_empty());
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_filter_composes_with_sort_and_pagination() {
        let properties = vec![
            listing(1, "₹25,000", "rent"),
            listing(2, "₹9,000", "rent"),
            listing(3, "₹12,000", "rent"),
            listing(101, "₹1.5 Cr", "buy"),
            listing(4, "₹24,000", "rent"),
        ];

        let spec = QuerySpec {
            category: Some(Category::Rent),
            filter: FilterState {
                budget: "₹10k - ₹25k".to_string(),
                ..Default::default()
            },
            sort: SortBy::PriceLow,
            page: PageSpec::VisibleCount(2),
        };
        let result = query(&properties, &spec);
        assert_eq!(ids(&result), vec![3, 4]);
        assert_eq!(result.total, 3); // 25,000 is inside the band (inclusive)
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = query(&[], &QuerySpec::default());
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
    }
}
