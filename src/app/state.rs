// Estatery - app/state.rs
//
// Application state management. Holds the catalog, the favourites set,
// the current query parameters, and the derived result view. Owned by
// whatever front end drives the engine (here, the CLI binary).

use crate::app::session::AdminSession;
use crate::core::filter::FilterState;
use crate::core::model::{Category, Property};
use crate::core::query::{self, PageSpec, QuerySpec, SortBy};
use crate::util::constants;

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The mutable property catalog (admin CRUD target).
    pub catalog: Vec<Property>,

    /// Favourited listings: independent snapshots keyed by id, not
    /// references into the catalog.
    pub favourites: Vec<Property>,

    /// Category pin of the current page (None on the admin dashboard).
    pub category: Option<Category>,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Current sort order.
    pub sort_by: SortBy,

    /// How many results the current page reveals ("Load More" state).
    pub visible_count: usize,

    /// Indices of listings in the current view (into `catalog`), already
    /// filtered, sorted, and sliced.
    pub view_indices: Vec<usize>,

    /// Filtered-set size behind the slice ("Showing X of Y").
    pub view_total: usize,

    /// Admin session gating catalog mutation.
    pub admin: AdminSession,
}

impl AppState {
    /// Create initial state from loaded stores.
    pub fn new(catalog: Vec<Property>, favourites: Vec<Property>, admin: AdminSession) -> Self {
        Self {
            catalog,
            favourites,
            category: None,
            filter_state: FilterState::default(),
            sort_by: SortBy::default(),
            visible_count: constants::DEFAULT_VISIBLE_COUNT,
            view_indices: Vec::new(),
            view_total: 0,
            admin,
        }
    }

    /// Recompute the result view from the current catalog and query state.
    pub fn apply_query(&mut self) {
        let spec = QuerySpec {
            category: self.category,
            filter: self.filter_state.clone(),
            sort: self.sort_by,
            page: PageSpec::VisibleCount(self.visible_count),
        };
        let (indices, total) = query::query_indices(&self.catalog, &spec);
        self.view_indices = indices;
        self.view_total = total;
    }

    /// Listings in the current view, in display order.
    pub fn view_properties(&self) -> Vec<&Property> {
        self.view_indices
            .iter()
            .filter_map(|&idx| self.catalog.get(idx))
            .collect()
    }

    /// Reveal the next batch of results and recompute the view.
    pub fn load_more(&mut self) {
        self.visible_count = (self.visible_count + constants::LOAD_MORE_STEP)
            .min(self.view_total.max(constants::DEFAULT_VISIBLE_COUNT));
        self.apply_query();
    }

    /// Collapse back to the initial reveal size.
    pub fn show_less(&mut self) {
        self.visible_count = constants::DEFAULT_VISIBLE_COUNT;
        self.apply_query();
    }

    /// Whether a listing id is currently favourited.
    pub fn is_favourite(&self, id: i64) -> bool {
        self.favourites.iter().any(|p| p.id == id)
    }

    /// Toggle favourite membership for a listing snapshot.
    /// Returns true when the listing was added, false when removed.
    pub fn toggle_favourite(&mut self, property: &Property) -> bool {
        if self.is_favourite(property.id) {
            self.favourites.retain(|p| p.id != property.id);
            tracing::debug!(id = property.id, "Favourite removed");
            false
        } else {
            self.favourites.push(property.clone());
            tracing::debug!(id = property.id, "Favourite added");
            true
        }
    }

    /// Toggle favourite membership by catalog id.
    /// Returns None when the id is not in the catalog.
    pub fn toggle_favourite_by_id(&mut self, id: i64) -> Option<bool> {
        let property = self.catalog.iter().find(|p| p.id == id)?.clone();
        Some(self.toggle_favourite(&property))
    }

    pub fn favourites_count(&self) -> usize {
        self.favourites.len()
    }
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

    fn state_with(count: i64) -> AppState {
        let catalog = (1..=count)
            .map(|id| listing(id, "₹20,000", "rent"))
            .collect();
        AppState::new(catalog, Vec::new(), AdminSession::default())
    }

    #[test]
    fn test_initial_view_reveals_first_batch() {
        let mut state = state_with(10);
        state.apply_query();
        assert_eq!(state.view_indices.len(), constants::DEFAULT_VISIBLE_COUNT);
        assert_eq!(state.view_total, 10);
    }

    #[test]
    fn test_load_more_then_show_less() {
        let mut state = state_with(10);
        state.apply_query();

        state.load_more();
        assert_eq!(state.view_indices.len(), 10);
        assert_eq!(state.view_total, 10);

        state.show_less();
        assert_eq!(state.view_indices.len(), constants::DEFAULT_VISIBLE_COUNT);
    }

    #[test]
    fn test_category_pin_restricts_view() {
        let mut state = state_with(3);
        state.catalog.push(listing(101, "₹1.5 Cr", "buy"));
        state.category = Some(Category::Rent);
        state.apply_query();
        assert_eq!(state.view_total, 3);
        assert!(state
            .view_properties()
            .iter()
            .all(|p| p.category == Category::Rent));
    }

    #[test]
    fn test_favourites_are_snapshots_keyed_by_id() {
        let mut state = state_with(3);

        assert_eq!(state.toggle_favourite_by_id(2), Some(true));
        assert!(state.is_favourite(2));
        assert_eq!(state.favourites_count(), 1);

        // Mutating the catalog copy does not touch the snapshot.
        state.catalog[1].price = "₹99,999".to_string();
        assert_eq!(state.favourites[0].price, "₹20,000");

        assert_eq!(state.toggle_favourite_by_id(2), Some(false));
        assert!(!state.is_favourite(2));

        assert_eq!(state.toggle_favourite_by_id(999), None);
    }
}
