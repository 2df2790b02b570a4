// Estatery - util/constants.rs
//
// Single source of truth for all named constants, sentinels, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Estatery";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Estatery";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Filter sentinels
// =============================================================================
//
// Each filter field has a specific sentinel value meaning "no constraint",
// distinct from absence of the field. The sentinels are the default options
// of the search controls and must match them byte-for-byte.

/// Location sentinel: the whole-city default of the location dropdown.
pub const ANY_LOCATION: &str = "Hyderabad, India";

/// Property type sentinel.
pub const ALL_TYPES: &str = "All Types";

/// Bedroom-count (BHK) sentinel.
pub const ANY_BHK: &str = "Any";

/// Budget sentinel used by sale searches.
pub const ANY_PRICE: &str = "Any Price";

/// Budget sentinel used by rental searches.
pub const ANY_BUDGET: &str = "Any Budget";

/// Rental type synonym matching either `House` or `Villa`.
pub const FULL_HOUSE: &str = "Full House";

// =============================================================================
// Indian numbering units
// =============================================================================

/// One lakh: 100,000.
pub const LAKH: f64 = 100_000.0;

/// One crore: 10,000,000.
pub const CRORE: f64 = 10_000_000.0;

// =============================================================================
// Budget band bounds
// =============================================================================
//
// Named bands are coarse price ranges; range bands are inclusive at both
// ends. Sale bands are denominated in rupees, rental bands in rupees/month.

/// Sale band boundary: ₹50 L.
pub const SALE_BAND_LOW: f64 = 5_000_000.0;

/// Sale band boundary: ₹1 Cr.
pub const SALE_BAND_MID: f64 = 10_000_000.0;

/// Sale band boundary: ₹3 Cr.
pub const SALE_BAND_HIGH: f64 = 30_000_000.0;

/// Rental band boundary: ₹10k/month.
pub const RENT_BAND_LOW: f64 = 10_000.0;

/// Rental band boundary: ₹25k/month.
pub const RENT_BAND_MID: f64 = 25_000.0;

/// Rental band boundary: ₹50k/month.
pub const RENT_BAND_HIGH: f64 = 50_000.0;

// =============================================================================
// Listing pages
// =============================================================================

/// Initial number of cards revealed on the public listing pages.
pub const DEFAULT_VISIBLE_COUNT: usize = 6;

/// How many further cards each "Load More" press reveals.
pub const LOAD_MORE_STEP: usize = 12;

/// Admin dashboard page size in grid view.
pub const DEFAULT_GRID_PAGE_SIZE: usize = 12;

/// Admin dashboard page size in table view.
pub const DEFAULT_TABLE_PAGE_SIZE: usize = 10;

/// Minimum configurable page size (controls must be non-zero).
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum configurable page size.
pub const MAX_PAGE_SIZE: usize = 100;

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum number of listings accepted from a persisted catalog file.
/// Entries beyond the cap are dropped with a warning so a corrupt store
/// file cannot balloon memory.
pub const MAX_CATALOG_ENTRIES: usize = 10_000;

// =============================================================================
// Loan calculator defaults
// =============================================================================

/// Default loan principal in rupees.
pub const DEFAULT_LOAN_PRINCIPAL: f64 = 5_000_000.0;

/// Default annual interest rate in percent.
pub const DEFAULT_LOAN_RATE_PCT: f64 = 8.5;

/// Default loan term in years.
pub const DEFAULT_LOAN_TERM_YEARS: u32 = 20;

// =============================================================================
// Admin session
// =============================================================================

/// Fixed shared secret gating catalog mutation. This is explicitly a demo
/// convenience, not a security boundary.
pub const ADMIN_PASSWORD: &str = "admin123";

// =============================================================================
// Persistence
// =============================================================================

/// Catalog store file name (stored in the platform data directory).
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Favourites store file name.
pub const FAVOURITES_FILE_NAME: &str = "favourites.json";

/// Admin session flag file name.
pub const ADMIN_FILE_NAME: &str = "admin.json";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
