// Estatery - platform/store.rs
//
// JSON key-value persistence for the catalog, the favourites set, and the
// admin session flag.
//
// Design principles:
// - Saves are atomic (write→temp, rename→final) so a crash during save
//   never corrupts the previous good store.
// - Load errors never surface to callers: a missing or malformed catalog
//   falls back to the embedded seed listings, malformed favourites fall
//   back to empty, and a malformed admin flag means signed out. The query
//   engine never sees a persistence failure.
// - The catalog and favourites files share one on-disk shape (a JSON array
//   of listings in the legacy field names) but are keyed separately.

use crate::core::model::{Property, PropertyDefinition};
use crate::core::seed;
use crate::util::constants;
use crate::util::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// Store paths
// =============================================================================

/// Resolve the catalog store path from the platform data directory.
pub fn catalog_path(data_dir: &Path) -> PathBuf {
    data_dir.join(constants::CATALOG_FILE_NAME)
}

/// Resolve the favourites store path from the platform data directory.
pub fn favourites_path(data_dir: &Path) -> PathBuf {
    data_dir.join(constants::FAVOURITES_FILE_NAME)
}

/// Resolve the admin flag path from the platform data directory.
pub fn admin_path(data_dir: &Path) -> PathBuf {
    data_dir.join(constants::ADMIN_FILE_NAME)
}

// =============================================================================
// Catalog store
// =============================================================================

/// Load the catalog, falling back to the embedded seed listings when the
/// store is missing, malformed, or empty.
pub fn load_catalog(path: &Path) -> Vec<Property> {
    match read_listings(path) {
        Some(listings) if !listings.is_empty() => {
            tracing::info!(path = %path.display(), count = listings.len(), "Catalog loaded");
            listings
        }
        Some(_) => {
            tracing::warn!(path = %path.display(), "Catalog store is empty — using seed listings");
            seed::seed_catalog()
        }
        None => {
            tracing::info!(path = %path.display(), "No usable catalog store — using seed listings");
            seed::seed_catalog()
        }
    }
}

/// Save the catalog atomically.
pub fn save_catalog(properties: &[Property], path: &Path) -> Result<(), StoreError> {
    write_json_atomic(properties, path)?;
    tracing::debug!(path = %path.display(), count = properties.len(), "Catalog saved");
    Ok(())
}

// =============================================================================
// Favourites store
// =============================================================================

/// Load the favourites set; missing or malformed stores yield an empty set.
pub fn load_favourites(path: &Path) -> Vec<Property> {
    let favourites = read_listings(path).unwrap_or_default();
    if !favourites.is_empty() {
        tracing::info!(path = %path.display(), count = favourites.len(), "Favourites loaded");
    }
    favourites
}

/// Save the favourites set atomically.
pub fn save_favourites(properties: &[Property], path: &Path) -> Result<(), StoreError> {
    write_json_atomic(properties, path)?;
    tracing::debug!(path = %path.display(), count = properties.len(), "Favourites saved");
    Ok(())
}

// =============================================================================
// Admin session flag
// =============================================================================

/// On-disk shape of the admin session flag.
#[derive(Debug, Serialize, Deserialize)]
struct AdminFlagData {
    is_admin: bool,
}

/// Load the persisted admin flag; any failure means signed out.
pub fn load_admin_flag(path: &Path) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return false,
    };
    match serde_json::from_str::<AdminFlagData>(&content) {
        Ok(data) => data.is_admin,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Admin flag file is malformed");
            false
        }
    }
}

/// Persist the admin flag atomically.
pub fn save_admin_flag(is_admin: bool, path: &Path) -> Result<(), StoreError> {
    write_json_atomic(&AdminFlagData { is_admin }, path)
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Read a listings file into canonical form.
///
/// Returns `None` on any error (file not found, JSON parse failure). The
/// caller decides the fallback. Raw records are accepted in the tolerant
/// `PropertyDefinition` shape and normalised here, at the boundary, so the
/// rest of the crate only ever sees canonical listings.
fn read_listings(path: &Path) -> Option<Vec<Property>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read store file");
            }
        })
        .ok()?;

    let definitions: Vec<PropertyDefinition> = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Store file is malformed — falling back"
            );
        })
        .ok()?;

    let mut listings: Vec<Property> = definitions
        .into_iter()
        .map(PropertyDefinition::normalise)
        .collect();

    if listings.len() > constants::MAX_CATALOG_ENTRIES {
        tracing::warn!(
            path = %path.display(),
            count = listings.len(),
            max = constants::MAX_CATALOG_ENTRIES,
            "Store file exceeds the entry cap — extra entries dropped"
        );
        listings.truncate(constants::MAX_CATALOG_ENTRIES);
    }

    Some(listings)
}

/// Serialise `value` and write it to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. A crash between write and
/// rename loses the new data but never corrupts the previous store (rename
/// is atomic on all supported platforms).
fn write_json_atomic<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let json =
        serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialise { source: e })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| StoreError::Io {
        path: tmp.clone(),
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(())
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(dir.path());

        let original = seed::seed_catalog();
        save_catalog(&original, &path).expect("save should succeed");
        let loaded = load_catalog(&path);

        assert_eq!(loaded.len(), original.len());
        assert_eq!(loaded[0].id, original[0].id);
        assert_eq!(loaded[0].display_name, original[0].display_name);
        assert_eq!(loaded[0].category, original[0].category);
        assert_eq!(loaded[0].image_list, original[0].image_list);
    }

    #[test]
    fn test_missing_catalog_falls_back_to_seed() {
        let dir = TempDir::new().unwrap();
        let loaded = load_catalog(&catalog_path(dir.path()));
        assert_eq!(loaded.len(), seed::seed_catalog().len());
    }

    #[test]
    fn test_malformed_catalog_falls_back_to_seed() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(dir.path());
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        let loaded = load_catalog(&path);
        assert_eq!(loaded.len(), seed::seed_catalog().len());
    }

    #[test]
    fn test_empty_catalog_falls_back_to_seed() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(dir.path());
        std::fs::write(&path, b"[]").unwrap();
        let loaded = load_catalog(&path);
        assert!(!loaded.is_empty());
    }

    #[test]
    fn test_legacy_records_are_normalised_on_load() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(dir.path());
        // Singular image, "title" instead of "name", status string only.
        std::fs::write(
            &path,
            br#"[{ "id": 9, "title": "Legacy Record", "price": "25,000",
                   "status": "For Rent", "type": "Apartment",
                   "image": "https://example.com/a.jpg" }]"#,
        )
        .unwrap();

        let loaded = load_catalog(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].display_name, "Legacy Record");
        assert_eq!(loaded[0].category, Category::Rent);
        assert_eq!(loaded[0].image_list.len(), 1);
    }

    #[test]
    fn test_favourites_default_empty_and_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = favourites_path(dir.path());

        assert!(load_favourites(&path).is_empty());

        let favourites = vec![seed::seed_catalog().remove(0)];
        save_favourites(&favourites, &path).unwrap();
        let loaded = load_favourites(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, favourites[0].id);
    }

    #[test]
    fn test_malformed_favourites_fall_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = favourites_path(dir.path());
        std::fs::write(&path, b"{\"oops\": true}").unwrap();
        assert!(load_favourites(&path).is_empty());
    }

    #[test]
    fn test_admin_flag_round_trip_and_default() {
        let dir = TempDir::new().unwrap();
        let path = admin_path(dir.path());

        assert!(!load_admin_flag(&path));
        save_admin_flag(true, &path).unwrap();
        assert!(load_admin_flag(&path));
        save_admin_flag(false, &path).unwrap();
        assert!(!load_admin_flag(&path));
    }

    #[test]
    fn test_save_is_atomic_over_leftover_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = catalog_path(dir.path());

        let catalog = seed::seed_catalog();
        save_catalog(&catalog, &path).unwrap();

        // Simulate a leftover temp file from a previous crash.
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        save_catalog(&catalog[..3].to_vec(), &path).unwrap();
        assert_eq!(load_catalog(&path).len(), 3);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("catalog.json");
        save_catalog(&seed::seed_catalog(), &path).unwrap();
        assert!(path.exists());
    }
}
