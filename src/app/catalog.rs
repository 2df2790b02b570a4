// Estatery - app/catalog.rs
//
// Admin CRUD operations over the in-memory catalog.
//
// Identity rules:
// - A new listing without an id is assigned the current epoch milliseconds,
//   so admin-added listings also sort first under the "newest" ordering.
// - Edits merge the submitted fields into the existing record; the id is
//   never changed by an edit.
// - Ids are not checked for uniqueness on insert. Duplicate ids are
//   tolerated: update-by-id touches every matching record (last write
//   wins), delete-by-id removes them all.
//
// Category consistency: the listing status submitted with the form is
// authoritative, so a record can never end up with a category contradicting
// its status.

use crate::core::model::{Category, Property, PropertyDefinition};
use chrono::Utc;

/// Add a listing from an admin form submission. Returns the assigned id.
pub fn add_property(catalog: &mut Vec<Property>, definition: PropertyDefinition) -> i64 {
    let id = definition
        .id
        .unwrap_or_else(|| Utc::now().timestamp_millis());

    let mut property = definition.normalise();
    property.id = id;
    if property.created_at.is_none() {
        property.created_at = Some(Utc::now());
    }

    tracing::info!(id, name = %property.display_name, "Listing added");
    catalog.push(property);
    id
}

/// Merge submitted fields into the listing(s) with the given id.
///
/// Only fields present in the definition overwrite; everything else is
/// preserved. Returns false when no listing matched.
pub fn update_property(catalog: &mut [Property], id: i64, definition: PropertyDefinition) -> bool {
    let mut matched = false;
    for property in catalog.iter_mut().filter(|p| p.id == id) {
        merge_definition(property, definition.clone());
        matched = true;
    }

    if matched {
        tracing::info!(id, "Listing updated");
    } else {
        tracing::warn!(id, "Update targeted a listing that does not exist");
    }
    matched
}

/// Remove the listing(s) with the given id. Returns false when none matched.
pub fn delete_property(catalog: &mut Vec<Property>, id: i64) -> bool {
    let before = catalog.len();
    catalog.retain(|p| p.id != id);
    let removed = catalog.len() < before;
    if removed {
        tracing::info!(id, "Listing deleted");
    }
    removed
}

/// Bulk delete by id set. Returns the number of listings removed.
pub fn delete_many(catalog: &mut Vec<Property>, ids: &[i64]) -> usize {
    let before = catalog.len();
    catalog.retain(|p| !ids.contains(&p.id));
    let removed = before - catalog.len();
    tracing::info!(removed, "Bulk delete completed");
    removed
}

/// Apply the present fields of a definition onto an existing listing.
fn merge_definition(property: &mut Property, definition: PropertyDefinition) {
    if let Some(title) = definition.title.or(definition.name) {
        property.display_name = title;
    }
    if let Some(price) = definition.price {
        property.price = price;
    }
    if let Some(kind) = definition.kind {
        property.kind = kind;
    }
    if let Some(beds) = definition.beds {
        property.beds = beds;
    }
    if let Some(baths) = definition.baths {
        property.baths = baths;
    }
    if let Some(sqft) = definition.sqft {
        property.sqft = sqft.into_display();
    }
    if let Some(location) = definition.location {
        property.location = location;
    }
    if let Some(images) = definition.images {
        if !images.is_empty() {
            property.image_list = images;
        }
    } else if let Some(image) = definition.image {
        property.image_list = vec![image];
    }
    if let Some(period) = definition.period {
        property.period = Some(period);
    }
    if let Some(amenities) = definition.amenities {
        property.amenities = amenities;
    }
    if let Some(agent) = definition.agent {
        property.agent = Some(agent);
    }
    if let Some(badge) = definition.badge {
        property.badge = Some(badge);
    }

    // Status drives the category; an explicit category field is honoured
    // when no status accompanies it.
    if let Some(status) = definition.status {
        property.category = Category::from_status(&status);
    } else if let Some(category) = definition.category {
        property.category = category;
    }
}

// =============================================================================
// Unit tests
// =============================================================================
