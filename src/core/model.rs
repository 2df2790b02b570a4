// Estatery - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. Listings arrive
// from untrusted free-text sources (store files, admin form submissions) as
// `PropertyDefinition` and are compiled into the canonical `Property` by
// `normalise()` at the collaborator boundary, so consumers never deal with
// optional-field fallbacks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// Whether a listing is offered for rent or for sale.
///
/// Derived consistently from the listing status string whenever a record is
/// created or edited; the query engine never sees a record whose category
/// contradicts its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rent,
    Buy,
}

impl Category {
    /// Derive the category from a listing status string.
    /// `"For Rent"` maps to `Rent`; everything else is `Buy`.
    pub fn from_status(status: &str) -> Self {
        if status == "For Rent" {
            Category::Rent
        } else {
            Category::Buy
        }
    }

    /// Human-readable status label for display and export.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rent => "For Rent",
            Category::Buy => "For Sale",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rent" => Ok(Category::Rent),
            "buy" => Ok(Category::Buy),
            other => Err(format!("unknown category '{other}' (expected rent or buy)")),
        }
    }
}

// =============================================================================
// Property kind
// =============================================================================

/// Building type of a listing.
///
/// A free string in the source data; the well-known kinds get variants and
/// anything else is carried verbatim in `Other` for forward compatibility.
/// Filter matching compares the label for exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyKind {
    Apartment,
    Villa,
    House,
    Plot,
    Commercial,
    Other(String),
}

impl PropertyKind {
    /// Display label; also the exact-match key used by filters.
    pub fn label(&self) -> &str {
        match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::Villa => "Villa",
            PropertyKind::House => "House",
            PropertyKind::Plot => "Plot",
            PropertyKind::Commercial => "Commercial",
            PropertyKind::Other(s) => s,
        }
    }
}

impl From<String> for PropertyKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Apartment" => PropertyKind::Apartment,
            "Villa" => PropertyKind::Villa,
            "House" => PropertyKind::House,
            "Plot" => PropertyKind::Plot,
            "Commercial" => PropertyKind::Commercial,
            _ => PropertyKind::Other(s),
        }
    }
}

impl From<PropertyKind> for String {
    fn from(kind: PropertyKind) -> Self {
        kind.label().to_string()
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Agent
// =============================================================================

/// Contact record embedded in a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// =============================================================================
// Property (canonical record)
// =============================================================================

/// A single canonical listing.
///
/// This is the record that flows through filtering, sorting, statistics,
/// display, and export. Serialisation uses the legacy on-disk field names
/// (`name`, `type`, `images`, `createdAt`) so saved stores remain readable
/// by earlier versions of the product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Stable identity for the lifetime of the record; the sole key for
    /// favourite-matching, selection, and edit/delete targeting.
    pub id: i64,

    /// Display title. `PropertyDefinition` accepts both `title` and `name`;
    /// normalisation collapses them here, `title` taking precedence.
    #[serde(rename = "name")]
    pub display_name: String,

    /// Display price string, e.g. `"₹25,000"`, `"₹85 Lakhs"`, `"₹1.5 Cr"`.
    /// Parsed on demand by `core::price::parse_price`; an unparseable price
    /// parses to 0 rather than being rejected.
    pub price: String,

    /// Rent/buy category, always consistent with the listing status.
    pub category: Category,

    /// Building type.
    #[serde(rename = "type")]
    pub kind: PropertyKind,

    /// Bedroom count (0 when the source had none).
    pub beds: u32,

    /// Bathroom count (0 when the source had none).
    pub baths: u32,

    /// Floor area display string, e.g. `"1,850"`.
    pub sqft: String,

    /// Free-text location; matched case-insensitively by substring.
    pub location: String,

    /// Image URIs; the first entry is the primary thumbnail.
    #[serde(rename = "images")]
    pub image_list: Vec<String>,

    /// Price period suffix for rentals, e.g. `"/month"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Free-text amenity tags.
    pub amenities: Vec<String>,

    /// Listing agent contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,

    /// Promotional label, purely decorative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Creation timestamp, stamped on admin add. Seeded fixtures have none.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Property {
    /// Primary thumbnail URI, if the listing has any images.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_list.first().map(String::as_str)
    }
}

// =============================================================================
// Property definition (raw input shape)
// =============================================================================

/// Floor area as found in the wild: either a display string (`"1,850"`) or
/// a bare number (admin form submissions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqftValue {
    Text(String),
    Number(f64),
}

impl SqftValue {
    /// Collapse to the display-string representation used by `Property`.
    pub fn into_display(self) -> String {
        match self {
            SqftValue::Text(s) => s,
            SqftValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", n as i64)
                } else {
                    format!("{n}")
                }
            }
        }
    }
}

/// Raw listing shape as deserialised from a store file or assembled from an
/// admin form submission. Tolerant of the field aliases that accumulated in
/// the legacy data (`name` vs `title`, singular `image` vs `images`), with
/// every field optional. Unknown fields are ignored.
///
/// Validated and compiled into a canonical `Property` via `normalise()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDefinition {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<Category>,
    /// Listing status string (`"For Rent"` / `"For Sale"`). When present it
    /// is authoritative for the category.
    pub status: Option<String>,
    #[serde(rename = "type", alias = "kind")]
    pub kind: Option<PropertyKind>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub sqft: Option<SqftValue>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub period: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub agent: Option<Agent>,
    pub badge: Option<String>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PropertyDefinition {
    /// Compile this raw definition into a canonical `Property`.
    ///
    /// Missing fields degrade to sentinel-safe defaults (`beds`/`baths` 0,
    /// empty `location`, id 0) rather than erroring: the query engine treats
    /// all of these as "matches nothing specific" rather than failures.
    pub fn normalise(self) -> Property {
        // Status is authoritative for the category when present, so a record
        // edited from "For Sale" to "For Rent" moves page immediately.
        let category = match self.status.as_deref() {
            Some(status) => Category::from_status(status),
            None => self.category.unwrap_or(Category::Buy),
        };

        let display_name = self.title.or(self.name).unwrap_or_default();

        let image_list = match self.images {
            Some(list) if !list.is_empty() => list,
            _ => self.image.into_iter().collect(),
        };

        Property {
            id: self.id.unwrap_or(0),
            display_name,
            price: self.price.unwrap_or_default(),
            category,
            kind: self
                .kind
                .unwrap_or_else(|| PropertyKind::Other(String::new())),
            beds: self.beds.unwrap_or(0),
            baths: self.baths.unwrap_or(0),
            sqft: self.sqft.map(SqftValue::into_display).unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            image_list,
            period: self.period,
            amenities: self.amenities.unwrap_or_default(),
            agent: self.agent,
            badge: self.badge,
            created_at: self.created_at,
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================
