// Estatery - core/export.rs
//
// CSV and JSON export of the (filtered) catalog, backing the admin
// dashboard's export action.
// Core layer: writes to any Write trait object.

use crate::core::model::Property;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export listings to CSV.
///
/// Writes: Title, Location, Price, Type, Status, Beds, Baths, Sqft.
/// Returns the number of data rows written. `export_path` is used for
/// error context only, never for I/O.
pub fn export_csv<W: Write>(
    properties: &[Property],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Title", "Location", "Price", "Type", "Status", "Beds", "Baths", "Sqft",
        ])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for property in properties {
        csv_writer
            .write_record([
                property.display_name.as_str(),
                property.location.as_str(),
                property.price.as_str(),
                property.kind.label(),
                property.category.label(),
                &property.beds.to_string(),
                &property.baths.to_string(),
                property.sqft.as_str(),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export listings to JSON (pretty-printed array of objects).
pub fn export_json<W: Write>(
    properties: &[Property],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, properties).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(properties.len())
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::PropertyDefinition;
    use std::path::PathBuf;

    fn listing(id: i64, name: &str, price: &str, category: &str) -> Property {
        let def: PropertyDefinition = serde_json::from_str(&format!(
            r#"{{ "id": {id}, "name": "{name}", "price": "{price}",
                 "category": "{category}", "type": "Apartment", "beds": 3,
                 "baths": 2, "sqft": "1,850",
                 "location": "Gachibowli, Hyderabad" }}"#
        ))
        .unwrap();
        def.normalise()
    }

    #[test]
    fn test_csv_header_and_status_labels() {
        let properties = vec![
            listing(1, "Skyline Apartments", "₹25,000", "rent"),
            listing(101, "Modern Villa", "₹1.5 Cr", "buy"),
        ];

        let mut buffer: Vec<u8> = Vec::new();
        let count = export_csv(&properties, &mut buffer, &PathBuf::from("test.csv")).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Title,Location,Price,Type,Status,Beds,Baths,Sqft"
        );
        let first = lines.next().unwrap();
        assert!(first.contains("Skyline Apartments"));
        assert!(first.contains("For Rent"));
        let second = lines.next().unwrap();
        assert!(second.contains("For Sale"));
    }

    #[test]
    fn test_csv_empty_catalog_writes_header_only() {
        let mut buffer: Vec<u8> = Vec::new();
        let count = export_csv(&[], &mut buffer, &PathBuf::from("test.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_json_round_trips_field_names() {
        let properties = vec![listing(1, "Skyline Apartments", "₹25,000", "rent")];
        let mut buffer: Vec<u8> = Vec::new();
        let count = export_json(&properties, &mut buffer, &PathBuf::from("test.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["name"], "Skyline Apartments");
        assert_eq!(value[0]["category"], "rent");
    }
}
