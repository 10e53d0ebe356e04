//! # CSV Export
//!
//! Turns a slice of parts into the CSV file behind the product table's
//! "Export" button. The caller picks the destination (file, buffer, socket);
//! this module only owns the format.

use std::io::Write;

use pitstop_core::Part;

use crate::error::DbResult;

/// Column order of the exported file. Matches the product table on screen.
const HEADER: &[&str] = &[
    "id",
    "category",
    "car_name",
    "model",
    "product_name",
    "quantity",
    "price",
    "last_updated",
];

/// Writes parts as CSV to the given writer.
///
/// Prices are formatted with two decimals (the export is meant for
/// spreadsheets, not re-import precision); timestamps are RFC 3339.
///
/// ## Example
/// ```rust,ignore
/// let parts = db.parts().get_all().await?;
/// let file = std::fs::File::create("inventory.csv")?;
/// export::write_csv(&parts, file)?;
/// ```
pub fn write_csv<W: Write>(parts: &[Part], writer: W) -> DbResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for part in parts {
        csv_writer.write_record(&[
            part.id.to_string(),
            part.category.clone(),
            part.car_name.clone(),
            part.model.clone(),
            part.product_name.clone(),
            part.quantity.to_string(),
            format!("{:.2}", part.price),
            part.last_updated.to_rfc3339(),
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
