use crate::domain::{Listing, Status};
use crate::sheets::SheetError;
use serde::Deserialize;

// Sheets values payload:
//
// {
//   "range": "Sheet1!A1:E20",
//   "values": [
//     ["status", "property_type", "bedrooms", "price", "location"],
//     ["available", "บ้านเดี่ยว", "2", "2900000", "นนทบุรี"],
//     ...
//   ]
// }
//
// The first row is the header; data rows are mapped to columns by
// header name, like a records export, so column order in the sheet is
// free to change.

#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

const STATUS_COL: &str = "status";
const TYPE_COL: &str = "property_type";
const BEDROOMS_COL: &str = "bedrooms";
const PRICE_COL: &str = "price";
const LOCATION_COL: &str = "location";

struct Columns {
    status: usize,
    property_type: usize,
    bedrooms: usize,
    price: usize,
    location: usize,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, SheetError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| SheetError::Malformed(format!("Missing column '{name}'")))
        };

        Ok(Columns {
            status: find(STATUS_COL)?,
            property_type: find(TYPE_COL)?,
            bedrooms: find(BEDROOMS_COL)?,
            price: find(PRICE_COL)?,
            location: find(LOCATION_COL)?,
        })
    }
}

/// Materializes the raw cell grid into listing records.
///
/// A sheet without the expected header is malformed (that is a setup
/// problem, not a data problem). Individual rows that cannot be read —
/// unknown status, junk in a numeric cell — are skipped with a warning
/// so one bad row does not take down every search.
pub fn rows_to_listings(payload: &ValueRange) -> Result<Vec<Listing>, SheetError> {
    let mut rows = payload.values.iter();
    let header = rows
        .next()
        .ok_or_else(|| SheetError::Malformed("Empty sheet, no header row".into()))?;
    let cols = Columns::from_header(header)?;

    let mut listings = Vec::new();
    for (i, row) in rows.enumerate() {
        match row_to_listing(row, &cols) {
            Ok(listing) => listings.push(listing),
            Err(reason) => {
                // Row numbers as a sheet user sees them (1-based, after header).
                eprintln!("⚠️ Skipping sheet row {}: {reason}", i + 2);
            }
        }
    }
    Ok(listings)
}

fn row_to_listing(row: &[String], cols: &Columns) -> Result<Listing, String> {
    let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

    let raw_status = cell(cols.status);
    let status = Status::parse(raw_status)
        .ok_or_else(|| format!("Unknown status '{raw_status}'"))?;

    let raw_price = cell(cols.price).replace(',', "");
    let price: f64 = raw_price
        .trim()
        .parse()
        .map_err(|_| format!("Unreadable price '{}'", cell(cols.price)))?;

    let raw_bedrooms = cell(cols.bedrooms).trim();
    let bedrooms = if raw_bedrooms.is_empty() {
        None
    } else {
        Some(
            raw_bedrooms
                .parse::<u32>()
                .map_err(|_| format!("Unreadable bedroom count '{raw_bedrooms}'"))?,
        )
    };

    Ok(Listing {
        status,
        property_type: cell(cols.property_type).trim().to_string(),
        bedrooms,
        price,
        location: cell(cols.location).trim().to_string(),
    })
}
