mod client;
mod models;
mod sheet_error;

pub use client::SheetsClient;
pub use sheet_error::SheetError;

use crate::domain::Listing;

/// Source of the listing table. The search handler takes this as a
/// seam so tests can substitute a fixed in-memory table for the live
/// spreadsheet fetch. Every search pulls a fresh snapshot.
pub trait ListingProvider {
    fn fetch_listings(&self) -> Result<Vec<Listing>, SheetError>;
}
