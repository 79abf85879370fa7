use std::fmt;

/// Reservation state of a listing as tracked in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Available,
    Reserved,
}

impl Status {
    /// Parses the sheet's string form ("Available" / "reserved" / ...).
    /// Returns None for anything else so the loader can decide what to
    /// do with rows in an unknown state.
    pub fn parse(raw: &str) -> Option<Status> {
        match raw.trim().to_lowercase().as_str() {
            "available" => Some(Status::Available),
            "reserved" => Some(Status::Reserved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Reserved => "reserved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property entry from the sheet, immutable once loaded.
/// The whole table is re-fetched for every search, so there is no
/// identity or sync concern beyond this snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub status: Status,
    pub property_type: String,
    pub bedrooms: Option<u32>,
    pub price: f64,
    pub location: String,
}
