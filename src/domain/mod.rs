pub mod filter;
pub mod listing;

pub use filter::{apply, QueryFilter};
pub use listing::{Listing, Status};
