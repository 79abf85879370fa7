// client.rs
use crate::domain::Listing;
use crate::sheets::models::{self, ValueRange};
use crate::sheets::{ListingProvider, SheetError};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = "property-search/0.1";
const VALUES_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

// The listing table lives on the first tab, like the original sheet.
const SHEET_RANGE: &str = "Sheet1";

/// Blocking client for the listing spreadsheet. Identity comes from the
/// environment; every `fetch_listings` call pulls the full table fresh.
pub struct SheetsClient {
    client: Client,
    sheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub fn from_env() -> Result<Self, SheetError> {
        let api_key = std::env::var("SHEETS_API_KEY")
            .map_err(|_| SheetError::Config("SHEETS_API_KEY environment variable not set".into()))?;
        let sheet_id = std::env::var("PROPERTY_SHEET_ID").map_err(|_| {
            SheetError::Config("PROPERTY_SHEET_ID environment variable not set".into())
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SheetError::Network(e.to_string()))?;

        Ok(Self {
            client,
            sheet_id,
            api_key,
        })
    }

    fn values_url(&self) -> Result<Url, SheetError> {
        let base = format!("{VALUES_ENDPOINT}/{}/values/{}", self.sheet_id, SHEET_RANGE);
        Url::parse_with_params(&base, &[("key", self.api_key.as_str())])
            .map_err(|e| SheetError::Config(format!("Bad sheet URL: {e}")))
    }
}

impl ListingProvider for SheetsClient {
    fn fetch_listings(&self) -> Result<Vec<Listing>, SheetError> {
        let url = self.values_url()?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SheetError::Network(e.to_string()))?;

        match resp.status().as_u16() {
            200 => {}
            s @ (401 | 403) => return Err(SheetError::Auth(s)),
            404 => return Err(SheetError::SheetNotFound),
            s => return Err(SheetError::Status(s)),
        }

        let payload: ValueRange = resp
            .json()
            .map_err(|e| SheetError::Malformed(e.to_string()))?;

        let listings = models::rows_to_listings(&payload)?;
        eprintln!("📋 Loaded {} listings from sheet", listings.len());
        Ok(listings)
    }
}
