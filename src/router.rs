use crate::domain;
use crate::errors::ServerError;
use crate::query::interpret;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::sheets::ListingProvider;
use crate::templates;
use astra::Request;

pub fn handle(req: Request, listings: &dyn ListingProvider) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("GET", "/search") => {
            let params = parse_query(&req);
            let query = params.get("q").map(String::as_str).unwrap_or("");

            let filter =
                interpret(query).map_err(|e| ServerError::BadRequest(e.to_string()))?;

            // Fresh snapshot per search; a fetch failure propagates and
            // renders as an error page, never as zero matches.
            let table = listings.fetch_listings()?;
            let matches = domain::apply(&table, &filter);

            html_response(templates::pages::results_page(query, &filter, &matches))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// The search box submits UTF-8 Thai text, so values must be
/// percent-decoded (and '+' turned back into spaces).
fn parse_query(req: &astra::Request) -> std::collections::HashMap<String, String> {
    let raw = req.uri().query().unwrap_or("");
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
