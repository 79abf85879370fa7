use crate::domain::{Listing, QueryFilter};
use crate::templates::{desktop_layout, listing_table, search_box};
use maud::{html, Markup};

pub fn results_page(query: &str, filter: &QueryFilter, listings: &[Listing]) -> Markup {
    desktop_layout(
        "Search Results",
        html! {
            main class="container" {
                h1 { "ผลการค้นหา" }

                (search_box(Some(query)))

                (filter_summary(filter))

                @if listings.is_empty() {
                    p class="no-matches" { "ไม่พบทรัพย์ที่ตรงกับเงื่อนไข (no matches)" }
                } @else {
                    p { strong { (listings.len()) } " matching listing(s)" }
                    (listing_table(listings))
                }
            }
        },
    )
}

/// Shows which constraints were actually extracted, so a surprising
/// result set can be traced back to the interpretation.
fn filter_summary(filter: &QueryFilter) -> Markup {
    html! {
        p class="filter-summary" {
            "Filters: status=" (filter.status)
            @if let Some(t) = &filter.property_type { ", type=" (t) }
            @if let Some(n) = filter.bedrooms { ", bedrooms=" (n) }
            @if let Some(p) = filter.price_max { ", price ≤ " (p) }
            @if let Some(loc) = &filter.location { ", location=" (loc) }
        }
    }
}
