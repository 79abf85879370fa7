use crate::domain::Listing;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// The single text input the whole UI consists of. `initial` keeps the
/// submitted query visible on the results page.
pub fn search_box(initial: Option<&str>) -> Markup {
    html! {
        form action="/search" method="get" style="display: flex; gap: 10px; margin: 1rem 0;" {
            input
                type="text"
                name="q"
                value=[initial]
                placeholder="เช่น บ้านเดี่ยว 2 ห้องนอน ไม่เกิน 3 ล้าน ในนนทบุรี"
                style="flex: 1; padding: 8px; font-size: 16px;";
            button type="submit" style="padding: 8px 16px; font-size: 16px; cursor: pointer;" {
                "ค้นหา"
            }
        }
    }
}

pub fn listing_table(listings: &[Listing]) -> Markup {
    html! {
        table class="listing-table" {
            thead {
                tr {
                    th { "Status" }
                    th { "Type" }
                    th { "Bedrooms" }
                    th { "Price (฿)" }
                    th { "Location" }
                }
            }
            tbody {
                @for l in listings {
                    tr {
                        td { (l.status) }
                        td { (l.property_type) }
                        td {
                            @match l.bedrooms {
                                Some(n) => { (n) }
                                None => { "-" }
                            }
                        }
                        td { (format_price(l.price)) }
                        td { (l.location) }
                    }
                }
            }
        }
    }
}

/// Renders 2900000 as "2,900,000"; fractional satang are not a thing
/// in this sheet, so whole baht only.
fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
