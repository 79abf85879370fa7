// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout, search_box};
use maud::html;
use maud::Markup;

pub fn home_page() -> Markup {
    desktop_layout(
        "Property Search",
        html! {
            main class="container" {
                h1 { "ค้นหาทรัพย์" }
                p { "ใส่ความต้องการลูกค้า → ระบบจะเลือกทรัพย์ตามสถานะ (Available/Reserved)" }

                (search_box(None))

                (card("How it works", html! {
                    p {
                        "Type what the customer wants in Thai or English — "
                        "property type, bedroom count, price ceiling, location. "
                        "Listings are reloaded from the sheet on every search."
                    }
                }))
            }
        },
    )
}
