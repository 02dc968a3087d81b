use maud::{html, Markup};

pub mod card;
pub mod filter_bar;
pub mod pagination;
pub mod property_card;

pub use card::card;
pub use filter_bar::filter_bar;
pub use pagination::pagination;
pub use property_card::{format_price, property_card};

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" { (label) }
    }
}
