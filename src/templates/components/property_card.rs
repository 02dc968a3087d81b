use crate::domain::{Price, Property};
use maud::{html, Markup};

/// Rupee amounts in lakh/crore units, e.g. "₹60 Lakh" or "₹1.25 Cr".
pub fn format_price(price: &Price) -> String {
    let amount = match price {
        Price::OnRequest => return "Price on Request".to_string(),
        Price::Numeric(n) => *n,
    };

    if amount >= 10_000_000.0 {
        format!("₹{} Cr", trim_decimals(amount / 10_000_000.0))
    } else if amount >= 100_000.0 {
        format!("₹{} Lakh", trim_decimals(amount / 100_000.0))
    } else {
        format!("₹{}", amount.round() as i64)
    }
}

fn trim_decimals(n: f64) -> String {
    let s = format!("{n:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn property_card(p: &Property) -> Markup {
    html! {
        article class="property-card" {
            a href=(format!("/properties/{}", p.id)) {
                @if let Some(image) = p.images.first() {
                    img src=(image) alt=(p.title) loading="lazy";
                } @else {
                    div class="property-card-placeholder" {}
                }
            }
            div class="property-card-body" {
                @if !p.category.is_empty() {
                    span class="badge" { (p.category) }
                }
                h4 {
                    a href=(format!("/properties/{}", p.id)) { (p.title) }
                }
                p class="text-gray-500" {
                    (p.location)
                    @if !p.location.is_empty() && !p.city.is_empty() { ", " }
                    (p.city)
                }
                p class="price" { strong { (format_price(&p.price)) } }
                @if let Some(square) = p.attributes.square {
                    p class="text-xs" { (square.round() as i64) " sqft" }
                }
            }
        }
    }
}
