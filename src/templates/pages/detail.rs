use crate::domain::Property;
use crate::templates::components::{card, format_price};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn detail_page(p: &Property) -> Markup {
    let title = if p.title.is_empty() { "Property" } else { p.title.as_str() };

    desktop_layout(
        title,
        html! {
            main class="container" {
                p { a href="/properties" { "← Back to listings" } }
                h1 { (title) }
                p class="text-gray-500" {
                    (p.location)
                    @if !p.location.is_empty() && !p.city.is_empty() { ", " }
                    (p.city)
                }
                p class="price" { strong { (format_price(&p.price)) } }

                @if !p.images.is_empty() {
                    div class="gallery" {
                        @for image in &p.images {
                            img src=(image) alt=(title) loading="lazy";
                        }
                    }
                }

                (card("Details", html! {
                    dl {
                        @if !p.category.is_empty() {
                            dt { "Category" } dd { (p.category) }
                        }
                        @if let Some(square) = p.attributes.square {
                            dt { "Area" } dd { (square.round() as i64) " sqft" }
                        }
                        @if let Some(bedroom) = p.attributes.bedroom {
                            dt { "Bedrooms" } dd { (bedroom) }
                        }
                        @if let Some(bathroom) = p.attributes.bathroom {
                            dt { "Bathrooms" } dd { (bathroom) }
                        }
                        @if let Some(created_at) = &p.created_at {
                            dt { "Listed" } dd { (created_at) }
                        }
                    }
                }))

                @if let Some(description) = &p.description {
                    (card("About this property", html! {
                        p { (description) }
                    }))
                }
            }
        },
    )
}
