// templates/pages/listing.rs

use crate::domain::{Page, PropertyQuery};
use crate::templates::components::{filter_bar, pagination, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub query: &'a PropertyQuery,
    pub page: Page<'a, 'a>,
    pub cities: Vec<&'a str>,
    pub categories: Vec<&'a str>,
    /// Set when the listing fetch failed; the page then shows a retry link.
    pub load_error: Option<&'a str>,
}

fn retry_href(query: &PropertyQuery) -> String {
    let filters = query.to_query_string();
    if filters.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{filters}")
    }
}

pub fn listing_page(vm: &ListingVm) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            main class="container" {
                h1 { "Find your next property" }

                (filter_bar(vm.query, &vm.cities, &vm.categories))

                @if vm.load_error.is_some() {
                    div class="alert alert-error" role="alert" {
                        p { "We couldn't load properties right now." }
                        a href=(retry_href(vm.query)) class="btn" { "Retry" }
                    }
                }

                p class="text-gray-700" id="result-count" {
                    "Showing " strong { (vm.page.total_items) } " properties"
                }

                @if vm.page.items.is_empty() && vm.load_error.is_none() {
                    p class="empty" { "No properties match your filters." }
                }

                div class="property-grid" {
                    @for property in vm.page.items {
                        (property_card(property))
                    }
                }

                (pagination(vm.query, &vm.page))

                @if vm.page.total_items > 0 {
                    p class="text-xs" {
                        a href=(format!("/properties/export?{}", vm.query.to_query_string())) { "Download these results (.xlsx)" }
                    }
                }
            }
        },
    )
}
