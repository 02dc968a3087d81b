use crate::domain::{AreaRange, PriceRange, PropertyQuery, SortKey};
use crate::templates::components::button;
use maud::{html, Markup};

/// The search/filter/sort form of the listing page. Submitting it reloads
/// `/properties` with the choices in the query string.
pub fn filter_bar(query: &PropertyQuery, cities: &[&str], categories: &[&str]) -> Markup {
    html! {
        form
            action="/properties"
            method="get"
            class="filter-bar"
            style="display: flex; flex-wrap: wrap; gap: 10px; align-items: center; margin: 1rem 0;"
        {
            label for="search" class="sr-only" { "Search" }
            input
                type="search"
                id="search"
                name="search"
                placeholder="Search by title, city, category or location"
                value=(query.search);

            select name="category" aria-label="Category" {
                option value="" selected[query.category.is_none()] { "All categories" }
                @for category in categories {
                    option value=(category) selected[query.category.as_deref() == Some(*category)] { (category) }
                }
            }

            select name="city" aria-label="City" {
                option value="" selected[query.city.is_none()] { "All cities" }
                @for city in cities {
                    option value=(city) selected[query.city.as_deref() == Some(*city)] { (city) }
                }
            }

            select name="price" aria-label="Price range" {
                option value="" selected[query.price.is_none()] { "Any price" }
                @for range in PriceRange::ALL {
                    option value=(range.token()) selected[query.price == Some(range)] { (range.label()) }
                }
            }

            select name="area" aria-label="Area" {
                option value="" selected[query.area.is_none()] { "Any area" }
                @for range in AreaRange::ALL {
                    option value=(range.token()) selected[query.area == Some(range)] { (range.label()) }
                }
            }

            select name="sort" aria-label="Sort" {
                @for key in SortKey::ALL {
                    option value=(key.token()) selected[query.sort == key] { (key.label()) }
                }
            }

            (button("Apply"))

            @if query.has_filters() {
                a href="/properties" { "Clear filters" }
            }
        }
    }
}
