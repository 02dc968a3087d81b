use crate::domain::{Page, PropertyQuery};
use maud::{html, Markup};

fn page_href(query: &PropertyQuery, number: usize) -> String {
    let filters = query.to_query_string();
    if filters.is_empty() {
        format!("/properties?page={number}")
    } else {
        format!("/properties?{filters}&page={number}")
    }
}

pub fn pagination(query: &PropertyQuery, page: &Page) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if page.has_prev() {
                    a href=(page_href(query, page.number - 1)) rel="prev" { "← Previous" }
                }
                span { "Page " (page.number) " of " (page.total_pages) }
                @if page.has_next() {
                    a href=(page_href(query, page.number + 1)) rel="next" { "Next →" }
                }
            }
        }
    }
}
