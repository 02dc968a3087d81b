// src/domain/view.rs

use crate::domain::filter::matches;
use crate::domain::property::Property;
use crate::domain::query::{PropertyQuery, SortKey};
use crate::domain::sort::comparator;
use std::collections::BTreeSet;

/// Filters the store through the query, then stable-sorts the survivors.
/// Returns references into the store in display order.
pub fn compute_view<'a>(store: &'a [Property], query: &PropertyQuery) -> Vec<&'a Property> {
    let mut view: Vec<&Property> = store.iter().filter(|p| matches(p, query)).collect();

    if query.sort != SortKey::Unsorted {
        let cmp = comparator(query.sort);
        view.sort_by(|a, b| cmp(a, b));
    }

    view
}

/// Distinct non-empty cities, alphabetical. Feeds the city dropdown.
pub fn distinct_cities(store: &[Property]) -> Vec<&str> {
    distinct(store.iter().map(|p| p.city.as_str()))
}

pub fn distinct_categories(store: &[Property]) -> Vec<&str> {
    distinct(store.iter().map(|p| p.category.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One page of a derived view.
#[derive(Debug)]
pub struct Page<'v, 'a> {
    pub items: &'v [&'a Property],
    /// 1-based, clamped to `total_pages`.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page<'_, '_> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

pub fn paginate<'v, 'a>(view: &'v [&'a Property], page: usize, per_page: usize) -> Page<'v, 'a> {
    let per_page = per_page.max(1);
    let total_pages = view.len().div_ceil(per_page).max(1);
    let number = page.clamp(1, total_pages);

    let start = ((number - 1) * per_page).min(view.len());
    let end = (start + per_page).min(view.len());

    Page {
        items: &view[start..end],
        number,
        total_pages,
        total_items: view.len(),
    }
}
