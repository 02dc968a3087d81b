// src/domain/query.rs

use url::form_urlencoded;

/// Price buckets offered by the listing page's price dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    Upto5Lakh,
    FiveToTenLakh,
    TenLakhToHalfCrore,
    AboveHalfCrore,
    OnRequest,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::Upto5Lakh,
        PriceRange::FiveToTenLakh,
        PriceRange::TenLakhToHalfCrore,
        PriceRange::AboveHalfCrore,
        PriceRange::OnRequest,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.token() == token)
    }

    pub fn token(&self) -> &'static str {
        match self {
            PriceRange::Upto5Lakh => "0-500000",
            PriceRange::FiveToTenLakh => "500000-1000000",
            PriceRange::TenLakhToHalfCrore => "1000000-5000000",
            PriceRange::AboveHalfCrore => "5000000+",
            PriceRange::OnRequest => "on-request",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Upto5Lakh => "Up to ₹5 Lakh",
            PriceRange::FiveToTenLakh => "₹5 Lakh - ₹10 Lakh",
            PriceRange::TenLakhToHalfCrore => "₹10 Lakh - ₹50 Lakh",
            PriceRange::AboveHalfCrore => "Above ₹50 Lakh",
            PriceRange::OnRequest => "Price on Request",
        }
    }

    /// Bounds as (exclusive lower, inclusive upper). `None` for the sentinel bucket.
    pub fn bounds(&self) -> Option<(Option<f64>, Option<f64>)> {
        match self {
            PriceRange::Upto5Lakh => Some((None, Some(500_000.0))),
            PriceRange::FiveToTenLakh => Some((Some(500_000.0), Some(1_000_000.0))),
            PriceRange::TenLakhToHalfCrore => Some((Some(1_000_000.0), Some(5_000_000.0))),
            PriceRange::AboveHalfCrore => Some((Some(5_000_000.0), None)),
            PriceRange::OnRequest => None,
        }
    }
}

/// Area buckets in square feet, half-open `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaRange {
    Under1000,
    From1000To2000,
    From2000To5000,
    Above5000,
}

impl AreaRange {
    pub const ALL: [AreaRange; 4] = [
        AreaRange::Under1000,
        AreaRange::From1000To2000,
        AreaRange::From2000To5000,
        AreaRange::Above5000,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.token() == token)
    }

    pub fn token(&self) -> &'static str {
        match self {
            AreaRange::Under1000 => "0-1000",
            AreaRange::From1000To2000 => "1000-2000",
            AreaRange::From2000To5000 => "2000-5000",
            AreaRange::Above5000 => "5000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AreaRange::Under1000 => "Under 1000 sqft",
            AreaRange::From1000To2000 => "1000 - 2000 sqft",
            AreaRange::From2000To5000 => "2000 - 5000 sqft",
            AreaRange::Above5000 => "5000+ sqft",
        }
    }

    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            AreaRange::Under1000 => (f64::NEG_INFINITY, Some(1000.0)),
            AreaRange::From1000To2000 => (1000.0, Some(2000.0)),
            AreaRange::From2000To5000 => (2000.0, Some(5000.0)),
            AreaRange::Above5000 => (5000.0, None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Unsorted,
    PriceLow,
    PriceHigh,
    Name,
    AreaLow,
    AreaHigh,
    Newest,
    Oldest,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Unsorted,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Name,
        SortKey::AreaLow,
        SortKey::AreaHigh,
        SortKey::Newest,
        SortKey::Oldest,
    ];

    /// Unknown tokens fall back to `Unsorted`.
    pub fn from_token(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.token() == token)
            .unwrap_or(SortKey::Unsorted)
    }

    pub fn token(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
            SortKey::AreaLow => "area-low",
            SortKey::AreaHigh => "area-high",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "Sort by",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Name => "Name",
            SortKey::AreaLow => "Area: Small to Large",
            SortKey::AreaHigh => "Area: Large to Small",
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
        }
    }
}

/// Everything the listing page lets a visitor choose. Built once per request
/// and passed by reference into the pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyQuery {
    pub search: String,
    pub category: Option<String>,
    pub city: Option<String>,
    pub price: Option<PriceRange>,
    pub area: Option<AreaRange>,
    pub sort: SortKey,
    /// 1-based page of the derived view.
    pub page: usize,
}

impl PropertyQuery {
    /// Builds a query from decoded key/value pairs. Empty values and
    /// unrecognised tokens leave the corresponding filter unset.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = PropertyQuery {
            page: 1,
            ..PropertyQuery::default()
        };

        for (key, value) in pairs {
            let value = value.as_ref();
            let non_empty = || Some(value.to_string()).filter(|v| !v.is_empty());

            match key.as_ref() {
                "search" => query.search = value.trim().to_string(),
                "category" => query.category = non_empty(),
                "city" => query.city = non_empty(),
                "price" => query.price = PriceRange::from_token(value),
                "area" => query.area = AreaRange::from_token(value),
                "sort" => query.sort = SortKey::from_token(value),
                "page" => query.page = value.parse::<usize>().unwrap_or(1).max(1),
                _ => {}
            }
        }

        query
    }

    /// Parses a raw (still percent-encoded) URL query string.
    pub fn from_query_string(raw: &str) -> Self {
        Self::from_pairs(form_urlencoded::parse(raw.as_bytes()))
    }

    /// Renders the active filters back into a query string. The page is
    /// left out so callers can append their own.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            out.append_pair("search", &self.search);
        }
        if let Some(category) = &self.category {
            out.append_pair("category", category);
        }
        if let Some(city) = &self.city {
            out.append_pair("city", city);
        }
        if let Some(price) = self.price {
            out.append_pair("price", price.token());
        }
        if let Some(area) = self.area {
            out.append_pair("area", area.token());
        }
        if self.sort != SortKey::Unsorted {
            out.append_pair("sort", self.sort.token());
        }

        out.finish()
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.city.is_some()
            || self.price.is_some()
            || self.area.is_some()
    }
}
