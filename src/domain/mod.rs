pub mod filter;
pub mod property;
pub mod query;
pub mod sort;
pub mod store;
pub mod view;

pub use property::{Price, Property};
pub use query::{AreaRange, PriceRange, PropertyQuery, SortKey};
pub use store::PropertyStore;
pub use view::{compute_view, distinct_categories, distinct_cities, paginate, Page};
