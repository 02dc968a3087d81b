pub mod detail;
pub mod error;
pub mod listing;

pub use detail::detail_page;
pub use error::error_page;
pub use listing::{listing_page, ListingVm};
