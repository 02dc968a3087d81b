mod detail_tests;
mod export_tests;
mod listing_tests;
