pub mod brute;
pub mod js_scraper;
pub mod mutator;
pub mod recursive;
