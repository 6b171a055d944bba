//! Scraping session against the utility's customer portal.
//!
//! The portal has no API. A run logs in through the capricorn form endpoint,
//! asks it to prepare a Green Button export, and downloads the export from the
//! path the resulting page points at. All three requests share one cookie jar.

pub mod date_window;
pub mod feed_fetcher;
pub mod key_resolver;
pub mod session;

pub use date_window::DateWindow;
pub use feed_fetcher::fetch;
pub use key_resolver::request_key;
pub use session::Session;
