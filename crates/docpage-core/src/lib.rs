pub mod config;
pub mod logging;

pub mod fetch;
pub mod load;
pub mod request;
pub mod target;

pub use fetch::{ContentFetcher, FetchError, NOT_FOUND_FALLBACK};
pub use load::{load, PageData, PageProps};
pub use request::{PagePath, RequestUrl};
