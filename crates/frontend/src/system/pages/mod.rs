pub mod error_pages;

pub use error_pages::{NotFoundPage, RouteConfigErrorPage};
