pub mod route;
pub mod routes;

pub use route::{MenuNode, RenderFn, RouteEntry, RouteTree, RouteTreeError};
