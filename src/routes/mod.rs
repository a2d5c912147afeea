pub mod builtin;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod geojson;
pub mod model;
pub mod source;

pub use catalog::RouteCatalog;
pub use error::RouteError;
pub use model::{Category, Route, RouteStep};
