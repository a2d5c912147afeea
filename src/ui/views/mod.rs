pub mod navigation;
pub mod route_list;

pub use navigation::Navigation;
pub use route_list::RouteList;
