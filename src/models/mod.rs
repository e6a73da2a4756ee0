pub mod route;
pub mod produto;

pub use route::{Route, RouteMatch, RouteMeta, RouteTarget, ViewKey};
pub use produto::{Catalogo, Produto};
