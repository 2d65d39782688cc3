//! Navigation graph: typed routes and their string paths.

mod routes;

pub use routes::{start_for, Route, RouteError};
