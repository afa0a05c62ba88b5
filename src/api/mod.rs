//! HTTP API module: route table, core handlers, docs, and middleware.

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
