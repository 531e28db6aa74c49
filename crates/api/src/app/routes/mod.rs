use axum::Router;

pub mod items;
pub mod reports;
pub mod system;

/// Router for all store-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/reports", reports::router())
}
