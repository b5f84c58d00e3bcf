use axum::Router;

pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Sub-routers have their state applied, so the result is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Router with the `/ready` endpoint that pings the database.
///
/// Merged next to the stateless router returned by `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
