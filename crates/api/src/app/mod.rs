//! HTTP application wiring (axum router around the [`LoginRouter`]).
//!
//! - `routes/`: one handler file per endpoint
//! - `response.rs`: `HttpResponse` → axum response conversion

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::LoginRouter;

pub mod response;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(login_router: LoginRouter) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/login", post(routes::login::login))
        .layer(Extension(login_router))
}
