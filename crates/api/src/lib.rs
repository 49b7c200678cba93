//! HTTP-style login boundary: request/response shapes, the login router, and
//! an axum adapter serving it.

pub mod app;
pub mod config;
pub mod http;
pub mod login_router;

pub use http::{HttpRequest, HttpResponse, LoginBody, ResponseBody};
pub use login_router::LoginRouter;
