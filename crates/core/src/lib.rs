//! `loginkit-core` — error values shared by the login boundary.
//!
//! This crate is transport-agnostic: it knows nothing about HTTP status codes
//! or JSON, only about the values a login attempt can be rejected with.

pub mod error;
pub mod value_object;

pub use error::{LoginError, MissingParamError, ServerError, UnauthorizedError};
pub use value_object::ValueObject;
