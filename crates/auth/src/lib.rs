//! `loginkit-auth` — the credential-checking collaborator contract.
//!
//! This crate is intentionally decoupled from HTTP: the login router depends on
//! [`AuthService`] and nothing else from here.

pub mod in_memory;
pub mod service;
pub mod token;

pub use in_memory::InMemoryAuthService;
pub use service::{AuthService, AuthServiceError};
pub use token::AccessToken;
