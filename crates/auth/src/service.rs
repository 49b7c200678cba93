//! Authentication collaborator contract.

use std::sync::Arc;

use thiserror::Error;

use crate::AccessToken;

/// Fault raised by an [`AuthService`] while checking credentials.
///
/// This is *not* "wrong password": rejected credentials are `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthServiceError {
    /// The service is not able to serve requests (not configured, shut down).
    #[error("auth service unavailable: {0}")]
    Unavailable(String),

    /// A dependency of the service failed (store, key material, ...).
    #[error("auth service backend failure: {0}")]
    Backend(String),
}

impl AuthServiceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Verifies an email/password pair.
///
/// Implementations must be safe to call concurrently; the router holds a
/// shared reference and never synchronizes calls.
pub trait AuthService: Send + Sync {
    /// Check the credentials.
    ///
    /// - `Ok(Some(token))`: credentials accepted
    /// - `Ok(None)`: credentials rejected
    /// - `Err(_)`: the check itself failed
    fn authenticate(&self, email: &str, password: &str) -> Result<Option<AccessToken>, AuthServiceError>;

    /// Whether this collaborator can authenticate at all.
    ///
    /// Callers check this before `authenticate`; a collaborator reporting
    /// `false` is treated as misconfigured.
    fn can_authenticate(&self) -> bool {
        true
    }
}

impl<T> AuthService for Arc<T>
where
    T: AuthService + ?Sized,
{
    fn authenticate(&self, email: &str, password: &str) -> Result<Option<AccessToken>, AuthServiceError> {
        (**self).authenticate(email, password)
    }

    fn can_authenticate(&self) -> bool {
        (**self).can_authenticate()
    }
}
