//! In-memory account directory.
//!
//! Fixture-grade: passwords are compared as plain strings. Useful for local
//! runs and tests, not for production credentials.

use std::collections::HashMap;

use crate::{AccessToken, AuthService, AuthServiceError};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    token: AccessToken,
}

/// Immutable email → account map implementing [`AuthService`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthService {
    accounts: HashMap<String, Account>,
}

impl InMemoryAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account. A later registration for the same email replaces
    /// the earlier one.
    pub fn with_account(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<AccessToken>,
    ) -> Self {
        self.accounts.insert(
            email.into(),
            Account {
                password: password.into(),
                token: token.into(),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AuthService for InMemoryAuthService {
    fn authenticate(&self, email: &str, password: &str) -> Result<Option<AccessToken>, AuthServiceError> {
        let Some(account) = self.accounts.get(email) else {
            tracing::debug!("no account registered for email");
            return Ok(None);
        };

        if account.password != password {
            tracing::debug!("password mismatch");
            return Ok(None);
        }

        Ok(Some(account.token.clone()))
    }
}
