//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

use loginkit_auth::InMemoryAuthService;

pub const ADDR_VAR: &str = "LOGINKIT_ADDR";
pub const DEMO_EMAIL_VAR: &str = "LOGINKIT_DEMO_EMAIL";
pub const DEMO_PASSWORD_VAR: &str = "LOGINKIT_DEMO_PASSWORD";
pub const DEMO_TOKEN_VAR: &str = "LOGINKIT_DEMO_TOKEN";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("incomplete demo account: {missing} is not set (LOGINKIT_DEMO_EMAIL, LOGINKIT_DEMO_PASSWORD and LOGINKIT_DEMO_TOKEN go together)")]
    IncompleteDemoAccount { missing: &'static str },
}

/// Single account seeded into the in-memory directory at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub token: String,
}

impl core::fmt::Debug for DemoAccount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DemoAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub demo_account: Option<DemoAccount>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            var: ADDR_VAR,
            reason: e.to_string(),
        })?;

        let demo_account = match (get(DEMO_EMAIL_VAR), get(DEMO_PASSWORD_VAR), get(DEMO_TOKEN_VAR)) {
            (None, None, None) => None,
            (Some(email), Some(password), Some(token)) => Some(DemoAccount { email, password, token }),
            (email, password, _) => {
                let missing = if email.is_none() {
                    DEMO_EMAIL_VAR
                } else if password.is_none() {
                    DEMO_PASSWORD_VAR
                } else {
                    DEMO_TOKEN_VAR
                };
                return Err(ConfigError::IncompleteDemoAccount { missing });
            }
        };

        Ok(Self { addr, demo_account })
    }

    /// Account directory backing the login route.
    pub fn auth_service(&self) -> InMemoryAuthService {
        match &self.demo_account {
            Some(account) => InMemoryAuthService::new().with_account(
                account.email.clone(),
                account.password.clone(),
                account.token.as_str(),
            ),
            None => {
                tracing::warn!("no demo account configured; every login will be rejected");
                InMemoryAuthService::new()
            }
        }
    }
}
