//! Login error model.

use std::borrow::Cow;

use thiserror::Error;

use crate::ValueObject;

/// A required request field was absent or empty.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("missing param: {param_name}")]
pub struct MissingParamError {
    param_name: Cow<'static, str>,
}

impl MissingParamError {
    pub fn new(param_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            param_name: param_name.into(),
        }
    }

    pub fn param_name(&self) -> &str {
        &self.param_name
    }
}

/// The submitted credentials were rejected.
#[derive(Debug, Error, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("unauthorized")]
pub struct UnauthorizedError;

/// Generic internal failure. Deliberately carries no detail.
#[derive(Debug, Error, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("internal server error")]
pub struct ServerError;

impl ValueObject for MissingParamError {}
impl ValueObject for UnauthorizedError {}
impl ValueObject for ServerError {}

/// Every way a login attempt can be turned down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    MissingParam(#[from] MissingParamError),

    #[error(transparent)]
    Unauthorized(#[from] UnauthorizedError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

impl LoginError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "missing_param",
            Self::Unauthorized(_) => "unauthorized",
            Self::Server(_) => "server_error",
        }
    }
}

impl ValueObject for LoginError {}
