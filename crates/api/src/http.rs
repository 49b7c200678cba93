//! Transport-neutral request/response shapes.
//!
//! Every level is optional on the way in: a missing request, body, or field is
//! a condition the router reports, not a parse failure.

use serde::Deserialize;
use serde_json::json;

use loginkit_auth::AccessToken;
use loginkit_core::{LoginError, MissingParamError, ServerError, UnauthorizedError};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Inbound login request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Option<LoginBody>,
}

impl HttpRequest {
    pub fn new(body: LoginBody) -> Self {
        Self { body: Some(body) }
    }
}

/// Login payload. Missing keys deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl LoginBody {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Outbound response; built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    AccessToken(AccessToken),
    Error(LoginError),
}

impl HttpResponse {
    pub fn ok(access_token: AccessToken) -> Self {
        Self {
            status_code: STATUS_OK,
            body: Some(ResponseBody::AccessToken(access_token)),
        }
    }

    pub fn bad_request(err: MissingParamError) -> Self {
        Self::error(STATUS_BAD_REQUEST, err.into())
    }

    pub fn unauthorized() -> Self {
        Self::error(STATUS_UNAUTHORIZED, UnauthorizedError.into())
    }

    pub fn server_error() -> Self {
        Self::error(STATUS_INTERNAL_SERVER_ERROR, ServerError.into())
    }

    fn error(status_code: u16, err: LoginError) -> Self {
        Self {
            status_code,
            body: Some(ResponseBody::Error(err)),
        }
    }

    /// The error carried in the body, if any.
    pub fn error_body(&self) -> Option<&LoginError> {
        match &self.body {
            Some(ResponseBody::Error(err)) => Some(err),
            _ => None,
        }
    }
}

impl ResponseBody {
    /// JSON rendering used by transport adapters.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::AccessToken(token) => json!({ "access_token": token }),
            Self::Error(err) => json!({
                "error": err.code(),
                "message": err.to_string(),
            }),
        }
    }
}
