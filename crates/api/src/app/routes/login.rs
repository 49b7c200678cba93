use axum::{body::Bytes, Extension};
use serde_json::{Map, Value};

use crate::{HttpRequest, HttpResponse, LoginBody, LoginRouter};

/// `POST /login`
///
/// Only a JSON object counts as a body; anything else reaches the router as a
/// request without one. Inside the object, a field that is not a string is
/// treated as absent.
pub async fn login(Extension(router): Extension<LoginRouter>, payload: Bytes) -> HttpResponse {
    let http_request = HttpRequest {
        body: parse_body(&payload),
    };
    router.route(Some(&http_request))
}

fn parse_body(payload: &[u8]) -> Option<LoginBody> {
    if payload.is_empty() {
        return None;
    }

    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => Some(LoginBody {
            email: string_field(&fields, "email"),
            password: string_field(&fields, "password"),
        }),
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "login payload is not a JSON object");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "login payload is not valid JSON");
            None
        }
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(value) => Some(value.clone()),
        Value::Null => None,
        other => {
            tracing::debug!(field = name, kind = json_kind(other), "ignoring non-string login field");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
