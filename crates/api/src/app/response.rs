use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::HttpResponse;

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            Some(body) => (status, Json(body.to_json())).into_response(),
            None => status.into_response(),
        }
    }
}
