use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_infra::item_store::StoreError;

/// Map a domain failure to its HTTP response.
///
/// The error's display string is the user-visible message.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::MissingFields | DomainError::InvalidQuantity | DomainError::InvalidPrice => {
            StatusCode::BAD_REQUEST
        }
    };
    json_error(status, err.to_string())
}

/// Map a storage failure to its HTTP response, logging the cause.
///
/// Store internals never reach response bodies.
pub fn store_error_to_response(operation: &str, err: StoreError) -> axum::response::Response {
    tracing::error!(operation, error = %err, "item store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
