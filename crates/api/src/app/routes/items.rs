use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{validate_create, validate_update};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    let candidate = match validate_create(&body.into_input()) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.item_store.insert(candidate).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response("insert", e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    // An empty `category=` value means no filter, same as an absent one.
    let category = query.category.as_deref().filter(|c| !c.is_empty());

    match services.item_store.list(category).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response("list", e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::domain_error_to_response(DomainError::NotFound),
    };

    match services.item_store.get(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => errors::domain_error_to_response(DomainError::NotFound),
        Err(e) => errors::store_error_to_response("get", e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::domain_error_to_response(DomainError::NotFound),
    };

    let existing = match services.item_store.get(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return errors::domain_error_to_response(DomainError::NotFound),
        Err(e) => return errors::store_error_to_response("get", e),
    };

    // Nothing is persisted when the merged record fails validation.
    let merged = match validate_update(&existing, &body.into_input()) {
        Ok(m) => m,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.item_store.update(&merged).await {
        Ok(true) => (StatusCode::OK, Json(merged)).into_response(),
        // The record disappeared between the read and the write.
        Ok(false) => errors::domain_error_to_response(DomainError::NotFound),
        Err(e) => errors::store_error_to_response("update", e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::domain_error_to_response(DomainError::NotFound),
    };

    match services.item_store.delete(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Item deleted" })),
        )
            .into_response(),
        Ok(false) => errors::domain_error_to_response(DomainError::NotFound),
        Err(e) => errors::store_error_to_response("delete", e),
    }
}
