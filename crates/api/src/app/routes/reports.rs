use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_inventory::{build_report, render_csv};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/summary", get(summary_report))
}

/// Aggregate snapshot of the whole store: JSON by default, CSV attachment
/// when `format=csv`. Unrecognized formats fall back to JSON.
pub async fn summary_report(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ReportQuery>,
) -> axum::response::Response {
    let items = match services.item_store.list(None).await {
        Ok(items) => items,
        Err(e) => return errors::store_error_to_response("list", e),
    };

    let report = build_report(&items);

    if query.format.as_deref() == Some("csv") {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=inventory_report.csv",
                ),
            ],
            render_csv(&report),
        )
            .into_response()
    } else {
        (StatusCode::OK, Json(report)).into_response()
    }
}
