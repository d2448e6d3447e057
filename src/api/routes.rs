use axum::{extract::State, http::StatusCode, Json};

use crate::api::AppState;
use crate::service::{self, InventoryStatus, KpiMetrics};
use crate::simulation::table::DailyRecord;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// The alert may go out over the network, so the query runs on the blocking
/// pool rather than on a runtime worker.
pub async fn inventory_status(
    State(state): State<AppState>,
) -> Result<Json<InventoryStatus>, StatusCode> {
    let status = tokio::task::spawn_blocking(move || {
        service::inventory_status(&state.context, state.notifier.as_ref())
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "status query aborted");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(status))
}

pub async fn kpi_metrics(State(state): State<AppState>) -> Json<KpiMetrics> {
    Json(service::kpi_metrics(&state.context))
}

pub async fn daily_demand(State(state): State<AppState>) -> Json<Vec<DailyRecord>> {
    Json(service::daily_series(&state.context).to_vec())
}
