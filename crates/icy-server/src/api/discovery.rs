//! Discovery task handlers.
//!
//! - `POST /api/v1/discovery/start`            queue a discovery run (202)
//! - `GET  /api/v1/discovery/{task_id}/status`  progress snapshot
//! - `GET  /api/v1/discovery/{task_id}/results` ranked creators once completed

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use icy_core::{BrandCriteria, Platform};
use icy_discovery::{DiscoveryResults, TaskId, TaskStatus, TaskStatusView};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_discovery_error, ApiError, ApiResponse, AppState, ResponseMeta};

const DEFAULT_MAX_RESULTS: usize = 50;

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize)]
pub(super) struct StartDiscoveryRequest {
    pub brand_data: BrandCriteria,
    pub platforms: Vec<Platform>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct StartDiscoveryResponse {
    task_id: TaskId,
    status: TaskStatus,
    message: &'static str,
}

/// Unparseable ids cannot name a task, so they are reported as missing.
fn parse_task_id(request_id: &str, raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<TaskId>()
        .map_err(|_| ApiError::new(request_id, "not_found", format!("task '{raw}' not found")))
}

pub(super) async fn start_discovery(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<StartDiscoveryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StartDiscoveryResponse>>), ApiError> {
    let task_id = state
        .orchestrator
        .start(body.brand_data, body.platforms, body.max_results)
        .await
        .map_err(|e| map_discovery_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse {
            data: StartDiscoveryResponse {
                task_id,
                status: TaskStatus::Started,
                message: "Discovery started. Poll the status endpoint with this task_id.",
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn get_discovery_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(task_id): Path<String>,
) -> Result<Json<ApiResponse<TaskStatusView>>, ApiError> {
    let id = parse_task_id(&req_id.0, &task_id)?;
    let status = state
        .orchestrator
        .get_status(id)
        .await
        .map_err(|e| map_discovery_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: status,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_discovery_results(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(task_id): Path<String>,
) -> Result<Json<ApiResponse<DiscoveryResults>>, ApiError> {
    let id = parse_task_id(&req_id.0, &task_id)?;
    let results = state
        .orchestrator
        .get_results(id)
        .await
        .map_err(|e| map_discovery_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: results,
        meta: ResponseMeta::new(req_id.0),
    }))
}
