use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use icy_connectors::AudienceInsights;
use icy_core::ContentItem;
use icy_scoring::{detailed_analysis, DetailedAnalysis};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_connector_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ContentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreatorContent {
    creator_id: String,
    content: Vec<ContentItem>,
    total: usize,
}

pub(super) fn normalize_content_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(10).clamp(1, 50)
}

/// GET /api/v1/creators/{creator_id}/content: newest posts first.
pub(super) async fn list_creator_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(creator_id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ApiResponse<CreatorContent>>, ApiError> {
    let content = state
        .orchestrator
        .connectors()
        .recent_content(&creator_id, normalize_content_limit(query.limit))
        .await
        .map_err(|e| map_connector_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: CreatorContent {
            total: content.len(),
            creator_id,
            content,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET /api/v1/creators/{creator_id}: in-depth profile of one creator.
pub(super) async fn get_creator_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(creator_id): Path<String>,
) -> Result<Json<ApiResponse<DetailedAnalysis>>, ApiError> {
    let creator = state
        .orchestrator
        .connectors()
        .find_creator(&creator_id)
        .await
        .map_err(|e| map_connector_error(req_id.0.clone(), &e))?;

    let analysis = detailed_analysis(&creator, &mut state.request_rng());
    tracing::debug!(creator_id = %analysis.creator_id, "creator analysis generated");

    Ok(Json(ApiResponse {
        data: analysis,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET /api/v1/creators/{creator_id}/audience
pub(super) async fn get_creator_audience(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(creator_id): Path<String>,
) -> Result<Json<ApiResponse<AudienceInsights>>, ApiError> {
    let insights = state
        .orchestrator
        .connectors()
        .audience_insights(&creator_id)
        .await
        .map_err(|e| map_connector_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: insights,
        meta: ResponseMeta::new(req_id.0),
    }))
}
