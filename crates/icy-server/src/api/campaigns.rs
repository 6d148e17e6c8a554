//! Campaign handlers.
//!
//! - `POST /api/v1/campaigns`                       create a campaign (201)
//! - `GET  /api/v1/campaigns/{campaign_id}/metrics` current performance

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use icy_core::BrandCriteria;
use icy_outreach::{campaign_metrics, Campaign, CampaignId, CampaignMetrics};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_outreach_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CreateCampaignRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub brand_data: BrandCriteria,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateCampaignResponse {
    campaign_id: CampaignId,
    name: String,
    status: &'static str,
}

pub(super) async fn create_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateCampaignResponse>>), ApiError> {
    let campaign = Campaign::new(body.name, body.brand_data)
        .map_err(|e| map_outreach_error(req_id.0.clone(), &e))?;
    let campaign_id = campaign.id;
    let name = campaign.name.clone();
    state
        .campaigns
        .insert(campaign)
        .await
        .map_err(|e| map_outreach_error(req_id.0.clone(), &e))?;

    tracing::info!(%campaign_id, %name, "campaign created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: CreateCampaignResponse {
                campaign_id,
                name,
                status: "created",
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn get_campaign_metrics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(campaign_id): Path<String>,
) -> Result<Json<ApiResponse<CampaignMetrics>>, ApiError> {
    let id: CampaignId = campaign_id.parse().map_err(|_| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("campaign '{campaign_id}' not found"),
        )
    })?;

    let mut rng = state.request_rng();
    let metrics = campaign_metrics(state.campaigns.as_ref(), id, &mut rng)
        .await
        .map_err(|e| map_outreach_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: metrics,
        meta: ResponseMeta::new(req_id.0),
    }))
}
