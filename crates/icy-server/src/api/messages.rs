use axum::{extract::State, Extension, Json};
use icy_core::BrandCriteria;
use icy_outreach::{synthesize, CreatorContext, DeliveryReceipt, OutboundMessage, OutreachMessage};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_connector_error, ApiError, ApiResponse, AppState, ResponseMeta};

fn default_message_type() -> String {
    "collaboration".to_string()
}

#[derive(Debug, Deserialize)]
pub(super) struct GenerateMessageRequest {
    #[serde(alias = "influencer_id")]
    pub creator_id: String,
    pub brand_data: BrandCriteria,
    #[serde(default = "default_message_type")]
    pub message_type: String,
}

/// POST /api/v1/messages/generate: personalized outreach for one creator.
pub(super) async fn generate_message(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<GenerateMessageRequest>,
) -> Result<Json<ApiResponse<OutreachMessage>>, ApiError> {
    body.brand_data
        .validate()
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let creator = state
        .orchestrator
        .connectors()
        .find_creator(&body.creator_id)
        .await
        .map_err(|e| map_connector_error(req_id.0.clone(), &e))?;

    let message = synthesize(
        &CreatorContext::from(&creator),
        &body.brand_data,
        &body.message_type,
        &mut state.request_rng(),
    );
    tracing::info!(
        creator_id = %message.creator_id,
        tone = message.tone.as_str(),
        personalization = message.personalization_score,
        "outreach message generated"
    );

    Ok(Json(ApiResponse {
        data: message,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/messages/send: deliver a message to a known creator.
///
/// An undelivered message is still a 200; the receipt carries
/// `status: "failed"` and the reason.
pub(super) async fn send_message(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<OutboundMessage>,
) -> Result<Json<ApiResponse<DeliveryReceipt>>, ApiError> {
    body.validate()
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    state
        .orchestrator
        .connectors()
        .find_creator(&body.creator_id)
        .await
        .map_err(|e| map_connector_error(req_id.0.clone(), &e))?;

    let receipt = state.sender.send(&body).await;

    Ok(Json(ApiResponse {
        data: receipt,
        meta: ResponseMeta::new(req_id.0),
    }))
}
