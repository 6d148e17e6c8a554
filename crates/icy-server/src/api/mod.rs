mod campaigns;
mod creators;
mod discovery;
mod messages;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use icy_connectors::ConnectorError;
use icy_core::Platform;
use icy_discovery::{DiscoveryError, Orchestrator};
use icy_outreach::{CampaignRepository, MessageSender, OutreachError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub campaigns: Arc<dyn CampaignRepository>,
    pub sender: Arc<dyn MessageSender>,
    /// Seeds message synthesis, creator analysis and campaign metrics when
    /// set; otherwise each request draws fresh OS entropy.
    pub rng_seed: Option<u64>,
}

impl AppState {
    pub(super) fn request_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    connectors: Vec<Platform>,
    /// Discovery tasks currently retained.
    tasks: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" | "invalid_state" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_discovery_error(request_id: String, error: &DiscoveryError) -> ApiError {
    match error {
        DiscoveryError::NotFound(_) => ApiError::new(request_id, "not_found", error.to_string()),
        DiscoveryError::Validation(_) => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        DiscoveryError::InvalidState(_) => {
            ApiError::new(request_id, "invalid_state", error.to_string())
        }
        DiscoveryError::Repository(_) => {
            tracing::error!(error = %error, "task repository failure");
            ApiError::new(request_id, "internal_error", "task storage failed")
        }
    }
}

pub(super) fn map_connector_error(request_id: String, error: &ConnectorError) -> ApiError {
    match error {
        ConnectorError::NotFound(_) => ApiError::new(request_id, "not_found", error.to_string()),
        _ => {
            tracing::error!(error = %error, "connector request failed");
            ApiError::new(request_id, "internal_error", "creator lookup failed")
        }
    }
}

pub(super) fn map_outreach_error(request_id: String, error: &OutreachError) -> ApiError {
    match error {
        OutreachError::Validation(_) => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        OutreachError::CampaignNotFound(_) => {
            ApiError::new(request_id, "not_found", error.to_string())
        }
        OutreachError::Repository(_) => {
            tracing::error!(error = %error, "campaign repository failure");
            ApiError::new(request_id, "internal_error", "campaign storage failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn limited_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/discovery/start", post(discovery::start_discovery))
        .route(
            "/api/v1/discovery/{task_id}/status",
            get(discovery::get_discovery_status),
        )
        .route(
            "/api/v1/discovery/{task_id}/results",
            get(discovery::get_discovery_results),
        )
        .route(
            "/api/v1/creators/{creator_id}",
            get(creators::get_creator_analysis),
        )
        .route(
            "/api/v1/creators/{creator_id}/content",
            get(creators::list_creator_content),
        )
        .route(
            "/api/v1/creators/{creator_id}/audience",
            get(creators::get_creator_audience),
        )
        .route("/api/v1/messages/generate", post(messages::generate_message))
        .route("/api/v1/messages/send", post(messages::send_message))
        .route("/api/v1/campaigns", post(campaigns::create_campaign))
        .route(
            "/api/v1/campaigns/{campaign_id}/metrics",
            get(campaigns::get_campaign_metrics),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(limited_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<HealthData>>, ApiError> {
    let tasks = state
        .orchestrator
        .task_count()
        .await
        .map_err(|e| map_discovery_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: HealthData {
            status: "ok",
            connectors: state.orchestrator.connectors().platforms(),
            tasks,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
