use std::sync::Arc;

use common::{
    CategoryInfo, ErrorPayload, ForecastDay, ModelInfo, ModelStatusResponse, ModelType,
    PredictionRequest, PredictionResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::config::GatewayConfig;
use crate::upstream::UpstreamClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Merged configuration
    pub config: Arc<GatewayConfig>,
    /// Client for the prediction service
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            upstream,
        })
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction service status, `reachable` or `unreachable`
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::model_status::get_model_status,
        crate::handlers::prediction::predict,
    ),
    components(
        schemas(
            ErrorPayload,
            HealthResponse,
            ModelType,
            ModelInfo,
            ModelStatusResponse,
            PredictionRequest,
            CategoryInfo,
            ForecastDay,
            PredictionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Relayed prediction service endpoints"),
    ),
    info(
        title = "AQI Forecast API",
        description = "Gateway in front of the air quality prediction service",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
