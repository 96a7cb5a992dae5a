use axum::{extract::State, response::Json};
use common::{ErrorPayload, ModelStatusResponse};
use tracing::{debug, instrument};
use crate::error::GatewayError;
use crate::schemas::AppState;

/// Availability of the prediction models, relayed from the prediction service
#[utoipa::path(
    get,
    path = "/model_status",
    tag = "prediction",
    responses(
        (status = 200, description = "Model availability", body = ModelStatusResponse),
        (status = 502, description = "Prediction service unavailable", body = ErrorPayload)
    )
)]
#[instrument(skip(state))]
pub async fn get_model_status(
    State(state): State<AppState>,
) -> Result<Json<ModelStatusResponse>, GatewayError> {
    let status = state.upstream.model_status().await?;
    debug!(
        rf = status.rf_model.available,
        sgd = status.sgd_model.available,
        "Model status relayed"
    );
    Ok(Json(status))
}
