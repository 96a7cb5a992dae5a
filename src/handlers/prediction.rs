use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_valid::{Valid, ValidRejection};
use common::{ErrorPayload, PredictionRequest, PredictionResponse, ValidationError};
use tracing::{info, instrument};
use crate::error::GatewayError;
use crate::schemas::AppState;

/// Current AQI and forecast for the given weather conditions
///
/// The body is validated before it is relayed to the prediction service.
#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Prediction computed", body = PredictionResponse),
        (status = 422, description = "Invalid weather conditions", body = ErrorPayload),
        (status = 502, description = "Prediction service unavailable", body = ErrorPayload)
    )
)]
#[instrument(skip(state, payload))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Valid<Json<PredictionRequest>>, ValidRejection<JsonRejection>>,
) -> Result<Json<PredictionResponse>, GatewayError> {
    let Valid(Json(request)) = payload.map_err(|rejection| match rejection {
        ValidRejection::Valid(errors) => GatewayError::from(ValidationError::from(errors)),
        ValidRejection::Inner(rejection) => GatewayError::Validation(rejection.body_text()),
    })?;

    let response = state.upstream.predict(&request).await?;
    info!(
        model = %response.model_used,
        current_aqi = response.current_aqi,
        forecast_days = response.forecast.len(),
        "Prediction relayed"
    );
    Ok(Json(response))
}
