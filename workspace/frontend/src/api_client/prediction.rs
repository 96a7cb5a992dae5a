use common::{ApiError, PredictionRequest, PredictionResponse, PREDICT_PATH};
use crate::api_client;

pub async fn request_prediction(request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
    log::trace!(
        "Requesting prediction with model {} (temperature={}, humidity={}, wind_speed={}, pressure={})",
        request.model_type,
        request.temperature,
        request.humidity,
        request.wind_speed,
        request.pressure
    );

    let result = api_client::post::<PredictionResponse, _>(PREDICT_PATH, request).await;

    match &result {
        Ok(response) => log::info!(
            "Prediction received: current AQI {:.1} ({}), {} forecast day(s)",
            response.current_aqi,
            response.category.level,
            response.forecast.len()
        ),
        Err(ApiError::Transport(e)) => log::error!("Error getting prediction: {}", e),
        Err(ApiError::Application(e)) => log::warn!("Prediction rejected: {}", e),
    }

    result
}
