use common::{ApiError, ModelStatusResponse, MODEL_STATUS_PATH};
use crate::api_client;

pub async fn get_model_status() -> Result<ModelStatusResponse, ApiError> {
    log::trace!("Fetching model status");

    let result = api_client::get::<ModelStatusResponse>(MODEL_STATUS_PATH).await;

    match &result {
        Ok(status) => log::info!(
            "Model status: rf available={}, sgd available={}",
            status.rf_model.available,
            status.sgd_model.available
        ),
        Err(ApiError::Transport(e)) => log::error!("Error fetching model status: {}", e),
        Err(ApiError::Application(e)) => log::warn!("Model status reported an error: {}", e),
    }

    result
}
