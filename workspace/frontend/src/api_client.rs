pub mod model_status;
pub mod prediction;

use common::{ApiError, ApiReply};
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            ApiError::Transport(error_msg)
        })?;

    read_reply("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            ApiError::Transport(error_msg)
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            ApiError::Transport(error_msg)
        })?;

    read_reply("POST", endpoint, response).await
}

/// Parses the body as an [`ApiReply`] whatever the HTTP status: a non-2xx
/// answer that carries an `error` field is still an application error.
async fn read_reply<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let reply: ApiReply<T> = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            ApiError::Transport(error_msg)
        })?;

    match reply.into_api_result() {
        Ok(data) => {
            log::info!("{} {} - Success", method, endpoint);
            Ok(data)
        }
        Err(err) => {
            log::warn!("{} {} - API error: {}", method, endpoint, err);
            Err(err)
        }
    }
}
