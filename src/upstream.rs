use axum::http::StatusCode;
use common::{
    ApiReply, ModelStatusResponse, PredictionRequest, PredictionResponse, MODEL_STATUS_PATH,
    PREDICT_PATH,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// HTTP client for the prediction service.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.upstream_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self), fields(upstream = %self.base_url))]
    pub async fn model_status(&self) -> Result<ModelStatusResponse, GatewayError> {
        let response = self
            .client
            .get(self.url(MODEL_STATUS_PATH))
            .send()
            .await
            .map_err(GatewayError::unavailable)?;

        read_reply(response).await
    }

    #[instrument(skip(self, request), fields(upstream = %self.base_url, model = %request.model_type))]
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, GatewayError> {
        let response = self
            .client
            .post(self.url(PREDICT_PATH))
            .json(request)
            .send()
            .await
            .map_err(GatewayError::unavailable)?;

        read_reply(response).await
    }

    /// Whether the service answers at all, whatever the status code.
    pub async fn is_reachable(&self) -> bool {
        match self.client.get(self.url(MODEL_STATUS_PATH)).send().await {
            Ok(_) => true,
            Err(e) => {
                debug!("Prediction service not reachable: {}", e);
                false
            }
        }
    }
}

/// Decodes an [`ApiReply`] whatever the HTTP status.
///
/// A failure keeps the upstream status, or 200 when upstream answered 2xx.
async fn read_reply<T>(response: Response) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await.map_err(GatewayError::unavailable)?;

    let reply: ApiReply<T> = serde_json::from_slice(&body).map_err(|e| {
        warn!(status = status.as_u16(), "Unparseable reply from prediction service: {}", e);
        GatewayError::unavailable(e)
    })?;

    match reply {
        ApiReply::Success(data) => Ok(data),
        ApiReply::Failure(payload) => {
            let status = if status.is_success() {
                StatusCode::OK
            } else {
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
            };
            Err(GatewayError::Upstream {
                status,
                message: payload.error,
            })
        }
    }
}
