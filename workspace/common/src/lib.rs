//! Transport-layer types shared between the gateway and the frontend.
//! These structs mirror the prediction service's request/response payloads
//! so both sides deserialize the same shapes.

mod validation;

pub use validation::{FieldLimits, PredictionForm, ValidationError};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Path of the model status endpoint, relative to the API base.
pub const MODEL_STATUS_PATH: &str = "/model_status";
/// Path of the prediction endpoint, relative to the API base.
pub const PREDICT_PATH: &str = "/predict";
/// Shown in place of any transport-level failure.
pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to server";

// ===================== Models =====================

/// Prediction backend selectable by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Random Forest, retrained periodically.
    #[default]
    Rf,
    /// Stochastic Gradient Descent, updated in real time.
    Sgd,
}

impl ModelType {
    pub const ALL: [ModelType; 2] = [ModelType::Rf, ModelType::Sgd];

    /// Value used on the wire and in the `model_type` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Rf => "rf",
            ModelType::Sgd => "sgd",
        }
    }

    /// Name used in the "Prediction made using ..." footer.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelType::Rf => "Random Forest",
            ModelType::Sgd => "SGD",
        }
    }

    /// Name used in the model status table.
    pub fn status_name(self) -> &'static str {
        match self {
            ModelType::Rf => "Random Forest",
            ModelType::Sgd => "SGD (Realtime)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rf" => Some(ModelType::Rf),
            "sgd" => Some(ModelType::Sgd),
            _ => None,
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability of a single model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModelInfo {
    pub available: bool,
    /// Timestamp string, displayed verbatim.
    pub last_updated: String,
}

/// Response of `GET /model_status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModelStatusResponse {
    pub rf_model: ModelInfo,
    pub sgd_model: ModelInfo,
}

impl ModelStatusResponse {
    pub fn model(&self, model: ModelType) -> &ModelInfo {
        match model {
            ModelType::Rf => &self.rf_model,
            ModelType::Sgd => &self.sgd_model,
        }
    }
}

// ===================== Prediction =====================

/// Body of `POST /predict`.
///
/// The weather values travel as numeric text; build it through
/// [`PredictionForm::validate`] so they are known to parse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionRequest {
    /// Temperature in °C
    pub temperature: String,
    /// Relative humidity in %
    pub humidity: String,
    /// Wind speed in km/h
    pub wind_speed: String,
    /// Sea-level pressure in hPa
    pub pressure: String,
    pub model_type: ModelType,
}

/// Category assigned by the prediction service to the current AQI.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryInfo {
    pub level: String,
    pub message: String,
}

/// One day of the multi-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastDay {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub aqi: f64,
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResponse {
    pub current_aqi: f64,
    pub category: CategoryInfo,
    pub model_used: ModelType,
    /// Chronological, possibly empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub forecast: Vec<ForecastDay>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ===================== Replies =====================

/// Domain-level failure reported in a response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorPayload {
    #[serde(deserialize_with = "non_empty_error")]
    pub error: String,
}

/// An empty `error` carries no failure.
fn non_empty_error<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let error = String::deserialize(deserializer)?;
    if error.is_empty() {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&error),
            &"a non-empty error message",
        ));
    }
    Ok(error)
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Body of every API response: either the payload or an `error` field.
///
/// `Failure` is tried first, so a body carrying a non-empty `error` is a
/// failure even when the payload fields are present too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure(ErrorPayload),
    Success(T),
}

impl<T> ApiReply<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiReply::Success(data) => Ok(data),
            ApiReply::Failure(payload) => Err(payload.error),
        }
    }

    /// Like [`into_result`](Self::into_result), with the `error` text as an
    /// [`ApiError::Application`].
    pub fn into_api_result(self) -> Result<T, ApiError> {
        self.into_result().map_err(ApiError::Application)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ApiReply::Failure(_))
    }
}

/// Failure of an API call as seen by a client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with an `error` field.
    #[error("{0}")]
    Application(String),
    /// Network failure, or a body that is not a valid reply.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text for the alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application(message) => message.clone(),
            ApiError::Transport(_) => CONNECTION_FAILED_MESSAGE.to_string(),
        }
    }
}
