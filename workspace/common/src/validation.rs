//! Validation of the prediction form before anything goes on the wire.
//!
//! Text fields are parsed into a [`WeatherReading`] whose ranges are
//! checked with `validator`; the resulting [`ValidationErrors`] are turned
//! into the single user-facing [`ValidationError`].

use std::borrow::Cow;

use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::{ModelType, PredictionRequest};

const REQUIRED: &str = "required";
const NOT_A_NUMBER: &str = "number";
const OUT_OF_RANGE: &str = "range";

/// Accepted range for one numeric weather field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub field: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldLimits {
    pub const TEMPERATURE: FieldLimits = FieldLimits {
        field: "temperature",
        label: "Temperature",
        min: -90.0,
        max: 60.0,
    };
    pub const HUMIDITY: FieldLimits = FieldLimits {
        field: "humidity",
        label: "Humidity",
        min: 0.0,
        max: 100.0,
    };
    pub const WIND_SPEED: FieldLimits = FieldLimits {
        field: "wind_speed",
        label: "Wind speed",
        min: 0.0,
        max: 500.0,
    };
    pub const PRESSURE: FieldLimits = FieldLimits {
        field: "pressure",
        label: "Pressure",
        min: 300.0,
        max: 1100.0,
    };

    /// Form order; the first failing field is the one reported.
    pub const ALL: [FieldLimits; 4] = [
        Self::TEMPERATURE,
        Self::HUMIDITY,
        Self::WIND_SPEED,
        Self::PRESSURE,
    ];

    /// Trims `raw` and parses it as a finite number. Range is checked later
    /// on the [`WeatherReading`].
    pub fn parse(&self, raw: &str) -> Result<f64, validator::ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(validator::ValidationError::new(REQUIRED));
        }

        value.parse::<f64>().ok().filter(|n| n.is_finite()).ok_or_else(|| {
            let mut err = validator::ValidationError::new(NOT_A_NUMBER);
            err.add_param(Cow::Borrowed("value"), &value);
            err
        })
    }
}

/// Parsed weather conditions. The ranges match [`FieldLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct WeatherReading {
    #[validate(range(min = -90.0, max = 60.0))]
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    #[validate(range(min = 0.0, max = 500.0))]
    pub wind_speed: f64,
    #[validate(range(min = 300.0, max = 1100.0))]
    pub pressure: f64,
}

impl WeatherReading {
    /// Parses the four text fields, collecting every parse failure.
    pub fn parse(
        temperature: &str,
        humidity: &str,
        wind_speed: &str,
        pressure: &str,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut parse = |limits: FieldLimits, raw: &str| match limits.parse(raw) {
            Ok(value) => value,
            Err(err) => {
                errors.add(limits.field, err);
                f64::NAN
            }
        };

        let reading = Self {
            temperature: parse(FieldLimits::TEMPERATURE, temperature),
            humidity: parse(FieldLimits::HUMIDITY, humidity),
            wind_speed: parse(FieldLimits::WIND_SPEED, wind_speed),
            pressure: parse(FieldLimits::PRESSURE, pressure),
        };

        if errors.is_empty() { Ok(reading) } else { Err(errors) }
    }
}

/// The message shown to the user for a rejected form or request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown model type '{0}'")]
    UnknownModel(String),

    #[error("Invalid prediction request")]
    Invalid,
}

impl ValidationError {
    fn from_field(limits: FieldLimits, err: &validator::ValidationError) -> Self {
        let value = err.params.get("value");
        match err.code.as_ref() {
            REQUIRED => ValidationError::Missing { field: limits.label },
            OUT_OF_RANGE => ValidationError::OutOfRange {
                field: limits.label,
                value: value.and_then(|v| v.as_f64()).unwrap_or(f64::NAN),
                min: limits.min,
                max: limits.max,
            },
            _ => ValidationError::NotANumber {
                field: limits.label,
                value: value.and_then(|v| v.as_str()).unwrap_or_default().to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for ValidationError {
    /// Reports the first failing field in form order.
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        FieldLimits::ALL
            .iter()
            .find_map(|limits| {
                field_errors
                    .get(limits.field)
                    .and_then(|errs| errs.first())
                    .map(|err| Self::from_field(*limits, err))
            })
            .unwrap_or(ValidationError::Invalid)
    }
}

/// Raw form state, exactly as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub model_type: String,
}

impl PredictionForm {
    pub fn validate(&self) -> Result<PredictionRequest, ValidationError> {
        let request = PredictionRequest {
            temperature: self.temperature.trim().to_string(),
            humidity: self.humidity.trim().to_string(),
            wind_speed: self.wind_speed.trim().to_string(),
            pressure: self.pressure.trim().to_string(),
            model_type: ModelType::parse(&self.model_type)
                .ok_or_else(|| ValidationError::UnknownModel(self.model_type.clone()))?,
        };

        Validate::validate(&request)?;
        Ok(request)
    }
}

/// A request that arrived already built, e.g. as JSON, is re-checked field
/// by field; the wire format keeps the numbers as text.
impl Validate for PredictionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let result = WeatherReading::parse(&self.temperature, &self.humidity, &self.wind_speed, &self.pressure)
            .and_then(|reading| reading.validate());

        if let Err(errors) = &result {
            debug!(%errors, "rejecting prediction request");
        }
        result
    }
}
