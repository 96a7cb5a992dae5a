//! View models for the forecast page.
//!
//! Each region of the page is described by a plain value built from the API
//! payloads. The frontend only maps these values onto markup, so everything
//! that decides what the user sees is testable without a browser.

pub mod current;
pub mod forecast;
pub mod panels;
pub mod status;

pub use current::CurrentAqiView;
pub use forecast::{ForecastChart, ForecastRow, ForecastView};
pub use panels::{PanelState, PredictionPanels};
pub use status::{ModelStatusRow, ModelStatusView};

/// Fixed text of the forecast region after any failure.
pub const FORECAST_UNAVAILABLE: &str = "Forecast unavailable";
/// Fixed text of the forecast region when the forecast is empty.
pub const NO_FORECAST_DATA: &str = "No forecast data available";
/// Shown when no response arrived within the configured timeout.
pub const REQUEST_TIMED_OUT: &str = "Request timed out";
