use common::{ApiError, ApiReply, PredictionResponse};

use super::{CurrentAqiView, ForecastView, FORECAST_UNAVAILABLE};

/// State of one display region.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// Nothing requested yet; the page's placeholder stays.
    Idle,
    Loading,
    Ready(T),
    /// Danger alert with this text.
    Failed(String),
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl PanelState<CurrentAqiView> {
    /// Header colour once this state is shown. Only a prediction changes
    /// it; loading and failures keep `previous`.
    pub fn header_color_after(&self, previous: Option<&'static str>) -> Option<&'static str> {
        self.data().map(CurrentAqiView::header_color).or(previous)
    }
}

/// The two regions written by a prediction: current AQI and forecast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionPanels {
    pub current: PanelState<CurrentAqiView>,
    pub forecast: PanelState<ForecastView>,
}

impl PredictionPanels {
    pub fn loading() -> Self {
        Self {
            current: PanelState::Loading,
            forecast: PanelState::Loading,
        }
    }

    /// `message` goes to the current region; the forecast region always
    /// shows the fixed "Forecast unavailable" text.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            current: PanelState::Failed(message.into()),
            forecast: PanelState::Failed(FORECAST_UNAVAILABLE.to_string()),
        }
    }

    pub fn from_response(response: &PredictionResponse) -> Self {
        Self {
            current: PanelState::Ready(CurrentAqiView::from_response(response)),
            forecast: PanelState::Ready(ForecastView::from_days(&response.forecast)),
        }
    }

    /// Panels for a decoded reply body.
    pub fn from_reply(reply: ApiReply<PredictionResponse>) -> Self {
        Self::from_result(reply.into_api_result())
    }

    pub fn from_result(result: Result<PredictionResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self::from_response(&response),
            Err(err) => Self::failed(err.user_message()),
        }
    }

    /// Header colour of the current-prediction card, if a prediction is shown.
    pub fn header_color(&self) -> Option<&'static str> {
        self.current.data().map(CurrentAqiView::header_color)
    }
}
