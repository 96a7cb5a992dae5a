use common::{ModelType, PredictionResponse};

use crate::aqi::{round_aqi, AqiCategory};

/// Contents of the current-prediction panel.
///
/// The label comes from the service's `category.level`; colours and the
/// style class are derived from that label, not from the number.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAqiView {
    pub rounded_aqi: i64,
    pub category_label: String,
    pub category: AqiCategory,
    pub message: String,
    pub model_used: ModelType,
}

impl CurrentAqiView {
    pub fn from_response(response: &PredictionResponse) -> Self {
        Self {
            rounded_aqi: round_aqi(response.current_aqi),
            category_label: response.category.level.clone(),
            category: AqiCategory::from_label(&response.category.level),
            message: response.category.message.clone(),
            model_used: response.model_used,
        }
    }

    /// Full stylesheet class of the category pill, e.g. `aqi-moderate`.
    pub fn category_class(&self) -> String {
        format!("aqi-{}", self.category.style_class())
    }

    /// Bootstrap colour for the enclosing card header.
    pub fn header_color(&self) -> &'static str {
        self.category.bootstrap_color()
    }

    pub fn footer(&self) -> String {
        format!("Prediction made using {} model", self.model_used.display_name())
    }
}
