use common::{ApiError, ModelStatusResponse, ModelType};

use super::PanelState;

/// One row of the model status table.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStatusRow {
    pub model: ModelType,
    pub name: &'static str,
    pub available: bool,
    pub last_updated: String,
}

impl ModelStatusRow {
    pub fn badge_text(&self) -> &'static str {
        if self.available { "Available" } else { "Unavailable" }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.available { "status-online" } else { "status-offline" }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelStatusView {
    pub rows: Vec<ModelStatusRow>,
}

impl ModelStatusView {
    pub fn from_response(response: &ModelStatusResponse) -> Self {
        let rows = ModelType::ALL
            .iter()
            .map(|&model| {
                let info = response.model(model);
                ModelStatusRow {
                    model,
                    name: model.status_name(),
                    available: info.available,
                    last_updated: info.last_updated.clone(),
                }
            })
            .collect();

        Self { rows }
    }

    /// State of the status region once the fetch has completed.
    pub fn panel(result: Result<ModelStatusResponse, ApiError>) -> PanelState<ModelStatusView> {
        match result {
            Ok(response) => PanelState::Ready(Self::from_response(&response)),
            Err(ApiError::Application(message)) => {
                PanelState::Failed(format!("Error checking model status: {}", message))
            }
            Err(err @ ApiError::Transport(_)) => PanelState::Failed(err.user_message()),
        }
    }
}
