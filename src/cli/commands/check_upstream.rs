use anyhow::{bail, Result};
use compute::view::ModelStatusView;
use tracing::{error, info};

use crate::config::{ConfigOverrides, GatewayConfig};
use crate::upstream::UpstreamClient;

pub async fn check_upstream(overrides: &ConfigOverrides) -> Result<()> {
    let config = GatewayConfig::load(overrides)?;
    let client = UpstreamClient::new(&config)?;
    info!("Checking prediction service at {}", client.base_url());

    match client.model_status().await {
        Ok(status) => {
            print!("{}", format_status_table(&ModelStatusView::from_response(&status)));
            Ok(())
        }
        Err(e) => {
            error!("Model status check failed: {}", e);
            bail!("prediction service at {} failed: {}", client.base_url(), e)
        }
    }
}

/// Plain-text rendering of the status table.
pub fn format_status_table(view: &ModelStatusView) -> String {
    let mut table = format!("{:<16} {:<12} {}\n", "Model", "Status", "Last Updated");
    for row in &view.rows {
        table.push_str(&format!("{:<16} {:<12} {}\n", row.name, row.badge_text(), row.last_updated));
    }
    table
}
