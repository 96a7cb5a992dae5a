#[cfg(test)]
pub mod test_utils {
    use crate::config::GatewayConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{http::StatusCode, routing::{get, post}, Json, Router};
    use common::{MODEL_STATUS_PATH, PREDICT_PATH};
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use std::path::Path;
    use tempfile::TempDir;
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>AQI test page</body></html>";
    pub const REGISTRY_OFFLINE_MESSAGE: &str = "Model registry offline";

    /// Canned prediction service.
    ///
    /// `rf` predictions succeed with a two-day forecast, `sgd` predictions
    /// fail with 400, a temperature of `-42` yields a body that is not a
    /// valid reply.
    pub fn stub_upstream_router() -> Router {
        Router::new()
            .route(
                MODEL_STATUS_PATH,
                get(|| async {
                    Json(json!({
                        "rf_model": {"available": true, "last_updated": "2024-05-01 10:00:00"},
                        "sgd_model": {"available": false, "last_updated": "Never"}
                    }))
                }),
            )
            .route(PREDICT_PATH, post(stub_predict))
    }

    async fn stub_predict(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["temperature"] == "-42" {
            return (StatusCode::OK, Json(json!({"unexpected": true})));
        }

        match body["model_type"].as_str() {
            Some("sgd") => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "SGD model not available"})),
            ),
            _ => (
                StatusCode::OK,
                Json(json!({
                    "current_aqi": 75.6,
                    "category": {"level": "Moderate", "message": "Acceptable air quality."},
                    "model_used": "rf",
                    "forecast": [
                        {"date": "2024-01-01", "aqi": 45.0},
                        {"date": "2024-01-02", "aqi": 155.0}
                    ]
                })),
            ),
        }
    }

    /// Prediction service whose model registry is down: `/model_status`
    /// answers 503 with an `error` body.
    pub fn stub_failing_upstream_router() -> Router {
        Router::new().route(
            MODEL_STATUS_PATH,
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": REGISTRY_OFFLINE_MESSAGE})),
                )
            }),
        )
    }

    /// Binds `router` on an ephemeral port.
    pub async fn spawn_stub_upstream(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub upstream");
        let addr = listener.local_addr().expect("Stub upstream has no address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub upstream failed");
        });

        addr
    }

    /// An address nothing listens on.
    pub async fn closed_address() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind placeholder listener");
        listener.local_addr().expect("Placeholder listener has no address")
    }

    /// Temporary directory holding a minimal `index.html`. Removed on drop.
    pub fn static_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create static dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        dir
    }

    pub fn test_config(upstream: SocketAddr, static_dir: &Path) -> GatewayConfig {
        GatewayConfig {
            bind_address: "127.0.0.1:0".to_string(),
            upstream_url: format!("http://{}", upstream),
            static_dir: static_dir.to_path_buf(),
            request_timeout_secs: 10,
            upstream_timeout_secs: 5,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        // Several tests race to install it; the first one wins.
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    /// Gateway wired to the stub prediction service.
    ///
    /// The returned directory backs the static files and must outlive the
    /// router.
    pub async fn setup_test_app() -> (Router, TempDir) {
        let upstream = spawn_stub_upstream(stub_upstream_router()).await;
        setup_test_app_with_upstream(upstream)
    }

    /// Gateway whose prediction service reports its model registry down.
    pub async fn setup_failing_upstream_app() -> (Router, TempDir) {
        let upstream = spawn_stub_upstream(stub_failing_upstream_router()).await;
        setup_test_app_with_upstream(upstream)
    }

    /// Gateway whose prediction service is down.
    pub async fn setup_unreachable_app() -> (Router, TempDir) {
        let upstream = closed_address().await;
        setup_test_app_with_upstream(upstream)
    }

    pub fn setup_test_app_with_upstream(upstream: SocketAddr) -> (Router, TempDir) {
        init_test_tracing();

        let static_dir = static_dir();
        let state = AppState::new(test_config(upstream, static_dir.path()))
            .expect("Failed to build test state");
        (create_router(state), static_dir)
    }
}
