use crate::handlers::{
    health::health_check, model_status::get_model_status, prediction::predict,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use common::{MODEL_STATUS_PATH, PREDICT_PATH};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Unknown paths get the page itself so the frontend can load.
    let static_files = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));
    let request_timeout = state.config.request_timeout();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction service relay
        .route(MODEL_STATUS_PATH, get(get_model_status))
        .route(PREDICT_PATH, post(predict))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Compiled frontend
        .fallback_service(static_files)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
