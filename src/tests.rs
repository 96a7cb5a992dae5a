#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        setup_failing_upstream_app, setup_test_app, setup_unreachable_app, INDEX_HTML,
        REGISTRY_OFFLINE_MESSAGE,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ErrorPayload, ModelStatusResponse, ModelType, PredictionRequest, PredictionResponse};
    use serde_json::json;

    fn rf_request() -> PredictionRequest {
        PredictionRequest {
            temperature: "25".to_string(),
            humidity: "60".to_string(),
            wind_speed: "5".to_string(),
            pressure: "1013".to_string(),
            model_type: ModelType::Rf,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.upstream, "reachable");
    }

    #[tokio::test]
    async fn test_health_check_with_upstream_down() {
        let (app, _static_dir) = setup_unreachable_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        // The gateway itself stays healthy.
        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.upstream, "unreachable");
    }

    #[tokio::test]
    async fn test_model_status_relayed() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/model_status").await;

        response.assert_status(StatusCode::OK);
        let body: ModelStatusResponse = response.json();
        assert!(body.rf_model.available);
        assert_eq!(body.rf_model.last_updated, "2024-05-01 10:00:00");
        assert!(!body.sgd_model.available);
        assert_eq!(body.sgd_model.last_updated, "Never");
    }

    #[tokio::test]
    async fn test_model_status_upstream_unavailable() {
        let (app, _static_dir) = setup_unreachable_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/model_status").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "Prediction service unavailable");
    }

    #[tokio::test]
    async fn test_model_status_upstream_error_passthrough() {
        let (app, _static_dir) = setup_failing_upstream_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/model_status").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, REGISTRY_OFFLINE_MESSAGE);
    }

    #[tokio::test]
    async fn test_static_dir_outlives_router_setup() {
        let (app, static_dir) = setup_test_app().await;
        let index = static_dir.path().join("index.html");
        assert!(index.exists());

        let server = TestServer::new(app).unwrap();
        server.get("/").await.assert_status(StatusCode::OK);

        drop(server);
        drop(static_dir);
        assert!(!index.exists());
    }

    #[tokio::test]
    async fn test_predict_relayed() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.post("/predict").json(&rf_request()).await;

        response.assert_status(StatusCode::OK);
        let body: PredictionResponse = response.json();
        assert_eq!(body.current_aqi, 75.6);
        assert_eq!(body.category.level, "Moderate");
        assert_eq!(body.model_used, ModelType::Rf);
        assert_eq!(body.forecast.len(), 2);
        assert_eq!(body.forecast[0].date, "2024-01-01");
        assert_eq!(body.forecast[1].aqi, 155.0);
    }

    #[tokio::test]
    async fn test_predict_upstream_error_passthrough() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = PredictionRequest {
            model_type: ModelType::Sgd,
            ..rf_request()
        };
        let response = server.post("/predict").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "SGD model not available");
    }

    #[tokio::test]
    async fn test_predict_unparseable_upstream_reply() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = PredictionRequest {
            temperature: "-42".to_string(),
            ..rf_request()
        };
        let response = server.post("/predict").json(&request).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "Prediction service unavailable");
    }

    #[tokio::test]
    async fn test_predict_upstream_unavailable() {
        let (app, _static_dir) = setup_unreachable_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.post("/predict").json(&rf_request()).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "Prediction service unavailable");
    }

    #[tokio::test]
    async fn test_predict_rejects_out_of_range_humidity() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = PredictionRequest {
            humidity: "140".to_string(),
            ..rf_request()
        };
        let response = server.post("/predict").json(&request).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "Humidity must be between 0 and 100, got 140");
    }

    #[tokio::test]
    async fn test_predict_rejects_empty_field() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = PredictionRequest {
            pressure: "  ".to_string(),
            ..rf_request()
        };
        let response = server.post("/predict").json(&request).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "Pressure is required");
    }

    #[tokio::test]
    async fn test_predict_rejects_non_numeric_field() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = PredictionRequest {
            temperature: "warm".to_string(),
            ..rf_request()
        };
        let response = server.post("/predict").json(&request).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorPayload = response.json();
        assert_eq!(body.error, "Temperature must be a number, got 'warm'");
    }

    #[tokio::test]
    async fn test_predict_rejects_unknown_model() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/predict")
            .json(&json!({
                "temperature": "25",
                "humidity": "60",
                "wind_speed": "5",
                "pressure": "1013",
                "model_type": "xgboost"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorPayload = response.json();
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_static_fallback_serves_index() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let root = server.get("/").await;
        root.assert_status(StatusCode::OK);
        assert_eq!(root.text(), INDEX_HTML);

        let unknown = server.get("/some/client/path").await;
        unknown.assert_status(StatusCode::OK);
        assert_eq!(unknown.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (app, _static_dir) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["paths"]["/predict"].is_object());
    }
}
