use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mindwell::screening::{screening_router, Classifier, ScreeningService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_screening_routes<C>(service: Arc<ScreeningService<C>>) -> axum::Router
where
    C: Classifier + ?Sized + 'static,
{
    screening_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindwell::screening::{FeatureSchema, HeuristicClassifier, ModelSource};
    use tower::ServiceExt;

    fn heuristic_routes() -> axum::Router {
        let service = Arc::new(ScreeningService::new(
            Arc::new(HeuristicClassifier),
            FeatureSchema::default_ordering(),
            ModelSource::Heuristic,
        ));
        with_screening_routes(service)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(payload) = healthcheck().await;
        assert_eq!(payload, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn screening_report_route_is_mounted() {
        let router = heuristic_routes();
        let body = json!({
            "answers": {
                "age": 30,
                "self_employed": "No",
                "family_history": "No",
                "remote_work": "Yes",
                "tech_company": "No",
                "benefits": "No"
            }
        });

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/screening/report")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
