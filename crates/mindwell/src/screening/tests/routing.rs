use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::screening::domain::{AnswerOverride, YesNo};
use crate::screening::router::{
    cohort_handler, report_handler, what_if_handler, CohortRequest, ScreeningReportRequest,
    WhatIfRequest,
};

#[tokio::test]
async fn report_route_returns_a_full_report() {
    let router = heuristic_router();

    let body = json!({
        "answers": {
            "age": 50,
            "self_employed": "No",
            "family_history": "Yes",
            "remote_work": "No",
            "tech_company": "Yes",
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
    let payload = read_json_body(response).await;
    assert_eq!(payload["model_source"], "heuristic");
    assert_eq!(payload["risk_score"], 15);
    assert_eq!(payload["risk_level"], "High");
    assert_eq!(payload["prediction"], "Treatment Likely");
    assert_eq!(
        payload["recommendations_by_category"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn report_route_rejects_out_of_range_ages() {
    let router = heuristic_router();

    let body = json!({
        "answers": {
            "age": 17,
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

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn report_handler_surfaces_classifier_failures_as_internal_errors() {
    let service = Arc::new(failing_service());

    let response = report_handler(
        State(service),
        axum::Json(ScreeningReportRequest {
            answers: low_risk_profile(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn what_if_handler_returns_both_reports() {
    let service = Arc::new(heuristic_service());

    let response = what_if_handler(
        State(service),
        axum::Json(WhatIfRequest {
            answers: high_risk_profile(),
            change: AnswerOverride::Benefits(YesNo::Yes),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["changed_field"], "benefits");
    assert_eq!(payload["baseline"]["risk_score"], 15);
    assert_eq!(payload["scenario"]["risk_score"], 11);
    assert_eq!(payload["score_delta"], -4);
}

#[tokio::test]
async fn what_if_route_accepts_tagged_overrides() {
    let router = heuristic_router();

    let body = json!({
        "answers": {
            "age": 30,
            "self_employed": "No",
            "family_history": "No",
            "remote_work": "Yes",
            "tech_company": "No",
            "benefits": "No"
        },
        "change": { "field": "remote_work", "value": "No" }
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/screening/whatif")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["baseline"]["risk_score"], 0);
    assert_eq!(payload["scenario"]["risk_score"], 7);
}

#[tokio::test]
async fn cohort_handler_scores_each_row() {
    let service = Arc::new(heuristic_service());
    let csv = "age,self_employed,family_history,remote_work,tech_company,benefits\n\
30,No,No,Yes,No,No\n\
50,No,Yes,No,Yes,No\n";

    let response = cohort_handler(
        State(service),
        axum::Json(CohortRequest {
            csv: csv.to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let reports = payload["reports"].as_array().expect("reports array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["risk_level"], "Low");
    assert_eq!(reports[1]["risk_level"], "High");
}

#[tokio::test]
async fn cohort_handler_rejects_malformed_rows() {
    let service = Arc::new(heuristic_service());
    let csv = "age,self_employed,family_history,remote_work,tech_company,benefits\n\
30,No,maybe,Yes,No,No\n";

    let response = cohort_handler(
        State(service),
        axum::Json(CohortRequest {
            csv: csv.to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("row 1"));
}
