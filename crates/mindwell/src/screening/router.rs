use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::cohort::{CohortImporter, CohortImportError};
use super::domain::{AnswerOverride, RawAnswers};
use super::model::{Classifier, ModelSource};
use super::report::{RecommendationGroup, RiskReport};
use super::service::{ScreeningService, ScreeningServiceError, WhatIfComparison};

/// Router builder exposing HTTP endpoints for screening assessments.
pub fn screening_router<C>(service: Arc<ScreeningService<C>>) -> Router
where
    C: Classifier + ?Sized + 'static,
{
    Router::new()
        .route("/api/v1/screening/report", post(report_handler::<C>))
        .route("/api/v1/screening/whatif", post(what_if_handler::<C>))
        .route("/api/v1/screening/cohort", post(cohort_handler::<C>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScreeningReportRequest {
    pub(crate) answers: RawAnswers,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScreeningReportResponse {
    pub(crate) model_source: ModelSource,
    #[serde(flatten)]
    pub(crate) report: RiskReport,
    pub(crate) recommendations_by_category: Vec<RecommendationGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WhatIfRequest {
    pub(crate) answers: RawAnswers,
    pub(crate) change: AnswerOverride,
}

#[derive(Debug, Serialize)]
pub(crate) struct WhatIfResponse {
    pub(crate) model_source: ModelSource,
    #[serde(flatten)]
    pub(crate) comparison: WhatIfComparison,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CohortRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CohortResponse {
    pub(crate) model_source: ModelSource,
    pub(crate) reports: Vec<RiskReport>,
}

pub(crate) async fn report_handler<C>(
    State(service): State<Arc<ScreeningService<C>>>,
    axum::Json(request): axum::Json<ScreeningReportRequest>,
) -> Response
where
    C: Classifier + ?Sized + 'static,
{
    match service.assess(&request.answers) {
        Ok(report) => {
            let recommendations_by_category = report.grouped_recommendations();
            let body = ScreeningReportResponse {
                model_source: service.model_source(),
                report,
                recommendations_by_category,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn what_if_handler<C>(
    State(service): State<Arc<ScreeningService<C>>>,
    axum::Json(request): axum::Json<WhatIfRequest>,
) -> Response
where
    C: Classifier + ?Sized + 'static,
{
    match service.what_if(&request.answers, request.change) {
        Ok(comparison) => {
            let body = WhatIfResponse {
                model_source: service.model_source(),
                comparison,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn cohort_handler<C>(
    State(service): State<Arc<ScreeningService<C>>>,
    axum::Json(request): axum::Json<CohortRequest>,
) -> Response
where
    C: Classifier + ?Sized + 'static,
{
    let cohort = match CohortImporter::from_reader(request.csv.as_bytes()) {
        Ok(cohort) => cohort,
        Err(err) => {
            let status = match &err {
                CohortImportError::Csv(_) | CohortImportError::Row { .. } => {
                    StatusCode::BAD_REQUEST
                }
                CohortImportError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let payload = json!({ "error": err.to_string() });
            return (status, axum::Json(payload)).into_response();
        }
    };

    let mut reports = Vec::with_capacity(cohort.len());
    for answers in &cohort {
        match service.assess(answers) {
            Ok(report) => reports.push(report),
            Err(err) => return service_error_response(err),
        }
    }

    let body = CohortResponse {
        model_source: service.model_source(),
        reports,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

fn service_error_response(err: ScreeningServiceError) -> Response {
    let status = match err {
        ScreeningServiceError::Answers(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ScreeningServiceError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
