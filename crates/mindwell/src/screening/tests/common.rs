use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{Prediction, RawAnswers, YesNo};
use crate::screening::encoder::{FeatureSchema, FeatureVector};
use crate::screening::model::{Classifier, HeuristicClassifier, ModelError, ModelSource};
use crate::screening::router::screening_router;
use crate::screening::service::ScreeningService;

pub(super) fn answers(
    age: u8,
    self_employed: YesNo,
    family_history: YesNo,
    remote_work: YesNo,
    tech_company: YesNo,
    benefits: YesNo,
) -> RawAnswers {
    RawAnswers::new(
        age,
        self_employed,
        family_history,
        remote_work,
        tech_company,
        benefits,
    )
    .expect("valid answers")
}

/// Spec scenario A: no conditions fire, classifier predicts the negative class.
pub(super) fn low_risk_profile() -> RawAnswers {
    answers(30, YesNo::No, YesNo::No, YesNo::Yes, YesNo::No, YesNo::No)
}

/// Spec scenario B: every condition fires and the classifier agrees.
pub(super) fn high_risk_profile() -> RawAnswers {
    answers(50, YesNo::No, YesNo::Yes, YesNo::No, YesNo::Yes, YesNo::No)
}

/// Profile with all four rubric conditions false, used as a monotonicity base.
pub(super) fn neutral_profile() -> RawAnswers {
    answers(30, YesNo::No, YesNo::No, YesNo::Yes, YesNo::No, YesNo::Yes)
}

pub(super) fn heuristic_service() -> ScreeningService<HeuristicClassifier> {
    ScreeningService::new(
        Arc::new(HeuristicClassifier),
        FeatureSchema::default_ordering(),
        ModelSource::Heuristic,
    )
}

pub(super) fn heuristic_router() -> axum::Router {
    screening_router(Arc::new(heuristic_service()))
}

/// Classifier stub whose every call fails, exercising the fatal-error path.
pub(super) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<Prediction, ModelError> {
        Err(ModelError::MissingFeature {
            column: "Age".to_string(),
        })
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        Err(ModelError::MissingFeature {
            column: "Age".to_string(),
        })
    }
}

pub(super) fn failing_service() -> ScreeningService<FailingClassifier> {
    ScreeningService::new(
        Arc::new(FailingClassifier),
        FeatureSchema::default_ordering(),
        ModelSource::Artifact,
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
