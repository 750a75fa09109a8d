use std::sync::Arc;

use super::domain::{AnswerOverride, AnswersError, RawAnswers};
use super::encoder::{encode, FeatureSchema};
use super::model::{Classifier, LoadedClassifier, ModelError, ModelSource};
use super::report::{build_report, RiskReport};
use serde::Serialize;

/// Service composing the feature encoder, the classifier, and the report
/// engine. The classifier and schema are resolved once at startup and shared
/// read-only across callers, so concurrent assessments are independent.
pub struct ScreeningService<C: ?Sized = dyn Classifier> {
    classifier: Arc<C>,
    schema: FeatureSchema,
    source: ModelSource,
}

impl ScreeningService {
    pub fn from_loaded(loaded: LoadedClassifier) -> Self {
        Self {
            classifier: loaded.classifier,
            schema: loaded.schema,
            source: loaded.source,
        }
    }
}

impl<C: Classifier + ?Sized> ScreeningService<C> {
    pub fn new(classifier: Arc<C>, schema: FeatureSchema, source: ModelSource) -> Self {
        Self {
            classifier,
            schema,
            source,
        }
    }

    pub fn model_source(&self) -> ModelSource {
        self.source
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run the full pipeline for one intake record.
    ///
    /// A classifier failure aborts this request with no partial report; the
    /// caller may retry with identical input since the pipeline is
    /// idempotent.
    pub fn assess(&self, answers: &RawAnswers) -> Result<RiskReport, ScreeningServiceError> {
        let features = encode(answers, &self.schema);
        let prediction = self.classifier.predict(&features)?;
        let probability = self.classifier.predict_proba(&features)?;
        Ok(build_report(answers, prediction, probability))
    }

    /// Re-run the pipeline on a copy with exactly one field changed.
    pub fn what_if(
        &self,
        answers: &RawAnswers,
        change: AnswerOverride,
    ) -> Result<WhatIfComparison, ScreeningServiceError> {
        let baseline = self.assess(answers)?;
        let adjusted = change.apply(answers)?;
        let scenario = self.assess(&adjusted)?;

        Ok(WhatIfComparison {
            changed_field: change.field_name(),
            score_delta: i16::from(scenario.risk_score) - i16::from(baseline.risk_score),
            baseline,
            scenario,
        })
    }
}

/// Baseline and hypothetical reports produced by a what-if run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatIfComparison {
    pub changed_field: &'static str,
    pub score_delta: i16,
    pub baseline: RiskReport,
    pub scenario: RiskReport,
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Answers(#[from] AnswersError),
    #[error("classifier failure: {0}")]
    Model(#[from] ModelError),
}
