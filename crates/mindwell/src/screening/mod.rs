//! Wellness screening pipeline: validated intake answers are encoded onto
//! the classifier's feature schema, scored, and folded into a risk report
//! with factors, recommendations, and what-if comparisons.

pub mod cohort;
pub mod domain;
pub mod encoder;
pub mod model;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use cohort::{CohortImportError, CohortImporter};
pub use domain::{AnswerOverride, AnswersError, Prediction, RawAnswers, YesNo};
pub use encoder::{encode, FeatureSchema, FeatureVector};
pub use model::{
    load_classifier, Classifier, HeuristicClassifier, LoadedClassifier, LogisticModel,
    ModelArtifactError, ModelError, ModelSource,
};
pub use report::{
    build_report, Recommendation, RecommendationCategory, RecommendationGroup, RiskLevel,
    RiskReport,
};
pub use router::screening_router;
pub use service::{ScreeningService, ScreeningServiceError, WhatIfComparison};
