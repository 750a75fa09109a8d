use super::{Classifier, ModelError};
use crate::screening::domain::Prediction;
use crate::screening::encoder::FeatureVector;

const POSITIVE_PROBABILITY: f64 = 0.85;
const NEGATIVE_PROBABILITY: f64 = 0.15;

/// Deterministic substitute used when the trained artifacts are unavailable.
///
/// Two threshold rules keep the rest of the pipeline exercisable: a family
/// history of mental illness past age 40, or on-site work without employer
/// benefits, predicts the positive class. Best-effort only; it is not
/// expected to agree with the trained model near its decision boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    fn feature(features: &FeatureVector, column: &str) -> Result<f64, ModelError> {
        features.get(column).ok_or_else(|| ModelError::MissingFeature {
            column: column.to_string(),
        })
    }
}

impl Classifier for HeuristicClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let age = Self::feature(features, "Age")?;
        let family_history = Self::feature(features, "family_history")?;
        let remote_work = Self::feature(features, "remote_work")?;
        let benefits = Self::feature(features, "benefits")?;

        if age > 40.0 && family_history == 1.0 {
            return Ok(Prediction::TreatmentLikely);
        }
        if remote_work == 0.0 && benefits == 0.0 {
            return Ok(Prediction::TreatmentLikely);
        }
        Ok(Prediction::TreatmentUnlikely)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(match self.predict(features)? {
            Prediction::TreatmentLikely => POSITIVE_PROBABILITY,
            Prediction::TreatmentUnlikely => NEGATIVE_PROBABILITY,
        })
    }
}
