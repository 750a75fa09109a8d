use super::{Classifier, ModelArtifactError, ModelError};
use crate::screening::domain::Prediction;
use crate::screening::encoder::{FeatureSchema, FeatureVector};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Artifact-backed logistic regression classifier.
///
/// The artifact stores the intercept and one weight per training column,
/// alongside metadata describing where the coefficients came from.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    algorithm: String,
    version: String,
    trained_at: NaiveDate,
    intercept: f64,
    weights: BTreeMap<String, f64>,
}

impl LogisticModel {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelArtifactError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ModelArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject artifacts that cannot score every schema column.
    pub fn ensure_covers(&self, schema: &FeatureSchema) -> Result<(), ModelArtifactError> {
        for column in schema.columns() {
            if !self.weights.contains_key(column) {
                return Err(ModelArtifactError::SchemaMismatch {
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn trained_at(&self) -> NaiveDate {
        self.trained_at
    }

    fn decision_value(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let mut total = self.intercept;
        for (column, weight) in &self.weights {
            let value = features
                .get(column)
                .ok_or_else(|| ModelError::MissingFeature {
                    column: column.clone(),
                })?;
            total += weight * value;
        }
        Ok(total)
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let probability = self.predict_proba(features)?;
        Ok(Prediction::from_class(u8::from(probability >= 0.5)))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let decision = self.decision_value(features)?;
        Ok(sigmoid(decision))
    }
}

fn sigmoid(value: f64) -> f64 {
    1.0 / (1.0 + (-value).exp())
}
