mod artifact;
mod fallback;

pub use artifact::LogisticModel;
pub use fallback::HeuristicClassifier;

use super::encoder::{FeatureSchema, FeatureVector};
use crate::config::ModelConfig;
use crate::screening::domain::Prediction;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Capability interface for the binary treatment classifier.
///
/// Implementations must be deterministic for a fixed feature vector so that
/// repeated assessments of identical answers yield identical reports and
/// what-if comparisons stay meaningful.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError>;
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// Failure raised by a classifier during a single prediction.
#[derive(Debug)]
pub enum ModelError {
    MissingFeature { column: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingFeature { column } => {
                write!(f, "feature vector is missing column '{column}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Failure while resolving the serialized model artifacts at startup.
#[derive(Debug)]
pub enum ModelArtifactError {
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },
    SchemaMismatch {
        column: String,
    },
}

impl fmt::Display for ModelArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelArtifactError::Io { path, source } => {
                write!(f, "failed to read artifact {}: {}", path.display(), source)
            }
            ModelArtifactError::Parse { path, source } => {
                write!(f, "invalid artifact {}: {}", path.display(), source)
            }
            ModelArtifactError::SchemaMismatch { column } => {
                write!(f, "model artifact has no weight for schema column '{column}'")
            }
        }
    }
}

impl std::error::Error for ModelArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelArtifactError::Io { source, .. } => Some(source),
            ModelArtifactError::Parse { source, .. } => Some(source),
            ModelArtifactError::SchemaMismatch { .. } => None,
        }
    }
}

/// Which decision function is answering predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    Artifact,
    Heuristic,
}

impl ModelSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Artifact => "trained artifact",
            Self::Heuristic => "built-in heuristic",
        }
    }
}

/// Classifier plus schema resolved once at startup; read-only afterwards.
pub struct LoadedClassifier {
    pub classifier: Arc<dyn Classifier>,
    pub schema: FeatureSchema,
    pub source: ModelSource,
}

/// Resolve the model and schema artifacts, substituting the deterministic
/// heuristic classifier when either artifact cannot be used.
///
/// The heuristic is a best-effort stand-in, not equivalent to the trained
/// model; the two may disagree near decision boundaries.
pub fn load_classifier(config: &ModelConfig) -> LoadedClassifier {
    match try_load_artifact(&config.model_path, &config.schema_path) {
        Ok((model, schema)) => {
            info!(
                model = %config.model_path.display(),
                version = model.version(),
                "loaded classifier artifact"
            );
            LoadedClassifier {
                classifier: Arc::new(model),
                schema,
                source: ModelSource::Artifact,
            }
        }
        Err(err) => {
            warn!(error = %err, "model artifacts unavailable; using heuristic classifier");
            LoadedClassifier {
                classifier: Arc::new(HeuristicClassifier),
                schema: FeatureSchema::default_ordering(),
                source: ModelSource::Heuristic,
            }
        }
    }
}

fn try_load_artifact(
    model_path: &Path,
    schema_path: &Path,
) -> Result<(LogisticModel, FeatureSchema), ModelArtifactError> {
    let schema = load_schema(schema_path)?;
    let model = LogisticModel::from_path(model_path)?;
    model.ensure_covers(&schema)?;
    Ok((model, schema))
}

fn load_schema(path: &Path) -> Result<FeatureSchema, ModelArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
