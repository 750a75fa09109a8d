use super::domain::RawAnswers;
use serde::{Deserialize, Serialize};

/// Ordered list of column names the classifier was trained against.
///
/// The ordering is authoritative: encoded vectors follow it exactly, and a
/// column the intake record cannot supply is encoded as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column ordering used when no schema artifact is available.
    pub fn default_ordering() -> Self {
        Self {
            columns: [
                "Age",
                "self_employed",
                "family_history",
                "remote_work",
                "tech_company",
                "benefits",
            ]
            .iter()
            .map(|column| column.to_string())
            .collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Schema-ordered numeric encoding of one intake record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    features: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn get(&self, column: &str) -> Option<f64> {
        self.features
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| *value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.features.iter().map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Map a validated intake record onto the classifier's schema.
///
/// Total over any validated [`RawAnswers`]: schema columns with no derivable
/// answer default to zero, and derived fields absent from the schema are
/// dropped.
pub fn encode(answers: &RawAnswers, schema: &FeatureSchema) -> FeatureVector {
    let derived = derived_features(answers);

    let features = schema
        .columns()
        .iter()
        .map(|column| {
            let value = derived
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| *value)
                .unwrap_or(0.0);
            (column.clone(), value)
        })
        .collect();

    FeatureVector { features }
}

fn derived_features(answers: &RawAnswers) -> [(&'static str, f64); 6] {
    [
        ("Age", f64::from(answers.age)),
        ("self_employed", f64::from(answers.self_employed.as_flag())),
        ("family_history", f64::from(answers.family_history.as_flag())),
        ("remote_work", f64::from(answers.remote_work.as_flag())),
        ("tech_company", f64::from(answers.tech_company.as_flag())),
        ("benefits", f64::from(answers.benefits.as_flag())),
    ]
}
