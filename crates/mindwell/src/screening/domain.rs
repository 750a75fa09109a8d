use serde::{Deserialize, Serialize};
use std::fmt;

/// Youngest age the intake layer accepts.
pub const AGE_MIN: u8 = 18;
/// Oldest age the intake layer accepts.
pub const AGE_MAX: u8 = 100;

/// Two-value answer used by every non-numeric screening question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const fn as_flag(self) -> u8 {
        match self {
            Self::Yes => 1,
            Self::No => 0,
        }
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Lenient parser for external sources such as CSV exports.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" | "true" => Some(Self::Yes),
            "no" | "n" | "0" | "false" => Some(Self::No),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The validated six-field intake record.
///
/// Construction goes through [`RawAnswers::new`] (or serde, which routes
/// through the same check) so the encoder never sees an out-of-range age.
/// The record is never mutated after construction; what-if runs derive a
/// fresh copy via [`AnswerOverride::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnswerRecord")]
pub struct RawAnswers {
    pub age: u8,
    pub self_employed: YesNo,
    pub family_history: YesNo,
    pub remote_work: YesNo,
    pub tech_company: YesNo,
    pub benefits: YesNo,
}

impl RawAnswers {
    pub fn new(
        age: u8,
        self_employed: YesNo,
        family_history: YesNo,
        remote_work: YesNo,
        tech_company: YesNo,
        benefits: YesNo,
    ) -> Result<Self, AnswersError> {
        if !(AGE_MIN..=AGE_MAX).contains(&age) {
            return Err(AnswersError::AgeOutOfRange { age });
        }

        Ok(Self {
            age,
            self_employed,
            family_history,
            remote_work,
            tech_company,
            benefits,
        })
    }
}

/// Wire-format mirror of [`RawAnswers`] used to validate on deserialization.
#[derive(Debug, Deserialize)]
struct AnswerRecord {
    age: u8,
    self_employed: YesNo,
    family_history: YesNo,
    remote_work: YesNo,
    tech_company: YesNo,
    benefits: YesNo,
}

impl TryFrom<AnswerRecord> for RawAnswers {
    type Error = AnswersError;

    fn try_from(record: AnswerRecord) -> Result<Self, Self::Error> {
        RawAnswers::new(
            record.age,
            record.self_employed,
            record.family_history,
            record.remote_work,
            record.tech_company,
            record.benefits,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswersError {
    AgeOutOfRange { age: u8 },
}

impl fmt::Display for AnswersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswersError::AgeOutOfRange { age } => {
                write!(f, "age {age} is outside the accepted range {AGE_MIN}-{AGE_MAX}")
            }
        }
    }
}

impl std::error::Error for AnswersError {}

/// Binary outcome of the classifier, labeled the way reports display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "Treatment Likely")]
    TreatmentLikely,
    #[serde(rename = "Treatment Unlikely")]
    TreatmentUnlikely,
}

impl Prediction {
    pub const fn from_class(class: u8) -> Self {
        if class == 1 {
            Self::TreatmentLikely
        } else {
            Self::TreatmentUnlikely
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::TreatmentLikely)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TreatmentLikely => "Treatment Likely",
            Self::TreatmentUnlikely => "Treatment Unlikely",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-field hypothetical change for what-if re-evaluation.
///
/// Exactly one field differs between the baseline record and the copy this
/// produces; the baseline itself is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AnswerOverride {
    Age(u8),
    SelfEmployed(YesNo),
    FamilyHistory(YesNo),
    RemoteWork(YesNo),
    TechCompany(YesNo),
    Benefits(YesNo),
}

impl AnswerOverride {
    pub fn apply(self, answers: &RawAnswers) -> Result<RawAnswers, AnswersError> {
        let mut adjusted = *answers;
        match self {
            Self::Age(age) => {
                if !(AGE_MIN..=AGE_MAX).contains(&age) {
                    return Err(AnswersError::AgeOutOfRange { age });
                }
                adjusted.age = age;
            }
            Self::SelfEmployed(value) => adjusted.self_employed = value,
            Self::FamilyHistory(value) => adjusted.family_history = value,
            Self::RemoteWork(value) => adjusted.remote_work = value,
            Self::TechCompany(value) => adjusted.tech_company = value,
            Self::Benefits(value) => adjusted.benefits = value,
        }
        Ok(adjusted)
    }

    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Age(_) => "age",
            Self::SelfEmployed(_) => "self_employed",
            Self::FamilyHistory(_) => "family_history",
            Self::RemoteWork(_) => "remote_work",
            Self::TechCompany(_) => "tech_company",
            Self::Benefits(_) => "benefits",
        }
    }
}
