use super::rules::{Recommendation, RecommendationCategory};
use crate::screening::domain::{Prediction, RawAnswers};
use serde::Serialize;

/// Risk tier derived from the summed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// High past 10 points, Medium past 5, Low otherwise.
    pub const fn for_score(score: u8) -> Self {
        if score > 10 {
            Self::High
        } else if score > 5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#50fa7b",
            Self::Medium => "#ffc800",
            Self::High => "#ff5555",
        }
    }
}

/// The structured output of one assessment.
///
/// Built fresh per inference call and never mutated afterwards; everything
/// the presentation layer needs crosses this boundary as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub prediction: Prediction,
    pub probability: f64,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_level_color: &'static str,
    pub input_data: RawAnswers,
    pub risk_factors: Vec<&'static str>,
    pub recommendations: Vec<Recommendation>,
    pub explanation: &'static str,
}

impl RiskReport {
    /// Group recommendations by category for display, preserving the rule
    /// evaluation order both across groups and within each group.
    pub fn grouped_recommendations(&self) -> Vec<RecommendationGroup> {
        let mut groups: Vec<RecommendationGroup> = Vec::new();
        for recommendation in &self.recommendations {
            match groups
                .iter_mut()
                .find(|group| group.category == recommendation.category)
            {
                Some(group) => group.items.push(recommendation.text),
                None => groups.push(RecommendationGroup {
                    category: recommendation.category,
                    items: vec![recommendation.text],
                }),
            }
        }
        groups
    }
}

/// Display-ordered bundle of recommendation texts sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationGroup {
    pub category: RecommendationCategory,
    pub items: Vec<&'static str>,
}
