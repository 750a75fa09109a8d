use crate::screening::domain::RawAnswers;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationCategory {
    #[serde(rename = "Immediate Action")]
    ImmediateAction,
    #[serde(rename = "Lifestyle Adjustments")]
    LifestyleAdjustments,
    #[serde(rename = "General Wellness")]
    GeneralWellness,
}

impl RecommendationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ImmediateAction => "Immediate Action",
            Self::LifestyleAdjustments => "Lifestyle Adjustments",
            Self::GeneralWellness => "General Wellness",
        }
    }
}

/// One canned action item attached to a fired rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub text: &'static str,
}

/// One row of the fixed scoring rubric.
///
/// Rules are evaluated independently, in table order, and every rule is
/// checked regardless of earlier matches.
pub(crate) struct RiskRule {
    pub weight: u8,
    pub label: &'static str,
    pub recommendation: Recommendation,
    pub applies: fn(&RawAnswers) -> bool,
}

/// Extra weight folded into the score when the classifier predicts the
/// positive class. The prediction is never listed as a factor string.
pub(crate) const PREDICTION_WEIGHT: u8 = 5;

pub(crate) fn standard_rules() -> &'static [RiskRule] {
    &STANDARD_RULES
}

pub(crate) const FALLBACK_RECOMMENDATION: Recommendation = Recommendation {
    category: RecommendationCategory::GeneralWellness,
    text: "Your profile indicates a low-risk status. Continue to monitor your mental health and seek professional help if your circumstances change.",
};

static STANDARD_RULES: [RiskRule; 4] = [
    RiskRule {
        weight: 3,
        label: "Family History of Mental Health",
        recommendation: Recommendation {
            category: RecommendationCategory::ImmediateAction,
            text: "Consider speaking with a professional about your family history and its potential impact on your well-being. A genetic counselor or therapist may provide valuable guidance.",
        },
        applies: family_history_present,
    },
    RiskRule {
        weight: 2,
        label: "On-site Work Environment",
        recommendation: Recommendation {
            category: RecommendationCategory::LifestyleAdjustments,
            text: "Maintaining a healthy work-life balance is crucial in an on-site role. Explore stress management techniques and ensure you take regular breaks.",
        },
        applies: works_on_site,
    },
    RiskRule {
        weight: 4,
        label: "Lack of Employer Mental Health Benefits",
        recommendation: Recommendation {
            category: RecommendationCategory::ImmediateAction,
            text: "Research local mental health resources and services that are independent of employer benefits. Prioritize your well-being, even without company support.",
        },
        applies: tech_without_benefits,
    },
    RiskRule {
        weight: 1,
        label: "Age-Related Stress Factors",
        recommendation: Recommendation {
            category: RecommendationCategory::LifestyleAdjustments,
            text: "As we age, our mental health needs can change. Stay connected with friends and family, and consider mindfulness or meditation to manage stress.",
        },
        applies: past_age_threshold,
    },
];

fn family_history_present(answers: &RawAnswers) -> bool {
    answers.family_history.is_yes()
}

fn works_on_site(answers: &RawAnswers) -> bool {
    !answers.remote_work.is_yes()
}

fn tech_without_benefits(answers: &RawAnswers) -> bool {
    answers.tech_company.is_yes() && !answers.benefits.is_yes()
}

fn past_age_threshold(answers: &RawAnswers) -> bool {
    answers.age > 45
}
