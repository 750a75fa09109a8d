use super::rules;
use super::views::{RiskLevel, RiskReport};
use crate::screening::domain::{Prediction, RawAnswers};

const POSITIVE_EXPLANATION: &str = "The analysis suggests a high probability of requiring professional assistance based on the provided data.";
const NEGATIVE_EXPLANATION: &str = "The analysis indicates a low probability of requiring treatment at this time.";

/// Combine the raw answers and the classifier output into a risk report.
///
/// Pure function of its inputs plus the fixed rule table: no side effects,
/// idempotent, safe to memoize by input equality.
pub fn build_report(answers: &RawAnswers, prediction: Prediction, probability: f64) -> RiskReport {
    let mut risk_score: u8 = 0;
    let mut risk_factors = Vec::new();
    let mut recommendations = Vec::new();

    for rule in rules::standard_rules() {
        if (rule.applies)(answers) {
            risk_score += rule.weight;
            risk_factors.push(rule.label);
            recommendations.push(rule.recommendation);
        }
    }

    if prediction.is_positive() {
        risk_score += rules::PREDICTION_WEIGHT;
    }

    if risk_factors.is_empty() {
        recommendations.push(rules::FALLBACK_RECOMMENDATION);
    }

    let risk_level = RiskLevel::for_score(risk_score);

    RiskReport {
        prediction,
        probability,
        risk_score,
        risk_level,
        risk_level_color: risk_level.color(),
        input_data: *answers,
        risk_factors,
        recommendations,
        explanation: explanation_for(prediction),
    }
}

/// The explanation depends on the prediction alone, never on the score.
pub(crate) const fn explanation_for(prediction: Prediction) -> &'static str {
    match prediction {
        Prediction::TreatmentLikely => POSITIVE_EXPLANATION,
        Prediction::TreatmentUnlikely => NEGATIVE_EXPLANATION,
    }
}
