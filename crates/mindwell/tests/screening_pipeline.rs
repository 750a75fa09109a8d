use std::sync::Arc;

use mindwell::screening::{
    AnswerOverride, FeatureSchema, HeuristicClassifier, ModelSource, Prediction, RawAnswers,
    RiskLevel, ScreeningService, YesNo,
};

fn service() -> ScreeningService<HeuristicClassifier> {
    ScreeningService::new(
        Arc::new(HeuristicClassifier),
        FeatureSchema::default_ordering(),
        ModelSource::Heuristic,
    )
}

fn low_risk_answers() -> RawAnswers {
    RawAnswers::new(30, YesNo::No, YesNo::No, YesNo::Yes, YesNo::No, YesNo::No)
        .expect("valid answers")
}

fn high_risk_answers() -> RawAnswers {
    RawAnswers::new(50, YesNo::No, YesNo::Yes, YesNo::No, YesNo::Yes, YesNo::No)
        .expect("valid answers")
}

#[test]
fn low_risk_profile_flows_to_a_low_tier_report() {
    let report = service()
        .assess(&low_risk_answers())
        .expect("assessment runs");

    assert_eq!(report.prediction, Prediction::TreatmentUnlikely);
    assert_eq!(report.risk_score, 0);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert!(report.risk_factors.is_empty());
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].category.label(), "General Wellness");
}

#[test]
fn high_risk_profile_flows_to_a_high_tier_report() {
    let report = service()
        .assess(&high_risk_answers())
        .expect("assessment runs");

    assert_eq!(report.prediction, Prediction::TreatmentLikely);
    assert_eq!(report.risk_score, 15);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.risk_factors.len(), 4);
    assert_eq!(report.grouped_recommendations().len(), 2);
}

#[test]
fn repeated_assessments_serialize_identically() {
    let service = service();
    let answers = high_risk_answers();

    let first = serde_json::to_string(&service.assess(&answers).expect("assessment runs"))
        .expect("serializes");
    let second = serde_json::to_string(&service.assess(&answers).expect("assessment runs"))
        .expect("serializes");

    assert_eq!(first, second);
}

#[test]
fn what_if_produces_an_independent_scenario_report() {
    let service = service();
    let baseline_answers = high_risk_answers();

    let comparison = service
        .what_if(&baseline_answers, AnswerOverride::RemoteWork(YesNo::Yes))
        .expect("what-if runs");

    assert_eq!(comparison.changed_field, "remote_work");
    assert_eq!(comparison.baseline.input_data, baseline_answers);
    assert_eq!(comparison.scenario.input_data.remote_work, YesNo::Yes);
    assert_eq!(
        comparison.baseline.risk_score - 2,
        comparison.scenario.risk_score,
        "only the on-site weight should move"
    );
}

#[test]
fn answers_round_trip_through_json_with_validation() {
    let parsed: RawAnswers = serde_json::from_str(
        r#"{
            "age": 46,
            "self_employed": "Yes",
            "family_history": "No",
            "remote_work": "Yes",
            "tech_company": "No",
            "benefits": "Yes"
        }"#,
    )
    .expect("valid payload parses");
    assert_eq!(parsed.age, 46);

    let rejected = serde_json::from_str::<RawAnswers>(
        r#"{
            "age": 12,
            "self_employed": "Yes",
            "family_history": "No",
            "remote_work": "Yes",
            "tech_company": "No",
            "benefits": "Yes"
        }"#,
    );
    assert!(rejected.is_err(), "under-age payloads must not deserialize");
}
