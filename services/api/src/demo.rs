use clap::Args;
use mindwell::config::AppConfig;
use mindwell::error::AppError;
use mindwell::screening::{
    AnswerOverride, CohortImporter, ModelSource, RawAnswers, RiskReport, ScreeningService,
    ScreeningServiceError, WhatIfComparison, YesNo,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::build_screening_service;

#[derive(Args, Debug)]
pub(crate) struct ScreenReportArgs {
    /// Age in years (18-100)
    #[arg(long)]
    age: u8,
    /// Self-employed? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    self_employed: YesNo,
    /// Family history of mental illness? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    family_history: YesNo,
    /// Working remotely? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    remote_work: YesNo,
    /// Employed at a tech company? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    tech_company: YesNo,
    /// Employer offers mental health benefits? (yes/no)
    #[arg(long, value_parser = parse_answer)]
    benefits: YesNo,
    /// Re-run the report with one field changed, e.g. --what-if benefits=yes
    #[arg(long, value_parser = parse_override)]
    what_if: Option<AnswerOverride>,
    /// Print the raw report JSON instead of the rendered summary
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Cohort CSV export with one row of answers per respondent
    #[arg(long)]
    csv: PathBuf,
}

fn parse_answer(raw: &str) -> Result<YesNo, String> {
    YesNo::parse(raw).ok_or_else(|| format!("'{raw}' is not a yes/no answer"))
}

fn parse_override(raw: &str) -> Result<AnswerOverride, String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;

    match field.trim().to_ascii_lowercase().as_str() {
        "age" => {
            let age = value
                .trim()
                .parse()
                .map_err(|_| format!("'{value}' is not a whole-number age"))?;
            Ok(AnswerOverride::Age(age))
        }
        "self_employed" => Ok(AnswerOverride::SelfEmployed(parse_answer(value)?)),
        "family_history" => Ok(AnswerOverride::FamilyHistory(parse_answer(value)?)),
        "remote_work" => Ok(AnswerOverride::RemoteWork(parse_answer(value)?)),
        "tech_company" => Ok(AnswerOverride::TechCompany(parse_answer(value)?)),
        "benefits" => Ok(AnswerOverride::Benefits(parse_answer(value)?)),
        other => Err(format!("unknown what-if field '{other}'")),
    }
}

fn load_service() -> Result<(Arc<ScreeningService>, ModelSource), AppError> {
    let config = AppConfig::load()?;
    Ok(build_screening_service(&config.model))
}

pub(crate) fn run_screen_report(args: ScreenReportArgs) -> Result<(), AppError> {
    let answers = RawAnswers::new(
        args.age,
        args.self_employed,
        args.family_history,
        args.remote_work,
        args.tech_company,
        args.benefits,
    )
    .map_err(ScreeningServiceError::Answers)
    .map_err(AppError::from)?;

    let (service, source) = load_service()?;
    let report = service.assess(&answers).map_err(AppError::from)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else {
        render_report(&report, source);
    }

    if let Some(change) = args.what_if {
        let comparison = service.what_if(&answers, change).map_err(AppError::from)?;
        render_what_if(&comparison);
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let cohort = CohortImporter::from_path(&args.csv)?;
    let (service, source) = load_service()?;

    println!("Cohort screening ({} respondent(s))", cohort.len());
    println!("Model: {}", source.label());

    for (index, answers) in cohort.iter().enumerate() {
        let report = service.assess(answers).map_err(AppError::from)?;
        println!(
            "- row {}: {} | score {} ({}) | {:.1}% probability",
            index + 1,
            report.prediction.label(),
            report.risk_score,
            report.risk_level.label(),
            report.probability * 100.0
        );
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let (service, source) = load_service()?;

    let low_risk = RawAnswers::new(30, YesNo::No, YesNo::No, YesNo::Yes, YesNo::No, YesNo::No)
        .map_err(ScreeningServiceError::Answers)
        .map_err(AppError::from)?;
    let high_risk = RawAnswers::new(50, YesNo::No, YesNo::Yes, YesNo::No, YesNo::Yes, YesNo::No)
        .map_err(ScreeningServiceError::Answers)
        .map_err(AppError::from)?;

    println!("Wellness screening demo");
    println!("Model: {}", source.label());

    println!("\n== Low-risk profile ==");
    let report = service.assess(&low_risk).map_err(AppError::from)?;
    render_report(&report, source);

    println!("\n== High-risk profile ==");
    let report = service.assess(&high_risk).map_err(AppError::from)?;
    render_report(&report, source);

    let comparison = service
        .what_if(&high_risk, AnswerOverride::Benefits(YesNo::Yes))
        .map_err(AppError::from)?;
    render_what_if(&comparison);

    Ok(())
}

fn render_report(report: &RiskReport, source: ModelSource) {
    println!("Prediction: {}", report.prediction.label());
    println!("Probability: {:.1}%", report.probability * 100.0);
    println!(
        "Risk score: {} ({} risk)",
        report.risk_score,
        report.risk_level.label()
    );
    println!("Decision function: {}", source.label());

    if report.risk_factors.is_empty() {
        println!("Risk factors: none identified");
    } else {
        println!("Risk factors");
        for factor in &report.risk_factors {
            println!("- {factor}");
        }
    }

    println!("Recommended actions");
    for group in report.grouped_recommendations() {
        println!("- {}:", group.category.label());
        for item in group.items {
            println!("  - {item}");
        }
    }

    println!("Overview: {}", report.explanation);
}

fn render_what_if(comparison: &WhatIfComparison) {
    println!(
        "\nWhat-if: changing '{}' moves the risk level from {} (score {}) to {} (score {})",
        comparison.changed_field,
        comparison.baseline.risk_level.label(),
        comparison.baseline.risk_score,
        comparison.scenario.risk_level.label(),
        comparison.scenario.risk_score
    );
}
