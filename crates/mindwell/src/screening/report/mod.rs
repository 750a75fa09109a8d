mod engine;
mod rules;
pub mod views;

pub use engine::build_report;
pub use rules::{Recommendation, RecommendationCategory};
pub use views::{RecommendationGroup, RiskLevel, RiskReport};
