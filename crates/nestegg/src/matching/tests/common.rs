use axum::response::Response;
use serde_json::Value;

use crate::matching::profile::{
    AgeRange, EmploymentStatus, ExperienceLevel, ImportanceLevel, IncomeLevel, PrimaryGoal,
    Residency, RiskTolerance, TimeHorizon, TradingFrequency,
};
use crate::matching::{BrokerageCatalog, InvestorProfile, RecommendationEngine, RuleTable};

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}

pub(super) fn standard_table() -> RuleTable {
    RuleTable::standard(&BrokerageCatalog::standard())
}

/// A fully answered profile for a cautious, retirement-minded mid-career
/// investor. Individual tests override the fields they exercise.
pub(super) fn base_profile() -> InvestorProfile {
    let mut profile = InvestorProfile {
        age_range: Some(AgeRange::ThirtyToFiftyFour),
        employment: Some(EmploymentStatus::Employed),
        primary_goal: Some(PrimaryGoal::Retirement),
        income_level: Some(IncomeLevel::Medium),
        residency: Some(Residency::Domestic),
        experience: Some(ExperienceLevel::Intermediate),
        trading_frequency: Some(TradingFrequency::Monthly),
        platform_preference: None,
        research_importance: Some(ImportanceLevel::High),
        support_importance: Some(ImportanceLevel::Medium),
        time_horizon: Some(TimeHorizon::LongTerm),
        risk_tolerance: Some(RiskTolerance::Moderate),
        asset_classes: Default::default(),
        special_features: Default::default(),
        priorities: Default::default(),
        budget: Some(1500),
    };
    profile.asset_classes.insert("international".to_string());
    profile.priorities.insert("education".to_string());
    profile
}

/// A young first-time investor profile that classifies into the Roth branch.
pub(super) fn young_saver_profile() -> InvestorProfile {
    InvestorProfile {
        age_range: Some(AgeRange::UnderThirty),
        employment: Some(EmploymentStatus::Employed),
        primary_goal: Some(PrimaryGoal::Savings),
        income_level: Some(IncomeLevel::Low),
        residency: Some(Residency::Domestic),
        experience: Some(ExperienceLevel::Beginner),
        budget: Some(200),
        ..InvestorProfile::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
