use metrics_exporter_prometheus::PrometheusHandle;
use nestegg::matching::{
    AgeRange, EmploymentStatus, ExperienceLevel, ImportanceLevel, IncomeLevel, InvestorProfile,
    PlatformPreference, PrimaryGoal, Residency, RiskTolerance, TimeHorizon, TradingFrequency,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in questionnaire personas used by the `demo` subcommand.
pub(crate) fn demo_personas() -> Vec<(&'static str, InvestorProfile)> {
    let mut first_timer = InvestorProfile {
        age_range: Some(AgeRange::UnderThirty),
        employment: Some(EmploymentStatus::Employed),
        primary_goal: Some(PrimaryGoal::Savings),
        income_level: Some(IncomeLevel::Low),
        residency: Some(Residency::Domestic),
        experience: Some(ExperienceLevel::Beginner),
        platform_preference: Some(PlatformPreference::Simple),
        support_importance: Some(ImportanceLevel::High),
        time_horizon: Some(TimeHorizon::LongTerm),
        budget: Some(250),
        ..InvestorProfile::default()
    };
    first_timer
        .asset_classes
        .insert("fractional_shares".to_string());
    first_timer.priorities.insert("education".to_string());

    let mut day_trader = InvestorProfile {
        age_range: Some(AgeRange::UnderThirty),
        employment: Some(EmploymentStatus::SelfEmployed),
        primary_goal: Some(PrimaryGoal::ActiveTrading),
        income_level: Some(IncomeLevel::Medium),
        residency: Some(Residency::Domestic),
        experience: Some(ExperienceLevel::Advanced),
        trading_frequency: Some(TradingFrequency::Daily),
        platform_preference: Some(PlatformPreference::Professional),
        research_importance: Some(ImportanceLevel::High),
        risk_tolerance: Some(RiskTolerance::Aggressive),
        budget: Some(10_000),
        ..InvestorProfile::default()
    };
    day_trader.asset_classes.insert("options".to_string());
    day_trader.priorities.insert("low_fees".to_string());

    let mut late_saver = InvestorProfile {
        age_range: Some(AgeRange::FiftyFivePlus),
        employment: Some(EmploymentStatus::Employed),
        primary_goal: Some(PrimaryGoal::Retirement),
        income_level: Some(IncomeLevel::Medium),
        residency: Some(Residency::Domestic),
        experience: Some(ExperienceLevel::Intermediate),
        support_importance: Some(ImportanceLevel::High),
        time_horizon: Some(TimeHorizon::MediumTerm),
        risk_tolerance: Some(RiskTolerance::Conservative),
        budget: Some(5_000),
        ..InvestorProfile::default()
    };
    late_saver
        .special_features
        .insert("advisor_access".to_string());

    vec![
        ("First-time investor", first_timer),
        ("Self-employed day trader", day_trader),
        ("Late-career retirement saver", late_saver),
    ]
}
