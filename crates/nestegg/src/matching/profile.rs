use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Questionnaire age bands used by the account-category decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRange {
    UnderThirty,
    ThirtyToFiftyFour,
    FiftyFivePlus,
}

impl AgeRange {
    pub const fn key(self) -> &'static str {
        match self {
            AgeRange::UnderThirty => "under_thirty",
            AgeRange::ThirtyToFiftyFour => "thirty_to_fifty_four",
            AgeRange::FiftyFivePlus => "fifty_five_plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Student,
    Unemployed,
    Retired,
}

impl EmploymentStatus {
    pub const fn key(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::SelfEmployed => "self_employed",
            EmploymentStatus::Student => "student",
            EmploymentStatus::Unemployed => "unemployed",
            EmploymentStatus::Retired => "retired",
        }
    }

    /// Earned income is a precondition for IRA contribution branches.
    pub const fn is_working(self) -> bool {
        matches!(self, EmploymentStatus::Employed | EmploymentStatus::SelfEmployed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    Retirement,
    Savings,
    ActiveTrading,
    WealthBuilding,
}

impl PrimaryGoal {
    pub const fn key(self) -> &'static str {
        match self {
            PrimaryGoal::Retirement => "retirement",
            PrimaryGoal::Savings => "savings",
            PrimaryGoal::ActiveTrading => "active_trading",
            PrimaryGoal::WealthBuilding => "wealth_building",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    Low,
    Medium,
    High,
}

impl IncomeLevel {
    pub const fn key(self) -> &'static str {
        match self {
            IncomeLevel::Low => "low",
            IncomeLevel::Medium => "medium",
            IncomeLevel::High => "high",
        }
    }
}

/// Country-of-residence class. Domestic residents qualify for tax-advantaged
/// vehicles; everyone else is routed to a taxable account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Residency {
    Domestic,
    Other,
}

impl Residency {
    pub const fn key(self) -> &'static str {
        match self {
            Residency::Domestic => "domestic",
            Residency::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const fn key(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradingFrequency {
    Rarely,
    Monthly,
    Weekly,
    Daily,
}

impl TradingFrequency {
    pub const fn key(self) -> &'static str {
        match self {
            TradingFrequency::Rarely => "rarely",
            TradingFrequency::Monthly => "monthly",
            TradingFrequency::Weekly => "weekly",
            TradingFrequency::Daily => "daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPreference {
    Simple,
    Balanced,
    Professional,
}

impl PlatformPreference {
    pub const fn key(self) -> &'static str {
        match self {
            PlatformPreference::Simple => "simple",
            PlatformPreference::Balanced => "balanced",
            PlatformPreference::Professional => "professional",
        }
    }
}

/// Shared low/medium/high scale for the importance questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceLevel {
    Low,
    Medium,
    High,
}

impl ImportanceLevel {
    pub const fn key(self) -> &'static str {
        match self {
            ImportanceLevel::Low => "low",
            ImportanceLevel::Medium => "medium",
            ImportanceLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeHorizon {
    pub const fn key(self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "short_term",
            TimeHorizon::MediumTerm => "medium_term",
            TimeHorizon::LongTerm => "long_term",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub const fn key(self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        }
    }
}

/// One axis of the profile used as a scoring input. Stable identifiers keep the
/// rule table addressable as plain configuration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Experience,
    TradingFrequency,
    PlatformPreference,
    ResearchImportance,
    SupportImportance,
    TimeHorizon,
    RiskTolerance,
    PrimaryGoal,
    AssetClasses,
    SpecialFeatures,
    Priorities,
    Budget,
    AccountCompatibility,
}

impl Dimension {
    /// Dimensions resolved through the scoring-rule table, in the fixed order
    /// the scorer walks them. Budget and account compatibility are scored
    /// directly against catalog data and carry no table rows.
    pub const TABLE_DRIVEN: [Dimension; 11] = [
        Dimension::Experience,
        Dimension::TradingFrequency,
        Dimension::PlatformPreference,
        Dimension::ResearchImportance,
        Dimension::SupportImportance,
        Dimension::TimeHorizon,
        Dimension::RiskTolerance,
        Dimension::PrimaryGoal,
        Dimension::AssetClasses,
        Dimension::SpecialFeatures,
        Dimension::Priorities,
    ];

    pub const fn is_multi_select(self) -> bool {
        matches!(
            self,
            Dimension::AssetClasses | Dimension::SpecialFeatures | Dimension::Priorities
        )
    }
}

/// Immutable answer set assembled by the questionnaire once every step has
/// completed. Unanswered single-select dimensions stay `None` and simply
/// contribute nothing to scoring; multi-select dimensions are sets, so
/// duplicates and ordering are irrelevant by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestorProfile {
    pub age_range: Option<AgeRange>,
    pub employment: Option<EmploymentStatus>,
    pub primary_goal: Option<PrimaryGoal>,
    pub income_level: Option<IncomeLevel>,
    pub residency: Option<Residency>,
    pub experience: Option<ExperienceLevel>,
    pub trading_frequency: Option<TradingFrequency>,
    pub platform_preference: Option<PlatformPreference>,
    pub research_importance: Option<ImportanceLevel>,
    pub support_importance: Option<ImportanceLevel>,
    pub time_horizon: Option<TimeHorizon>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub asset_classes: BTreeSet<String>,
    pub special_features: BTreeSet<String>,
    pub priorities: BTreeSet<String>,
    /// Starting budget in whole currency units.
    pub budget: Option<u32>,
}

impl InvestorProfile {
    /// Selected option ids for a table-driven dimension. Single-select axes
    /// yield zero or one id; multi-select axes yield each member of the set in
    /// its stable (sorted) order.
    pub fn selections(&self, dimension: Dimension) -> Vec<&str> {
        match dimension {
            Dimension::Experience => option_key(self.experience.map(ExperienceLevel::key)),
            Dimension::TradingFrequency => {
                option_key(self.trading_frequency.map(TradingFrequency::key))
            }
            Dimension::PlatformPreference => {
                option_key(self.platform_preference.map(PlatformPreference::key))
            }
            Dimension::ResearchImportance => {
                option_key(self.research_importance.map(ImportanceLevel::key))
            }
            Dimension::SupportImportance => {
                option_key(self.support_importance.map(ImportanceLevel::key))
            }
            Dimension::TimeHorizon => option_key(self.time_horizon.map(TimeHorizon::key)),
            Dimension::RiskTolerance => option_key(self.risk_tolerance.map(RiskTolerance::key)),
            Dimension::PrimaryGoal => option_key(self.primary_goal.map(PrimaryGoal::key)),
            Dimension::AssetClasses => self.asset_classes.iter().map(String::as_str).collect(),
            Dimension::SpecialFeatures => {
                self.special_features.iter().map(String::as_str).collect()
            }
            Dimension::Priorities => self.priorities.iter().map(String::as_str).collect(),
            Dimension::Budget | Dimension::AccountCompatibility => Vec::new(),
        }
    }
}

fn option_key(key: Option<&'static str>) -> Vec<&str> {
    key.map(|value| vec![value]).unwrap_or_default()
}
