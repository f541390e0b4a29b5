//! Profile-to-brokerage matching engine.
//!
//! The pipeline is pure and synchronous: classify the investor into an
//! account category, score every cataloged brokerage through the rule table,
//! normalize against the precomputed ceiling, and explain the top matches.
//! The catalog and rule table are read-only after construction, so one engine
//! can serve concurrent requests without locking.

pub mod catalog;
pub mod classifier;
mod explain;
mod normalize;
pub mod profile;
pub mod router;
pub mod rules;
mod scorer;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use catalog::{Brokerage, BrokerageCatalog, PlatformComplexity};
pub use classifier::{classify, AccountCategory, AccountRecommendation};
pub use profile::{
    AgeRange, Dimension, EmploymentStatus, ExperienceLevel, ImportanceLevel, IncomeLevel,
    InvestorProfile, PlatformPreference, PrimaryGoal, Residency, RiskTolerance, TimeHorizon,
    TradingFrequency,
};
pub use router::recommendation_router;
pub use rules::{Award, RuleTable, ScoringRule};
pub use scorer::{BrokerageScore, ScoreContribution};

/// Number of ranked matches returned to the caller.
const TOP_MATCHES: usize = 3;

/// Per-brokerage output of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub brokerage_id: String,
    pub name: String,
    pub raw_score: i32,
    /// Normalized 0-100 integer percentage.
    pub match_percent: u8,
    /// Positive reasons, highest-impact first, capped together with warnings.
    pub reasons: Vec<String>,
    /// Disqualifying or cautionary notes; always surfaced when present.
    pub warnings: Vec<String>,
}

/// Full result set for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub account_type: AccountRecommendation,
    pub matches: Vec<MatchResult>,
}

/// Stateless engine bundling the catalog, the rule table, and the score
/// ceiling derived from them at construction time.
pub struct RecommendationEngine {
    catalog: BrokerageCatalog,
    rules: RuleTable,
    score_ceiling: i32,
}

impl RecommendationEngine {
    pub fn new(catalog: BrokerageCatalog, rules: RuleTable) -> Self {
        let score_ceiling = rules.theoretical_max()
            + scorer::BUDGET_BONUS
            + scorer::ACCOUNT_SUPPORT_BONUS;

        Self {
            catalog,
            rules,
            score_ceiling,
        }
    }

    /// Engine over the built-in catalog and rule table.
    pub fn standard() -> Self {
        let catalog = BrokerageCatalog::standard();
        let rules = RuleTable::standard(&catalog);
        Self::new(catalog, rules)
    }

    pub fn catalog(&self) -> &BrokerageCatalog {
        &self.catalog
    }

    pub fn score_ceiling(&self) -> i32 {
        self.score_ceiling
    }

    /// Produce the account-category recommendation and the ranked top matches
    /// for a completed profile. Deterministic: identical inputs yield
    /// identical output, and ties keep catalog declaration order.
    pub fn recommend(&self, profile: &InvestorProfile) -> RecommendationOutcome {
        let account_type = classifier::classify(profile);
        let scores = scorer::score_catalog(profile, &self.catalog, &self.rules, &account_type);

        let mut ranked: Vec<(&Brokerage, BrokerageScore, u8)> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                scores.get(&entry.id).map(|score| {
                    let percent = normalize::normalize(score.raw, self.score_ceiling);
                    (entry, score.clone(), percent)
                })
            })
            .collect();

        // Stable sort: entries enter in catalog order, so equal percentages
        // keep their declaration order.
        ranked.sort_by_key(|(_, _, percent)| std::cmp::Reverse(*percent));
        ranked.truncate(TOP_MATCHES);

        let matches = ranked
            .into_iter()
            .map(|(entry, score, percent)| {
                let explanation = explain::explain(&score);
                MatchResult {
                    brokerage_id: entry.id.clone(),
                    name: entry.name.clone(),
                    raw_score: score.raw,
                    match_percent: percent,
                    reasons: explanation.reasons,
                    warnings: explanation.warnings,
                }
            })
            .collect();

        RecommendationOutcome {
            account_type,
            matches,
        }
    }
}
