use serde::{Deserialize, Serialize};

use super::profile::{AgeRange, EmploymentStatus, IncomeLevel, InvestorProfile, PrimaryGoal, Residency};

/// Tax-treatment category recommended by the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    Taxable,
    TraditionalIra,
    RothIra,
    EmployerPlanThenIra,
    TraditionalOrRothIra,
}

impl AccountCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AccountCategory::Taxable => "Taxable brokerage",
            AccountCategory::TraditionalIra => "Traditional IRA",
            AccountCategory::RothIra => "Roth IRA",
            AccountCategory::EmployerPlanThenIra => "Employer plan, then IRA",
            AccountCategory::TraditionalOrRothIra => "Traditional or Roth IRA",
        }
    }

    /// Composite recommendations reduce to the IRA leg a brokerage would
    /// actually open, which is what catalog support/exclusion sets describe.
    pub const fn compatibility_key(self) -> AccountCategory {
        match self {
            AccountCategory::EmployerPlanThenIra => AccountCategory::TraditionalIra,
            AccountCategory::TraditionalOrRothIra => AccountCategory::RothIra,
            other => other,
        }
    }
}

/// Classifier output. Exactly one is produced per call; the rationale and
/// descriptor strings are literal templates owned by the branch that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecommendation {
    pub category: AccountCategory,
    pub rationale: String,
    pub tax_benefit: String,
    pub best_for: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

struct ClassificationRule {
    #[allow(dead_code)]
    id: &'static str,
    applies: fn(&InvestorProfile) -> bool,
    outcome: fn() -> AccountRecommendation,
}

/// The decision tree as an explicit, ordered rule list. Evaluation is
/// top-to-bottom and the first matching rule short-circuits; later rules
/// assume the exclusions established by earlier ones (for example, the
/// high-income rules only see domestic, non-retired profiles). Reordering
/// entries changes behavior.
const DECISION_TREE: &[ClassificationRule] = &[
    ClassificationRule {
        id: "non_resident",
        applies: |p| p.residency == Some(Residency::Other),
        outcome: || AccountRecommendation {
            category: AccountCategory::Taxable,
            rationale: "Domestic tax-advantaged retirement accounts are not available to \
                        non-residents, so a standard taxable account keeps every door open."
                .to_string(),
            tax_benefit: "No special tax treatment; gains are taxed as realized.".to_string(),
            best_for: "Investors living outside the country.".to_string(),
            warning: None,
        },
    },
    ClassificationRule {
        id: "retired",
        applies: |p| p.employment == Some(EmploymentStatus::Retired),
        outcome: || AccountRecommendation {
            category: AccountCategory::TraditionalIra,
            rationale: "In retirement, a traditional IRA keeps tax-deferred savings working \
                        and supports rollovers from employer plans."
                .to_string(),
            tax_benefit: "Tax-deferred growth; withdrawals taxed as ordinary income.".to_string(),
            best_for: "Retirees consolidating and drawing down savings.".to_string(),
            warning: None,
        },
    },
    ClassificationRule {
        id: "high_income_retirement",
        applies: |p| {
            p.income_level == Some(IncomeLevel::High)
                && p.primary_goal == Some(PrimaryGoal::Retirement)
        },
        outcome: || AccountRecommendation {
            category: AccountCategory::TraditionalIra,
            rationale: "High earners saving for retirement get the most from deferring tax \
                        on contributions today."
                .to_string(),
            tax_benefit: "Contributions may reduce taxable income now; growth is tax-deferred."
                .to_string(),
            best_for: "High earners focused on retirement.".to_string(),
            warning: Some(
                "Above certain income levels the contribution deduction phases out; check \
                 the current IRS limits."
                    .to_string(),
            ),
        },
    },
    ClassificationRule {
        id: "high_income",
        applies: |p| p.income_level == Some(IncomeLevel::High),
        outcome: || AccountRecommendation {
            category: AccountCategory::Taxable,
            rationale: "With high income and goals outside retirement, a taxable account \
                        offers unlimited contributions and full flexibility."
                .to_string(),
            tax_benefit: "No contribution caps; long-term gains taxed at capital-gains rates."
                .to_string(),
            best_for: "High earners investing beyond retirement accounts.".to_string(),
            warning: None,
        },
    },
    ClassificationRule {
        id: "young_active_trader",
        applies: |p| {
            p.age_range == Some(AgeRange::UnderThirty)
                && p.employment.map(EmploymentStatus::is_working).unwrap_or(false)
                && p.primary_goal == Some(PrimaryGoal::ActiveTrading)
        },
        outcome: || AccountRecommendation {
            category: AccountCategory::Taxable,
            rationale: "Active trading needs the withdrawal and margin flexibility only a \
                        taxable account provides."
                .to_string(),
            tax_benefit: "No early-withdrawal penalties; trade as often as you like."
                .to_string(),
            best_for: "Young, frequent traders who want full access to their money.".to_string(),
            warning: None,
        },
    },
    ClassificationRule {
        id: "young_earner",
        applies: |p| {
            p.age_range == Some(AgeRange::UnderThirty)
                && p.employment.map(EmploymentStatus::is_working).unwrap_or(false)
        },
        outcome: || AccountRecommendation {
            category: AccountCategory::RothIra,
            rationale: "Decades of compounding make tax-free growth the biggest lever for \
                        young earners; a Roth IRA locks that in."
                .to_string(),
            tax_benefit: "Contributions are post-tax; qualified withdrawals are entirely \
                          tax-free."
                .to_string(),
            best_for: "Young workers early in their earnings curve.".to_string(),
            warning: Some(
                "Roth IRA contributions are capped each year; contributions above the annual \
                 limit are penalized."
                    .to_string(),
            ),
        },
    },
    ClassificationRule {
        id: "midcareer_retirement_employed",
        applies: |p| {
            p.age_range == Some(AgeRange::ThirtyToFiftyFour)
                && p.primary_goal == Some(PrimaryGoal::Retirement)
                && p.employment == Some(EmploymentStatus::Employed)
        },
        outcome: || AccountRecommendation {
            category: AccountCategory::EmployerPlanThenIra,
            rationale: "Capture the full employer match first; it is an immediate return no \
                        brokerage account can beat."
                .to_string(),
            tax_benefit: "Employer-plan contributions are pre-tax, and the match is free money."
                .to_string(),
            best_for: "Mid-career employees with a workplace plan.".to_string(),
            warning: Some(
                "Once the employer match is maxed, layer an IRA on top for additional \
                 tax-advantaged room."
                    .to_string(),
            ),
        },
    },
    ClassificationRule {
        id: "midcareer_retirement",
        applies: |p| {
            p.age_range == Some(AgeRange::ThirtyToFiftyFour)
                && p.primary_goal == Some(PrimaryGoal::Retirement)
        },
        outcome: || AccountRecommendation {
            category: AccountCategory::TraditionalOrRothIra,
            rationale: "Without a workplace plan, an IRA is the main tax-advantaged vehicle; \
                        traditional versus Roth depends on your current versus expected tax \
                        bracket."
                .to_string(),
            tax_benefit: "Traditional defers tax now; Roth trades that for tax-free \
                          withdrawals later."
                .to_string(),
            best_for: "Mid-career savers choosing their own retirement vehicle.".to_string(),
            warning: Some(
                "The traditional-versus-Roth choice depends on your tax situation; compare \
                 both before funding."
                    .to_string(),
            ),
        },
    },
    ClassificationRule {
        id: "midcareer",
        applies: |p| p.age_range == Some(AgeRange::ThirtyToFiftyFour),
        outcome: || AccountRecommendation {
            category: AccountCategory::Taxable,
            rationale: "For mid-career goals other than retirement, a taxable account keeps \
                        the money reachable without penalties."
                .to_string(),
            tax_benefit: "Full liquidity; long-term gains taxed at capital-gains rates."
                .to_string(),
            best_for: "Mid-career investors with nearer-term goals.".to_string(),
            warning: None,
        },
    },
    ClassificationRule {
        id: "late_career_saver",
        applies: |p| {
            p.age_range == Some(AgeRange::FiftyFivePlus)
                && matches!(
                    p.primary_goal,
                    Some(PrimaryGoal::Retirement) | Some(PrimaryGoal::Savings)
                )
        },
        outcome: || AccountRecommendation {
            category: AccountCategory::TraditionalIra,
            rationale: "Close to retirement, deferring tax on contributions has the most \
                        immediate payoff."
                .to_string(),
            tax_benefit: "Tax-deferred growth with deductible contributions for most savers."
                .to_string(),
            best_for: "Savers within sight of retirement.".to_string(),
            warning: Some(
                "You qualify for catch-up contributions above the standard annual limit; \
                 use them."
                    .to_string(),
            ),
        },
    },
];

/// Classify a profile into exactly one account-category recommendation.
///
/// Total function: the terminal fallback below guarantees a result even for an
/// entirely unanswered profile.
pub fn classify(profile: &InvestorProfile) -> AccountRecommendation {
    DECISION_TREE
        .iter()
        .find(|rule| (rule.applies)(profile))
        .map(|rule| (rule.outcome)())
        .unwrap_or_else(fallback)
}

fn fallback() -> AccountRecommendation {
    AccountRecommendation {
        category: AccountCategory::Taxable,
        rationale: "A taxable brokerage account is the most flexible default and never \
                    locks money away."
            .to_string(),
        tax_benefit: "No contribution limits or withdrawal restrictions.".to_string(),
        best_for: "Anyone starting out without a specific tax-advantaged fit.".to_string(),
        warning: None,
    }
}
