use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{Brokerage, BrokerageCatalog};
use super::classifier::AccountRecommendation;
use super::profile::{Dimension, InvestorProfile};
use super::rules::RuleTable;

/// Every brokerage starts from the same baseline. The two legacy engines
/// disagreed on 0 versus 50; this implementation standardizes on 0 so raw
/// scores are nothing but summed rule contributions.
pub(crate) const BASELINE_SCORE: i32 = 0;

/// Fixed budget adjustments. A deposit requirement above the stated budget is
/// a hard disqualifier, so the penalty deliberately outweighs the bonus.
pub(crate) const BUDGET_BONUS: i32 = 15;
pub(crate) const BUDGET_PENALTY: i32 = 40;

/// Account-category compatibility adjustments applied once the classifier has
/// produced its recommendation.
pub(crate) const ACCOUNT_SUPPORT_BONUS: i32 = 20;
pub(crate) const ACCOUNT_EXCLUSION_PENALTY: i32 = 60;

/// Discrete contribution to a brokerage's score, kept so explanations can be
/// synthesized from exactly what fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub dimension: Dimension,
    pub points: i32,
    pub phrase: String,
}

impl ScoreContribution {
    /// Negative contributions surface as warnings rather than reasons.
    pub fn is_warning(&self) -> bool {
        self.points < 0
    }
}

/// Raw accumulated score for one brokerage plus its audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerageScore {
    /// Summed contributions, floored at 0.
    pub raw: i32,
    pub contributions: Vec<ScoreContribution>,
}

/// Score every cataloged brokerage against the profile.
///
/// Pure reduction: contributions are additive, so the dimension walk order
/// never changes the totals. Unknown option ids miss the rule table and
/// contribute nothing; rule awards naming brokerages absent from the catalog
/// are skipped the same way.
pub(crate) fn score_catalog(
    profile: &InvestorProfile,
    catalog: &BrokerageCatalog,
    table: &RuleTable,
    account: &AccountRecommendation,
) -> BTreeMap<String, BrokerageScore> {
    let mut totals: BTreeMap<String, i32> = BTreeMap::new();
    let mut trails: BTreeMap<String, Vec<ScoreContribution>> = BTreeMap::new();

    for entry in catalog.entries() {
        totals.insert(entry.id.clone(), BASELINE_SCORE);
        trails.insert(entry.id.clone(), Vec::new());
    }

    for dimension in Dimension::TABLE_DRIVEN {
        for option in profile.selections(dimension) {
            let Some(rule) = table.lookup(dimension, option) else {
                continue;
            };
            for award in &rule.awards {
                let Some(total) = totals.get_mut(&award.brokerage) else {
                    continue;
                };
                *total += award.points;
                if let Some(trail) = trails.get_mut(&award.brokerage) {
                    trail.push(ScoreContribution {
                        dimension,
                        points: award.points,
                        phrase: rule.phrase.clone(),
                    });
                }
            }
        }
    }

    if let Some(budget) = profile.budget {
        for entry in catalog.entries() {
            let contribution = budget_contribution(entry, budget);
            if let Some(total) = totals.get_mut(&entry.id) {
                *total += contribution.points;
            }
            if let Some(trail) = trails.get_mut(&entry.id) {
                trail.push(contribution);
            }
        }
    }

    for entry in catalog.entries() {
        if let Some(contribution) = account_contribution(entry, account) {
            if let Some(total) = totals.get_mut(&entry.id) {
                *total += contribution.points;
            }
            if let Some(trail) = trails.get_mut(&entry.id) {
                trail.push(contribution);
            }
        }
    }

    totals
        .into_iter()
        .map(|(id, total)| {
            let contributions = trails.remove(&id).unwrap_or_default();
            (
                id,
                BrokerageScore {
                    raw: total.max(0),
                    contributions,
                },
            )
        })
        .collect()
}

fn budget_contribution(entry: &Brokerage, budget: u32) -> ScoreContribution {
    if entry.min_deposit <= budget {
        ScoreContribution {
            dimension: Dimension::Budget,
            points: BUDGET_BONUS,
            phrase: "no minimum deposit hurdle for your budget".to_string(),
        }
    } else {
        ScoreContribution {
            dimension: Dimension::Budget,
            points: -BUDGET_PENALTY,
            phrase: format!("requires ${} minimum deposit", entry.min_deposit),
        }
    }
}

fn account_contribution(
    entry: &Brokerage,
    account: &AccountRecommendation,
) -> Option<ScoreContribution> {
    let category = account.category.compatibility_key();

    if entry.excluded_accounts.contains(&category) {
        return Some(ScoreContribution {
            dimension: Dimension::AccountCompatibility,
            points: -ACCOUNT_EXCLUSION_PENALTY,
            phrase: format!("does not support {} accounts", category.label()),
        });
    }

    if entry.supported_accounts.contains(&category) {
        return Some(ScoreContribution {
            dimension: Dimension::AccountCompatibility,
            points: ACCOUNT_SUPPORT_BONUS,
            phrase: format!("supports {} accounts", category.label()),
        });
    }

    None
}
