use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{Brokerage, BrokerageCatalog, PlatformComplexity};
use super::profile::Dimension;

/// A single point contribution a rule grants to one brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub brokerage: String,
    pub points: i32,
}

/// Static `(dimension, option) -> [(brokerage, points)]` mapping with the
/// templated phrase the explainer emits when the rule fires. This table is
/// the single source of truth for why a brokerage scores the way it does;
/// adding a brokerage or an option is a data change, not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub dimension: Dimension,
    pub option: String,
    pub phrase: String,
    pub awards: Vec<Award>,
}

/// Load-once rule table with per-call lookups by `(dimension, option)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<ScoringRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Lookup a rule; a miss means the pair has no coverage and contributes
    /// nothing, which is how unknown option ids degrade to no-ops.
    pub fn lookup(&self, dimension: Dimension, option: &str) -> Option<&ScoringRule> {
        self.rules
            .iter()
            .find(|rule| rule.dimension == dimension && rule.option == option)
    }

    /// Maximum points a single brokerage could theoretically accumulate from
    /// the table: the best option per single-select dimension, every option
    /// stacked for multi-select dimensions. Computed once at engine
    /// construction, not per call.
    pub fn theoretical_max(&self) -> i32 {
        let mut per_dimension: BTreeMap<Dimension, i32> = BTreeMap::new();

        for rule in &self.rules {
            let best = rule
                .awards
                .iter()
                .map(|award| award.points)
                .filter(|points| *points > 0)
                .max()
                .unwrap_or(0);

            let slot = per_dimension.entry(rule.dimension).or_insert(0);
            if rule.dimension.is_multi_select() {
                *slot += best;
            } else {
                *slot = (*slot).max(best);
            }
        }

        per_dimension.values().sum()
    }

    /// The built-in rule table. Preference and goal rows are written out
    /// directly; capability rows (experience fit, research depth, support
    /// availability, platform feel) are derived from the catalog's ratings so
    /// the two data sets cannot drift apart.
    pub fn standard(catalog: &BrokerageCatalog) -> Self {
        let mut rules = Vec::new();

        rules.extend(capability_rule(
            catalog,
            Dimension::Experience,
            "beginner",
            "interface suited to beginners",
            12,
            |b| b.platform_complexity == PlatformComplexity::Beginner,
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::Experience,
            "intermediate",
            "balanced platform for developing investors",
            8,
            |b| b.platform_complexity == PlatformComplexity::Intermediate,
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::Experience,
            "advanced",
            "professional-grade tooling and order types",
            12,
            |b| b.platform_complexity == PlatformComplexity::Advanced,
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::ResearchImportance,
            "high",
            "deep research and screening tools",
            10,
            |b| b.research_tools >= 4,
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::SupportImportance,
            "high",
            "round-the-clock customer support",
            10,
            |b| b.support.contains("24/7"),
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::PlatformPreference,
            "simple",
            "clean, streamlined interface",
            8,
            |b| b.ease_of_use >= 4,
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::PlatformPreference,
            "professional",
            "configurable professional workspace",
            8,
            |b| b.platform_complexity == PlatformComplexity::Advanced,
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::TradingFrequency,
            "daily",
            "low margin rates for frequent trading",
            8,
            |b| b.specialties.contains("low_margin_rates"),
        ));
        rules.extend(capability_rule(
            catalog,
            Dimension::TradingFrequency,
            "weekly",
            "responsive mobile trading apps",
            4,
            |b| b.mobile_experience >= 4,
        ));

        rules.push(literal_rule(
            Dimension::RiskTolerance,
            "aggressive",
            "supports margin and derivative strategies",
            &[("meridian", 6), ("pioneer", 6)],
        ));
        rules.push(literal_rule(
            Dimension::RiskTolerance,
            "conservative",
            "steady, long-term oriented offerings",
            &[("harborstone", 6), ("fernwood", 4)],
        ));
        rules.push(literal_rule(
            Dimension::TimeHorizon,
            "long_term",
            "strong retirement planning resources",
            &[("harborstone", 6), ("atlasline", 4)],
        ));
        rules.push(literal_rule(
            Dimension::PrimaryGoal,
            "retirement",
            "retirement-focused accounts and guidance",
            &[("harborstone", 8), ("atlasline", 4)],
        ));
        rules.push(literal_rule(
            Dimension::PrimaryGoal,
            "active_trading",
            "built for active traders",
            &[("meridian", 6), ("pioneer", 6)],
        ));
        rules.push(literal_rule(
            Dimension::AssetClasses,
            "crypto",
            "offers crypto trading",
            &[("summit", 8), ("cobalt", 8)],
        ));
        rules.push(literal_rule(
            Dimension::AssetClasses,
            "international",
            "access to international markets",
            &[("lighthouse", 8), ("meridian", 6), ("atlasline", 6)],
        ));
        rules.push(literal_rule(
            Dimension::AssetClasses,
            "options",
            "full options trading",
            &[("meridian", 8), ("pioneer", 8)],
        ));
        rules.push(literal_rule(
            Dimension::AssetClasses,
            "fractional_shares",
            "fractional share investing",
            &[("summit", 6), ("cobalt", 6), ("fernwood", 6)],
        ));
        rules.push(literal_rule(
            Dimension::SpecialFeatures,
            "esg_screening",
            "ESG screening tools",
            &[("fernwood", 6), ("atlasline", 6)],
        ));
        rules.push(literal_rule(
            Dimension::SpecialFeatures,
            "advisor_access",
            "access to human advisors",
            &[("harborstone", 8)],
        ));
        rules.push(literal_rule(
            Dimension::Priorities,
            "low_fees",
            "low-cost fee structure",
            &[("cobalt", 6), ("fernwood", 6)],
        ));
        rules.push(literal_rule(
            Dimension::Priorities,
            "education",
            "strong investor education library",
            &[("summit", 6), ("harborstone", 4)],
        ));

        Self::new(rules)
    }
}

fn capability_rule(
    catalog: &BrokerageCatalog,
    dimension: Dimension,
    option: &str,
    phrase: &str,
    points: i32,
    matches: impl Fn(&Brokerage) -> bool,
) -> Option<ScoringRule> {
    let awards: Vec<Award> = catalog
        .entries()
        .iter()
        .filter(|entry| matches(entry))
        .map(|entry| Award {
            brokerage: entry.id.clone(),
            points,
        })
        .collect();

    if awards.is_empty() {
        return None;
    }

    Some(ScoringRule {
        dimension,
        option: option.to_string(),
        phrase: phrase.to_string(),
        awards,
    })
}

fn literal_rule(
    dimension: Dimension,
    option: &str,
    phrase: &str,
    awards: &[(&str, i32)],
) -> ScoringRule {
    ScoringRule {
        dimension,
        option: option.to_string(),
        phrase: phrase.to_string(),
        awards: awards
            .iter()
            .map(|(brokerage, points)| Award {
                brokerage: brokerage.to_string(),
                points: *points,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_table() -> RuleTable {
        RuleTable::standard(&BrokerageCatalog::standard())
    }

    #[test]
    fn lookup_misses_return_none() {
        let table = standard_table();
        assert!(table.lookup(Dimension::Experience, "wizard").is_none());
        assert!(table.lookup(Dimension::Priorities, "no_such_priority").is_none());
    }

    #[test]
    fn beginner_rule_covers_exactly_the_beginner_platforms() {
        let catalog = BrokerageCatalog::standard();
        let table = RuleTable::standard(&catalog);
        let rule = table
            .lookup(Dimension::Experience, "beginner")
            .expect("beginner rule exists");

        for award in &rule.awards {
            let entry = catalog.get(&award.brokerage).expect("award targets catalog entry");
            assert_eq!(entry.platform_complexity, PlatformComplexity::Beginner);
            assert!(award.points > 0);
        }
    }

    #[test]
    fn every_literal_award_targets_a_cataloged_brokerage() {
        let catalog = BrokerageCatalog::standard();
        let table = RuleTable::standard(&catalog);
        for rule in table.rules() {
            for award in &rule.awards {
                assert!(
                    catalog.contains(&award.brokerage),
                    "rule ({:?}, {}) references unknown brokerage {}",
                    rule.dimension,
                    rule.option,
                    award.brokerage
                );
            }
        }
    }

    #[test]
    fn theoretical_max_takes_best_option_per_single_select_dimension() {
        let rules = vec![
            literal_rule(Dimension::Experience, "beginner", "a", &[("x", 12)]),
            literal_rule(Dimension::Experience, "advanced", "b", &[("y", 9)]),
            literal_rule(Dimension::AssetClasses, "crypto", "c", &[("x", 8)]),
            literal_rule(Dimension::AssetClasses, "options", "d", &[("y", 8), ("x", -5)]),
        ];
        let table = RuleTable::new(rules);

        // 12 for the best experience option, 8 + 8 for the stacked asset classes.
        assert_eq!(table.theoretical_max(), 28);
    }

    #[test]
    fn standard_table_has_a_positive_ceiling() {
        assert!(standard_table().theoretical_max() > 0);
    }
}
