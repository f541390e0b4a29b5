use super::common::*;
use crate::matching::classifier::classify;
use crate::matching::profile::{Dimension, RiskTolerance};
use crate::matching::rules::{Award, RuleTable, ScoringRule};
use crate::matching::scorer::score_catalog;
use crate::matching::{AccountCategory, BrokerageCatalog};

#[test]
fn budget_mismatch_penalizes_and_warns() {
    // Scenario: a $50 budget clears Summit's $0 minimum but not Meridian's $500.
    let mut profile = base_profile();
    profile.budget = Some(50);
    let catalog = BrokerageCatalog::standard();
    let account = classify(&profile);

    let scores = score_catalog(&profile, &catalog, &standard_table(), &account);

    let summit = &scores["summit"];
    let summit_budget = summit
        .contributions
        .iter()
        .find(|c| c.dimension == Dimension::Budget)
        .expect("budget contribution recorded");
    assert!(summit_budget.points > 0);
    assert!(!summit_budget.is_warning());

    let meridian = &scores["meridian"];
    let meridian_budget = meridian
        .contributions
        .iter()
        .find(|c| c.dimension == Dimension::Budget)
        .expect("budget contribution recorded");
    assert!(meridian_budget.is_warning());
    assert!(meridian_budget.phrase.contains("requires $500 minimum"));
}

#[test]
fn excluded_account_category_applies_the_large_penalty() {
    // A Roth classification must penalize brokerages that exclude Roth IRAs,
    // no matter how well they score elsewhere.
    let profile = young_saver_profile();
    let catalog = BrokerageCatalog::standard();
    let account = classify(&profile);
    assert_eq!(account.category, AccountCategory::RothIra);

    let scores = score_catalog(&profile, &catalog, &standard_table(), &account);

    let meridian = &scores["meridian"];
    let compat = meridian
        .contributions
        .iter()
        .find(|c| c.dimension == Dimension::AccountCompatibility)
        .expect("compatibility contribution recorded");
    assert!(compat.is_warning());
    assert!(compat.phrase.contains("does not support Roth IRA accounts"));

    let summit = &scores["summit"];
    let support = summit
        .contributions
        .iter()
        .find(|c| c.dimension == Dimension::AccountCompatibility)
        .expect("support contribution recorded");
    assert!(support.points > 0);
}

#[test]
fn raw_scores_never_go_negative() {
    let mut profile = young_saver_profile();
    profile.budget = Some(0);
    let catalog = BrokerageCatalog::standard();
    let account = classify(&profile);

    let scores = score_catalog(&profile, &catalog, &standard_table(), &account);

    // Pioneer misses the budget, excludes Roth IRAs, and earns nothing from a
    // beginner profile; the floor still holds it at zero.
    assert_eq!(scores["pioneer"].raw, 0);
    for score in scores.values() {
        assert!(score.raw >= 0);
    }
}

#[test]
fn changing_one_dimension_touches_only_its_rule_contributions() {
    let baseline = base_profile();
    let mut adjusted = base_profile();
    adjusted.risk_tolerance = Some(RiskTolerance::Aggressive);

    let catalog = BrokerageCatalog::standard();
    let table = standard_table();
    let account = classify(&baseline);
    assert_eq!(account, classify(&adjusted));

    let before = score_catalog(&baseline, &catalog, &table, &account);
    let after = score_catalog(&adjusted, &catalog, &table, &account);

    // Summit has no aggressive-risk award, so its score is untouched.
    assert_eq!(before["summit"], after["summit"]);

    // Meridian's delta is exactly its aggressive-risk award.
    let rule = table
        .lookup(Dimension::RiskTolerance, "aggressive")
        .expect("aggressive rule exists");
    let meridian_award = rule
        .awards
        .iter()
        .find(|award| award.brokerage == "meridian")
        .expect("meridian awarded");
    assert_eq!(after["meridian"].raw - before["meridian"].raw, meridian_award.points);
}

#[test]
fn unrecognized_option_ids_are_no_ops() {
    let baseline = base_profile();
    let mut adjusted = base_profile();
    adjusted.priorities.insert("time_travel".to_string());
    adjusted.asset_classes.insert("beanie_babies".to_string());

    let catalog = BrokerageCatalog::standard();
    let account = classify(&baseline);

    let before = score_catalog(&baseline, &catalog, &standard_table(), &account);
    let after = score_catalog(&adjusted, &catalog, &standard_table(), &account);

    assert_eq!(before, after);
}

#[test]
fn rule_awards_for_unknown_brokerages_are_ignored() {
    let mut profile = base_profile();
    profile.priorities.insert("low_fees".to_string());
    let catalog = BrokerageCatalog::standard();
    let account = classify(&profile);

    let table = RuleTable::new(vec![ScoringRule {
        dimension: Dimension::Priorities,
        option: "low_fees".to_string(),
        phrase: "low-cost fee structure".to_string(),
        awards: vec![
            Award {
                brokerage: "ghost-brokerage".to_string(),
                points: 50,
            },
            Award {
                brokerage: "cobalt".to_string(),
                points: 6,
            },
        ],
    }]);

    let scores = score_catalog(&profile, &catalog, &table, &account);

    assert!(!scores.contains_key("ghost-brokerage"));
    assert!(scores["cobalt"]
        .contributions
        .iter()
        .any(|c| c.dimension == Dimension::Priorities && c.points == 6));
}
