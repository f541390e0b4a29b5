use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::classifier::AccountCategory;

/// Platform classification mirrored against the questionnaire's experience
/// levels when deriving capability rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformComplexity {
    Beginner,
    Intermediate,
    Advanced,
}

/// One catalog entry: a fictional brokerage being ranked. Read-only after
/// load; capability ratings use a fixed 1-5 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brokerage {
    pub id: String,
    pub name: String,
    pub ease_of_use: u8,
    pub research_tools: u8,
    pub mobile_experience: u8,
    /// Minimum deposit in whole currency units; 0 means no minimum.
    pub min_deposit: u32,
    pub platform_complexity: PlatformComplexity,
    /// Free-text support descriptor, e.g. "24/7 phone and chat".
    pub support: String,
    pub specialties: BTreeSet<String>,
    pub supported_accounts: BTreeSet<AccountCategory>,
    pub excluded_accounts: BTreeSet<AccountCategory>,
}

/// Process-wide, load-once candidate catalog. Declaration order doubles as the
/// ranking tie-break order, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerageCatalog {
    entries: Vec<Brokerage>,
}

impl BrokerageCatalog {
    pub fn new(entries: Vec<Brokerage>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Brokerage] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Brokerage> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in catalog the app ships with.
    pub fn standard() -> Self {
        Self::new(vec![
            Brokerage {
                id: "summit".to_string(),
                name: "Summit Invest".to_string(),
                ease_of_use: 5,
                research_tools: 3,
                mobile_experience: 4,
                min_deposit: 0,
                platform_complexity: PlatformComplexity::Beginner,
                support: "24/7 phone and chat".to_string(),
                specialties: tags(&["fractional_shares", "crypto"]),
                supported_accounts: accounts(&[
                    AccountCategory::Taxable,
                    AccountCategory::TraditionalIra,
                    AccountCategory::RothIra,
                ]),
                excluded_accounts: BTreeSet::new(),
            },
            Brokerage {
                id: "lighthouse".to_string(),
                name: "Lighthouse Securities".to_string(),
                ease_of_use: 4,
                research_tools: 5,
                mobile_experience: 3,
                min_deposit: 0,
                platform_complexity: PlatformComplexity::Intermediate,
                support: "24/7 chat".to_string(),
                specialties: tags(&["international_markets", "research_depth"]),
                supported_accounts: accounts(&[
                    AccountCategory::Taxable,
                    AccountCategory::TraditionalIra,
                    AccountCategory::RothIra,
                ]),
                excluded_accounts: BTreeSet::new(),
            },
            Brokerage {
                id: "meridian".to_string(),
                name: "Meridian Trading".to_string(),
                ease_of_use: 3,
                research_tools: 5,
                mobile_experience: 3,
                min_deposit: 500,
                platform_complexity: PlatformComplexity::Advanced,
                support: "weekday phone desk".to_string(),
                specialties: tags(&["options", "low_margin_rates", "international_markets"]),
                supported_accounts: accounts(&[AccountCategory::Taxable]),
                excluded_accounts: accounts(&[AccountCategory::RothIra]),
            },
            Brokerage {
                id: "cobalt".to_string(),
                name: "Cobalt Markets".to_string(),
                ease_of_use: 4,
                research_tools: 2,
                mobile_experience: 5,
                min_deposit: 0,
                platform_complexity: PlatformComplexity::Beginner,
                support: "chat and email".to_string(),
                specialties: tags(&["crypto", "fractional_shares"]),
                supported_accounts: accounts(&[AccountCategory::Taxable, AccountCategory::RothIra]),
                excluded_accounts: BTreeSet::new(),
            },
            Brokerage {
                id: "harborstone".to_string(),
                name: "Harborstone Wealth".to_string(),
                ease_of_use: 3,
                research_tools: 4,
                mobile_experience: 2,
                min_deposit: 1000,
                platform_complexity: PlatformComplexity::Intermediate,
                support: "24/7 phone".to_string(),
                specialties: tags(&["retirement_planning", "advisor_access"]),
                supported_accounts: accounts(&[
                    AccountCategory::TraditionalIra,
                    AccountCategory::RothIra,
                ]),
                excluded_accounts: BTreeSet::new(),
            },
            Brokerage {
                id: "pioneer".to_string(),
                name: "Pioneer Futures".to_string(),
                ease_of_use: 2,
                research_tools: 5,
                mobile_experience: 3,
                min_deposit: 2000,
                platform_complexity: PlatformComplexity::Advanced,
                support: "dedicated trade desk".to_string(),
                specialties: tags(&["options", "futures", "low_margin_rates"]),
                supported_accounts: accounts(&[AccountCategory::Taxable]),
                excluded_accounts: accounts(&[
                    AccountCategory::TraditionalIra,
                    AccountCategory::RothIra,
                ]),
            },
            Brokerage {
                id: "fernwood".to_string(),
                name: "Fernwood Savings".to_string(),
                ease_of_use: 5,
                research_tools: 2,
                mobile_experience: 5,
                min_deposit: 0,
                platform_complexity: PlatformComplexity::Beginner,
                support: "email only".to_string(),
                specialties: tags(&["fractional_shares", "esg_screening"]),
                supported_accounts: accounts(&[AccountCategory::Taxable, AccountCategory::RothIra]),
                excluded_accounts: BTreeSet::new(),
            },
            Brokerage {
                id: "atlasline".to_string(),
                name: "Atlasline Brokerage".to_string(),
                ease_of_use: 3,
                research_tools: 4,
                mobile_experience: 4,
                min_deposit: 100,
                platform_complexity: PlatformComplexity::Intermediate,
                support: "24/7 chat".to_string(),
                specialties: tags(&["international_markets", "esg_screening"]),
                supported_accounts: accounts(&[
                    AccountCategory::Taxable,
                    AccountCategory::TraditionalIra,
                    AccountCategory::RothIra,
                ]),
                excluded_accounts: BTreeSet::new(),
            },
        ])
    }
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn accounts(values: &[AccountCategory]) -> BTreeSet<AccountCategory> {
    values.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_ids_are_unique() {
        let catalog = BrokerageCatalog::standard();
        let mut seen = BTreeSet::new();
        for entry in catalog.entries() {
            assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn ratings_stay_on_the_five_point_scale() {
        for entry in BrokerageCatalog::standard().entries() {
            for rating in [entry.ease_of_use, entry.research_tools, entry.mobile_experience] {
                assert!((1..=5).contains(&rating), "{} rating out of range", entry.id);
            }
        }
    }

    #[test]
    fn no_brokerage_both_supports_and_excludes_a_category() {
        for entry in BrokerageCatalog::standard().entries() {
            assert!(
                entry
                    .supported_accounts
                    .intersection(&entry.excluded_accounts)
                    .next()
                    .is_none(),
                "{} has contradictory account sets",
                entry.id
            );
        }
    }
}
