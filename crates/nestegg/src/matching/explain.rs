use std::cmp::Reverse;

use super::scorer::BrokerageScore;

/// Combined cap on surfaced reason strings per match.
pub(crate) const MAX_REASONS: usize = 4;

/// Synthesized explanation for one match: positive reasons and warnings in
/// separate buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Explanation {
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Turn the fired contributions into display text.
///
/// Contributions are walked in descending point magnitude. Warnings always
/// surface, even past the cap; positive reasons fill whatever remains of the
/// four slots after warnings have claimed theirs.
pub(crate) fn explain(score: &BrokerageScore) -> Explanation {
    let mut ordered: Vec<_> = score.contributions.iter().collect();
    ordered.sort_by_key(|contribution| Reverse(contribution.points.abs()));

    let warnings: Vec<String> = ordered
        .iter()
        .filter(|contribution| contribution.is_warning())
        .map(|contribution| contribution.phrase.clone())
        .collect();

    let reason_slots = MAX_REASONS.saturating_sub(warnings.len());
    let reasons: Vec<String> = ordered
        .iter()
        .filter(|contribution| !contribution.is_warning())
        .take(reason_slots)
        .map(|contribution| contribution.phrase.clone())
        .collect();

    Explanation { reasons, warnings }
}
