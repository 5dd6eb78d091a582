//! Pairwise breeding compatibility.
//!
//! The evaluator runs every rule in [`RULES`] in order and folds the
//! outcomes into a [`Verdict`]. Rules never short-circuit: a pair that is
//! already blocked still collects the reasons of later rules, and later
//! soft adjustments still move its score.

use crate::core::age::age_in_months;
use crate::domain::constants::{litter_size, min_breeding_age_months, BASE_SCORE, HEALTH_PENALTY};
use crate::domain::model::{Animal, Fertility, Gender, Recommendation, Verdict};
use chrono::{DateTime, Utc};

/// What a single rule decided about the pair.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// Forces the pair incompatible and sets the score to exactly zero.
    Block(String),
    /// Moves the score by `delta` without touching compatibility.
    Adjust { delta: i32, reason: String },
}

/// Everything the rules look at, resolved once per pair.
pub struct PairContext<'a> {
    pub first: &'a Animal,
    pub second: &'a Animal,
    pub now: DateTime<Utc>,
    pub fertility1: Fertility,
    pub fertility2: Fertility,
    pub expected_litter_size: f64,
}

impl<'a> PairContext<'a> {
    pub fn new(first: &'a Animal, second: &'a Animal, now: DateTime<Utc>) -> Self {
        let fertility1 = Fertility::resolve(first.fertility);
        let fertility2 = Fertility::resolve(second.fertility);
        let female_fertility = if first.gender == Gender::Female {
            fertility1
        } else {
            fertility2
        };

        Self {
            first,
            second,
            now,
            fertility1,
            fertility2,
            expected_litter_size: litter_size(female_fertility),
        }
    }

    fn both(&self) -> [&'a Animal; 2] {
        [self.first, self.second]
    }
}

pub type Rule = fn(&PairContext<'_>) -> Vec<RuleOutcome>;

/// Evaluation order matters: it fixes both the reason order and which
/// assignment to the score lands last.
pub const RULES: [Rule; 7] = [
    parent_child,
    maternal_siblings,
    paternal_siblings,
    breeding_age,
    fertility_pairing,
    health,
    pregnancy,
];

fn parent_child(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    if pair.first.has_parent(&pair.second.id) || pair.second.has_parent(&pair.first.id) {
        vec![RuleOutcome::Block("Blocked: parent-child relationship".to_string())]
    } else {
        Vec::new()
    }
}

fn maternal_siblings(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    match (&pair.first.mother, &pair.second.mother) {
        (Some(a), Some(b)) if a == b => {
            vec![RuleOutcome::Block("Blocked: siblings (same mother)".to_string())]
        }
        _ => Vec::new(),
    }
}

fn paternal_siblings(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    match (&pair.first.father, &pair.second.father) {
        (Some(a), Some(b)) if a == b => {
            vec![RuleOutcome::Block("Blocked: siblings (same father)".to_string())]
        }
        _ => Vec::new(),
    }
}

fn breeding_age(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    pair.both()
        .into_iter()
        .filter(|animal| {
            age_in_months(animal.birth_date, pair.now) < min_breeding_age_months(animal.gender)
        })
        .map(|animal| {
            RuleOutcome::Block(format!("{} is too young for breeding", animal.tag_number))
        })
        .collect()
}

fn fertility_pairing(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    use Fertility::{BPlus, AA, BB};

    let litter = pair.expected_litter_size;
    let adjustment = match (pair.fertility1, pair.fertility2) {
        (BB, BB) => Some((30, format!("Excellent genetics: expected {} lambs per pregnancy", litter))),
        (BB, BPlus) | (BPlus, BB) => {
            Some((25, format!("Very good genetics: expected {} lambs per pregnancy", litter)))
        }
        (BPlus, BPlus) => Some((18, format!("Good genetics: expected {} lambs per pregnancy", litter))),
        (BPlus, AA) | (AA, BPlus) => {
            Some((8, format!("Average genetics: expected {} lambs per pregnancy", litter)))
        }
        (AA, AA) => Some((-15, format!("Basic genetics: expected {} lambs", litter))),
        (BB, AA) | (AA, BB) => None,
    };

    adjustment
        .map(|(delta, reason)| vec![RuleOutcome::Adjust { delta, reason }])
        .unwrap_or_default()
}

fn health(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    pair.both()
        .into_iter()
        .filter(|animal| !animal.is_healthy())
        .map(|animal| RuleOutcome::Adjust {
            delta: -HEALTH_PENALTY,
            reason: format!("{} needs health attention", animal.tag_number),
        })
        .collect()
}

fn pregnancy(pair: &PairContext<'_>) -> Vec<RuleOutcome> {
    if pair.second.is_pregnant {
        vec![RuleOutcome::Block("Blocked: female is already pregnant".to_string())]
    } else {
        Vec::new()
    }
}

#[derive(Debug)]
struct Tally {
    is_compatible: bool,
    score: i32,
    reasons: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            is_compatible: true,
            score: BASE_SCORE,
            reasons: Vec::new(),
        }
    }

    fn apply(&mut self, outcome: RuleOutcome) {
        match outcome {
            RuleOutcome::Block(reason) => {
                self.is_compatible = false;
                self.score = 0;
                self.reasons.push(reason);
            }
            RuleOutcome::Adjust { delta, reason } => {
                self.score = (self.score + delta).max(0);
                self.reasons.push(reason);
            }
        }
    }
}

/// Scores `second` as a mate for `first`.
///
/// Only `second` is checked for an ongoing pregnancy, so callers pass the
/// animal being advised on first and the candidate second.
pub fn evaluate(first: &Animal, second: &Animal, now: DateTime<Utc>) -> Verdict {
    let pair = PairContext::new(first, second, now);

    let mut tally = Tally::new();
    for rule in RULES {
        for outcome in rule(&pair) {
            tally.apply(outcome);
        }
    }

    if tally.reasons.is_empty() {
        tally.reasons.push("Not related".to_string());
        tally.reasons.push("Both healthy".to_string());
    }

    let score = tally.score.max(0);
    Verdict {
        is_compatible: tally.is_compatible,
        score,
        reasons: tally.reasons,
        recommendation: Recommendation::from_score(score, tally.is_compatible),
        fertility1: pair.fertility1,
        fertility2: pair.fertility2,
        expected_litter_size: pair.expected_litter_size,
    }
}
