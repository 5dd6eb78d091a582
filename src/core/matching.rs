use crate::core::age::is_breeding_age;
use crate::core::compatibility::evaluate;
use crate::domain::herd::Herd;
use crate::domain::model::{AnimalId, CompatibilityResult};
use crate::utils::error::{HerdError, Result};
use chrono::{DateTime, Utc};

/// Ranks every eligible mate for `target_id` within `herd`.
///
/// Candidates are the opposite gender, not pregnant and old enough for
/// their own gender. Compatible pairs come first, then higher scores;
/// equal keys keep herd order.
pub fn rank_matches(
    target_id: &AnimalId,
    herd: &Herd,
    now: DateTime<Utc>,
) -> Result<Vec<CompatibilityResult>> {
    let target = herd.get(target_id).ok_or_else(|| HerdError::not_found("Animal"))?;

    let mut matches: Vec<CompatibilityResult> = herd
        .of_gender(target.gender.opposite())
        .filter(|candidate| !candidate.is_pregnant && is_breeding_age(candidate, now))
        .map(|candidate| CompatibilityResult {
            animal: candidate.clone(),
            verdict: evaluate(target, candidate, now),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.verdict
            .is_compatible
            .cmp(&a.verdict.is_compatible)
            .then_with(|| b.verdict.score.cmp(&a.verdict.score))
    });

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{ewe, ram, today, with_fertility};
    use crate::domain::model::{Fertility, HealthStatus};

    fn ids(matches: &[CompatibilityResult]) -> Vec<&str> {
        matches.iter().map(|m| m.animal.id.0.as_str()).collect()
    }

    #[test]
    fn test_unknown_target_is_not_found() {
        let herd = Herd::new(vec![ewe("e1", 30.0)]);
        let err = rank_matches(&AnimalId::from("missing"), &herd, today()).unwrap_err();
        assert!(matches!(err, HerdError::NotFound { .. }));
    }

    #[test]
    fn test_candidates_are_filtered() {
        let mut pregnant = ewe("pregnant", 40.0);
        pregnant.is_pregnant = true;

        let herd = Herd::new(vec![
            ram("target", 30.0),
            ram("other-ram", 30.0),
            ewe("lamb", 6.0),
            pregnant,
            ewe("ewe", 20.0),
        ]);

        let matches = rank_matches(&AnimalId::from("target"), &herd, today()).unwrap();
        assert_eq!(ids(&matches), vec!["ewe"]);
    }

    #[test]
    fn test_ewe_target_uses_ram_minimum_for_candidates() {
        let herd = Herd::new(vec![ewe("target", 30.0), ram("young-ram", 18.0), ram("ram", 20.0)]);
        let matches = rank_matches(&AnimalId::from("target"), &herd, today()).unwrap();
        assert_eq!(ids(&matches), vec!["ram"]);
    }

    #[test]
    fn test_ordering_compatible_first_then_score() {
        let mut sibling = with_fertility(ewe("sibling", 30.0), Some(Fertility::BB));
        sibling.mother = Some(AnimalId::from("dam"));
        let mut target = with_fertility(ram("target", 30.0), Some(Fertility::BB));
        target.mother = Some(AnimalId::from("dam"));

        let mut sick = with_fertility(ewe("sick", 30.0), Some(Fertility::BB));
        sick.health_status = HealthStatus::NeedsAttention;

        let herd = Herd::new(vec![
            target,
            sibling,
            with_fertility(ewe("plain", 30.0), None),
            sick,
            with_fertility(ewe("best", 30.0), Some(Fertility::BB)),
            with_fertility(ewe("best-too", 30.0), Some(Fertility::BB)),
        ]);

        let matches = rank_matches(&AnimalId::from("target"), &herd, today()).unwrap();
        assert_eq!(ids(&matches), vec!["best", "best-too", "sick", "plain", "sibling"]);

        let first_blocked = matches.iter().position(|m| !m.verdict.is_compatible).unwrap();
        assert!(matches[first_blocked..].iter().all(|m| !m.verdict.is_compatible));
        assert!(matches[..first_blocked]
            .windows(2)
            .all(|w| w[0].verdict.score >= w[1].verdict.score));
    }
}
