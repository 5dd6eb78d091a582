use crate::core::age::is_breeding_age;
use crate::domain::constants::litter_size;
use crate::domain::herd::Herd;
use crate::domain::model::{Animal, AnimalId, BreedingStats, Fertility, Gender};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

fn can_breed(animal: &Animal, now: DateTime<Utc>) -> bool {
    let available = match animal.gender {
        Gender::Male => true,
        Gender::Female => !animal.is_pregnant,
    };
    available && animal.is_healthy() && is_breeding_age(animal, now)
}

/// Rounds half up on the tenths digit.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn compute_stats(herd: &Herd, now: DateTime<Utc>) -> BreedingStats {
    let dams: HashSet<&AnimalId> = herd.iter().filter_map(|a| a.mother.as_ref()).collect();
    let sires: HashSet<&AnimalId> = herd.iter().filter_map(|a| a.father.as_ref()).collect();

    let mut stats = BreedingStats::default();
    let mut growth_potential = 0.0;

    for animal in herd.iter() {
        let breedable = can_breed(animal, now);
        match animal.gender {
            Gender::Male => {
                stats.total_males += 1;
                if sires.contains(&animal.id) {
                    stats.males_with_offspring += 1;
                }
                if breedable {
                    stats.breeding_age_males += 1;
                }
            }
            Gender::Female => {
                stats.total_females += 1;
                if dams.contains(&animal.id) {
                    stats.females_with_offspring += 1;
                }
                if breedable {
                    stats.breeding_age_females += 1;
                    growth_potential += litter_size(Fertility::resolve(animal.fertility));
                }
            }
        }
    }

    stats.total_pairs = stats.breeding_age_males * stats.breeding_age_females;
    stats.growth_potential = round_to_tenth(growth_potential);
    stats
}
