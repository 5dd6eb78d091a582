use crate::domain::herd::Herd;
use crate::domain::model::{Animal, AnimalId, Family};
use crate::utils::error::{HerdError, Result};

fn same_parent(a: &Option<AnimalId>, b: &Option<AnimalId>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

fn shares_parent(animal: &Animal, other: &Animal) -> bool {
    same_parent(&animal.mother, &other.mother) || same_parent(&animal.father, &other.father)
}

/// Direct parents, siblings and offspring of `id`. Parent references
/// that point outside the herd resolve to `None`.
pub fn family(herd: &Herd, id: &AnimalId) -> Result<Family> {
    let animal = herd.get(id).ok_or_else(|| HerdError::not_found("Animal"))?;

    let resolve = |parent: &Option<AnimalId>| parent.as_ref().and_then(|p| herd.get(p)).cloned();

    let siblings = herd
        .iter()
        .filter(|other| other.id != animal.id && shares_parent(animal, other))
        .cloned()
        .collect();

    Ok(Family {
        animal: animal.clone(),
        mother: resolve(&animal.mother),
        father: resolve(&animal.father),
        siblings,
        offspring: herd.offspring_of(&animal.id).cloned().collect(),
    })
}
