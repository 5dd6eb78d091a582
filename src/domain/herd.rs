use crate::domain::model::{Animal, AnimalId, Gender};
use std::collections::HashMap;

/// An owner's full herd as fetched in one read.
///
/// Parent references stay plain ids; they are resolved against `index`
/// on demand, one hop at a time.
#[derive(Debug, Clone, Default)]
pub struct Herd {
    animals: Vec<Animal>,
    index: HashMap<AnimalId, usize>,
}

impl Herd {
    pub fn new(animals: Vec<Animal>) -> Self {
        let index = animals
            .iter()
            .enumerate()
            .map(|(position, animal)| (animal.id.clone(), position))
            .collect();
        Self { animals, index }
    }

    pub fn get(&self, id: &AnimalId) -> Option<&Animal> {
        self.index.get(id).map(|&position| &self.animals[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    pub fn of_gender(&self, gender: Gender) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(move |animal| animal.gender == gender)
    }

    /// Animals that list `id` as their mother or father.
    pub fn offspring_of<'a>(&'a self, id: &'a AnimalId) -> impl Iterator<Item = &'a Animal> + 'a {
        self.animals.iter().filter(move |animal| animal.has_parent(id))
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}
