use crate::domain::model::{Animal, OwnerId};
use crate::domain::ports::HerdStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Herd snapshots held in memory, keyed by owner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHerdStore {
    herds: HashMap<OwnerId, Vec<Animal>>,
}

impl InMemoryHerdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `animals` by their `owner` field.
    pub fn from_animals(animals: impl IntoIterator<Item = Animal>) -> Self {
        let mut store = Self::new();
        for animal in animals {
            store.herds.entry(animal.owner.clone()).or_default().push(animal);
        }
        store
    }

    pub fn insert(&mut self, animal: Animal) {
        self.herds.entry(animal.owner.clone()).or_default().push(animal);
    }
}

#[async_trait]
impl HerdStore for InMemoryHerdStore {
    async fn fetch_herd(&self, owner: &OwnerId) -> Result<Vec<Animal>> {
        Ok(self.herds.get(owner).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{ewe, ram};

    #[test]
    fn test_herds_are_owner_scoped() {
        let mut store = InMemoryHerdStore::from_animals(vec![ewe("e1", 20.0)]);
        let mut foreign = ram("r1", 20.0);
        foreign.owner = OwnerId::from("owner-2");
        store.insert(foreign);

        let mine = tokio_test::block_on(store.fetch_herd(&OwnerId::from("owner-1"))).unwrap();
        let theirs = tokio_test::block_on(store.fetch_herd(&OwnerId::from("owner-2"))).unwrap();
        let nobody = tokio_test::block_on(store.fetch_herd(&OwnerId::from("owner-3"))).unwrap();

        assert_eq!(mine.len(), 1);
        assert_eq!(theirs[0].id.0, "r1");
        assert!(nobody.is_empty());
    }
}
