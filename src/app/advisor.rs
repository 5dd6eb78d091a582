use crate::core::query::HerdQuery;
use crate::core::{family, matching, query, stats};
use crate::domain::herd::Herd;
use crate::domain::model::{Animal, AnimalId, BreedingStats, CompatibilityResult, Family, OwnerId};
use crate::domain::ports::{Clock, HerdStore};
use crate::utils::error::Result;

/// Breeding advice for one owner's herd.
///
/// Every call does a single bulk read from the store and then runs the
/// pure core over that snapshot; nothing is cached between calls.
pub struct BreedingAdvisor<S: HerdStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: HerdStore, C: Clock> BreedingAdvisor<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    async fn snapshot(&self, owner: &OwnerId) -> Result<Herd> {
        let animals = self.store.fetch_herd(owner).await?;
        tracing::debug!("Fetched {} animals for owner {}", animals.len(), owner);
        Ok(Herd::new(animals))
    }

    pub async fn valid_matches(
        &self,
        owner: &OwnerId,
        animal_id: &AnimalId,
    ) -> Result<Vec<CompatibilityResult>> {
        let herd = self.snapshot(owner).await?;
        let matches = matching::rank_matches(animal_id, &herd, self.clock.now())
            .inspect_err(|e| tracing::warn!("Match ranking for {} failed: {}", animal_id, e))?;

        let compatible = matches.iter().filter(|m| m.verdict.is_compatible).count();
        tracing::info!(
            "Ranked {} candidates for {} ({} compatible)",
            matches.len(),
            animal_id,
            compatible
        );
        for result in &matches {
            tracing::debug!(
                "{} -> {}: score {} ({})",
                animal_id,
                result.animal.id,
                result.verdict.score,
                result.verdict.recommendation
            );
        }

        Ok(matches)
    }

    pub async fn breeding_stats(&self, owner: &OwnerId) -> Result<BreedingStats> {
        let herd = self.snapshot(owner).await?;
        let stats = stats::compute_stats(&herd, self.clock.now());
        tracing::info!(
            "Herd of {}: {} breeding rams, {} breeding ewes, growth potential {}",
            herd.len(),
            stats.breeding_age_males,
            stats.breeding_age_females,
            stats.growth_potential
        );
        Ok(stats)
    }

    pub async fn family(&self, owner: &OwnerId, animal_id: &AnimalId) -> Result<Family> {
        let herd = self.snapshot(owner).await?;
        let found = family::family(&herd, animal_id)?;
        tracing::info!(
            "Family of {}: {} siblings, {} offspring",
            animal_id,
            found.siblings.len(),
            found.offspring.len()
        );
        Ok(found)
    }

    pub async fn list_animals(&self, owner: &OwnerId, filter: &HerdQuery) -> Result<Vec<Animal>> {
        let herd = self.snapshot(owner).await?;
        let animals = query::list(&herd, filter, self.clock.now())?;
        tracing::info!("Listed {} of {} animals", animals.len(), herd.len());
        Ok(animals)
    }
}
