pub mod age;
pub mod compatibility;
pub mod family;
pub mod matching;
pub mod query;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use crate::domain::herd::Herd;
pub use crate::domain::model::{Animal, AnimalId, BreedingStats, CompatibilityResult, Verdict};
pub use crate::utils::error::Result;
