pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{InMemoryHerdStore, JsonHerdStore};
pub use app::BreedingAdvisor;
pub use config::AppConfig;
pub use crate::core::compatibility::evaluate;
pub use crate::core::matching::rank_matches;
pub use crate::core::stats::compute_stats;
pub use domain::herd::Herd;
pub use domain::model::{
    Animal, AnimalId, BreedingStats, CompatibilityResult, Family, Fertility, Gender, HealthStatus,
    OwnerId, Recommendation, Verdict,
};
pub use domain::ports::{Clock, FixedClock, HerdStore, SystemClock};
pub use utils::error::{HerdError, Result};
