// Application layer: owner-scoped requests on top of the pure core.

pub mod advisor;
pub mod response;

pub use advisor::BreedingAdvisor;
