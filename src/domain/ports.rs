use crate::domain::model::{Animal, OwnerId};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of owner-scoped herd snapshots.
#[async_trait]
pub trait HerdStore: Send + Sync {
    /// Every animal belonging to `owner`, unfiltered.
    async fn fetch_herd(&self, owner: &OwnerId) -> Result<Vec<Animal>>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for reproducible ages.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
