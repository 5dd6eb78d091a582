use crate::domain::model::{Animal, OwnerId};
use crate::domain::ports::HerdStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads herd snapshots from a JSON file holding an array of animals.
///
/// The file is re-read on every fetch so each request sees the current
/// snapshot. Animals of other owners are dropped after parsing.
#[derive(Debug, Clone)]
pub struct JsonHerdStore {
    path: PathBuf,
}

impl JsonHerdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HerdStore for JsonHerdStore {
    async fn fetch_herd(&self, owner: &OwnerId) -> Result<Vec<Animal>> {
        tracing::debug!("Reading herd file: {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        let animals: Vec<Animal> = serde_json::from_slice(&data)?;
        let total = animals.len();

        let herd: Vec<Animal> = animals.into_iter().filter(|a| &a.owner == owner).collect();
        tracing::debug!(
            "Loaded {} of {} animals for owner {}",
            herd.len(),
            total,
            owner
        );

        Ok(herd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HerdError;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_io_error() {
        let store = JsonHerdStore::new("does/not/exist.json");
        let result = tokio_test::block_on(store.fetch_herd(&OwnerId::from("o1")));
        assert!(matches!(result, Err(HerdError::IoError(_))));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let store = JsonHerdStore::new(file.path());
        let result = tokio_test::block_on(store.fetch_herd(&OwnerId::from("o1")));
        assert!(matches!(result, Err(HerdError::SerializationError(_))));
    }

    #[test]
    fn test_malformed_fertility_keeps_herd_readable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"id":"e1","owner":"o1","tagNumber":"F0001","gender":"female","birthDate":"2022-01-01","fertility":3},
                {"id":"r1","owner":"o1","tagNumber":"M0001","gender":"male","birthDate":"2022-01-01","fertility":"BB"}
            ]"#,
        )
        .unwrap();

        let store = JsonHerdStore::new(file.path());
        let herd = tokio_test::block_on(store.fetch_herd(&OwnerId::from("o1"))).unwrap();
        assert_eq!(herd.len(), 2);
        assert_eq!(herd[0].fertility, None);
        assert_eq!(herd[1].fertility, Some(crate::domain::model::Fertility::BB));
    }
}
