use crate::domain::model::{Animal, BreedingStats, CompatibilityResult, Family};
use crate::utils::error::HerdError;
use serde::Serialize;

/// `{ status, results?, data }` success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            results: None,
            data,
        }
    }

    pub fn with_results(mut self, results: usize) -> Self {
        self.results = Some(results);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct MatchesData {
    pub matches: Vec<CompatibilityResult>,
}

#[derive(Debug, Serialize)]
pub struct StatsData {
    pub stats: BreedingStats,
}

#[derive(Debug, Serialize)]
pub struct AnimalsData {
    pub animals: Vec<Animal>,
}

pub fn matches(matches: Vec<CompatibilityResult>) -> Envelope<MatchesData> {
    let count = matches.len();
    Envelope::success(MatchesData { matches }).with_results(count)
}

pub fn stats(stats: BreedingStats) -> Envelope<StatsData> {
    Envelope::success(StatsData { stats })
}

pub fn family(family: Family) -> Envelope<Family> {
    Envelope::success(family)
}

pub fn animals(animals: Vec<Animal>) -> Envelope<AnimalsData> {
    let count = animals.len();
    Envelope::success(AnimalsData { animals }).with_results(count)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub status_code: u16,
    pub message: String,
}

impl From<&HerdError> for ErrorEnvelope {
    fn from(err: &HerdError) -> Self {
        Self {
            status: "error",
            status_code: err.status_code(),
            message: err.user_friendly_message(),
        }
    }
}

/// Serializes an envelope for output. A serialization failure still
/// yields a valid JSON error document.
pub fn render<T: Serialize>(value: &T, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize response: {}", e);
        serde_json::json!({ "status": "error", "message": e.to_string() }).to_string()
    })
}
