use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(pub String);

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnimalId {
    fn from(value: &str) -> Self {
        AnimalId(value.to_string())
    }
}

/// Opaque identity handed out by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(value: &str) -> Self {
        OwnerId(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Breeding quality grade, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fertility {
    #[serde(rename = "AA")]
    AA,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "BB")]
    BB,
}

impl Fertility {
    pub fn parse(raw: &str) -> Option<Fertility> {
        match raw.trim() {
            "AA" => Some(Fertility::AA),
            "B+" => Some(Fertility::BPlus),
            "BB" => Some(Fertility::BB),
            _ => None,
        }
    }

    /// Unset or unrecognised ratings score as the lowest grade.
    pub fn resolve(rating: Option<Fertility>) -> Fertility {
        rating.unwrap_or(Fertility::AA)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Fertility::AA => "AA",
            Fertility::BPlus => "B+",
            Fertility::BB => "BB",
        }
    }
}

impl fmt::Display for Fertility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn lenient_fertility<'de, D>(deserializer: D) -> std::result::Result<Option<Fertility>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(rating)) => Fertility::parse(&rating),
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HealthStatus {
    #[default]
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "needs attention", alias = "needs-attention")]
    NeedsAttention,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: AnimalId,
    pub owner: OwnerId,
    pub tag_number: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub mother: Option<AnimalId>,
    #[serde(default)]
    pub father: Option<AnimalId>,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_fertility")]
    pub fertility: Option<Fertility>,
    #[serde(default)]
    pub is_pregnant: bool,
    #[serde(default)]
    pub pregnancy_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub health_status: HealthStatus,
    #[serde(default)]
    pub notes: String,
}

impl Animal {
    pub fn is_healthy(&self) -> bool {
        self.health_status == HealthStatus::Healthy
    }

    pub fn has_parent(&self, id: &AnimalId) -> bool {
        self.mother.as_ref() == Some(id) || self.father.as_ref() == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Do not breed")]
    DoNotBreed,
    #[serde(rename = "Best choice")]
    BestChoice,
    #[serde(rename = "Good choice")]
    GoodChoice,
    #[serde(rename = "Acceptable")]
    Acceptable,
    #[serde(rename = "Not recommended")]
    NotRecommended,
}

impl Recommendation {
    pub fn from_score(score: i32, is_compatible: bool) -> Recommendation {
        if !is_compatible {
            return Recommendation::DoNotBreed;
        }
        match score {
            s if s >= 90 => Recommendation::BestChoice,
            s if s >= 70 => Recommendation::GoodChoice,
            s if s >= 50 => Recommendation::Acceptable,
            _ => Recommendation::NotRecommended,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::DoNotBreed => "Do not breed",
            Recommendation::BestChoice => "Best choice",
            Recommendation::GoodChoice => "Good choice",
            Recommendation::Acceptable => "Acceptable",
            Recommendation::NotRecommended => "Not recommended",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pairwise outcome of the compatibility evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_compatible: bool,
    pub score: i32,
    pub reasons: Vec<String>,
    pub recommendation: Recommendation,
    pub fertility1: Fertility,
    pub fertility2: Fertility,
    pub expected_litter_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub animal: Animal,
    #[serde(flatten)]
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingStats {
    pub total_males: usize,
    pub total_females: usize,
    pub males_with_offspring: usize,
    pub females_with_offspring: usize,
    pub breeding_age_males: usize,
    pub breeding_age_females: usize,
    pub total_pairs: usize,
    pub growth_potential: f64,
}

/// One-hop relatives of an animal inside its owner's herd.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub animal: Animal,
    pub mother: Option<Animal>,
    pub father: Option<Animal>,
    pub siblings: Vec<Animal>,
    pub offspring: Vec<Animal>,
}
