use crate::core::age::age_in_months;
use crate::domain::constants::LAMB_AGE_MONTHS;
use crate::domain::herd::Herd;
use crate::domain::model::{Animal, Gender, HealthStatus};
use crate::utils::error::{HerdError, Result};
use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Lamb,
    Adult,
}

/// Optional filters over a herd snapshot; every filter that is set must match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HerdQuery {
    pub gender: Option<Gender>,
    pub health_status: Option<HealthStatus>,
    pub breed: Option<String>,
    pub search: Option<String>,
    pub age_group: Option<AgeGroup>,
}

fn contains_ignore_case(needle: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|e| HerdError::BadRequest {
            message: format!("Invalid search term '{}': {}", needle, e),
        })
}

struct Matcher {
    query: HerdQuery,
    breed: Option<Regex>,
    search: Option<Regex>,
    now: DateTime<Utc>,
}

impl Matcher {
    fn new(query: &HerdQuery, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            breed: query.breed.as_deref().map(contains_ignore_case).transpose()?,
            search: query.search.as_deref().map(contains_ignore_case).transpose()?,
            query: query.clone(),
            now,
        })
    }

    fn matches(&self, animal: &Animal) -> bool {
        if self.query.gender.is_some_and(|g| g != animal.gender) {
            return false;
        }
        if self.query.health_status.is_some_and(|h| h != animal.health_status) {
            return false;
        }
        if self.breed.as_ref().is_some_and(|re| !re.is_match(&animal.breed)) {
            return false;
        }
        if self.search.as_ref().is_some_and(|re| !re.is_match(&animal.tag_number)) {
            return false;
        }
        match self.query.age_group {
            Some(AgeGroup::Lamb) => age_in_months(animal.birth_date, self.now) < LAMB_AGE_MONTHS,
            Some(AgeGroup::Adult) => age_in_months(animal.birth_date, self.now) >= LAMB_AGE_MONTHS,
            None => true,
        }
    }
}

/// Animals of `herd` matching `query`, in snapshot order.
pub fn list(herd: &Herd, query: &HerdQuery, now: DateTime<Utc>) -> Result<Vec<Animal>> {
    let matcher = Matcher::new(query, now)?;
    Ok(herd.iter().filter(|a| matcher.matches(a)).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{ewe, ram, today};

    fn herd() -> Herd {
        let mut dorset = ewe("1", 30.0);
        dorset.breed = "English Dorset".to_string();
        let mut sick = ram("2", 8.0);
        sick.health_status = HealthStatus::NeedsAttention;
        Herd::new(vec![dorset, sick, ewe("3", 11.0), ram("4", 40.0)])
    }

    fn ids(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.id.0.as_str()).collect()
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let animals = list(&herd(), &HerdQuery::default(), today()).unwrap();
        assert_eq!(ids(&animals), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filters_combine() {
        let query = HerdQuery {
            gender: Some(Gender::Female),
            age_group: Some(AgeGroup::Adult),
            ..HerdQuery::default()
        };
        assert_eq!(ids(&list(&herd(), &query, today()).unwrap()), vec!["1"]);

        let query = HerdQuery {
            age_group: Some(AgeGroup::Lamb),
            health_status: Some(HealthStatus::Healthy),
            ..HerdQuery::default()
        };
        assert_eq!(ids(&list(&herd(), &query, today()).unwrap()), vec!["3"]);
    }

    #[test]
    fn test_breed_and_tag_search_ignore_case() {
        let query = HerdQuery {
            breed: Some("dorset".to_string()),
            ..HerdQuery::default()
        };
        assert_eq!(ids(&list(&herd(), &query, today()).unwrap()), vec!["1"]);

        let query = HerdQuery {
            search: Some("m-".to_string()),
            ..HerdQuery::default()
        };
        assert_eq!(ids(&list(&herd(), &query, today()).unwrap()), vec!["2", "4"]);
    }

    #[test]
    fn test_search_terms_are_literal() {
        let query = HerdQuery {
            search: Some("(".to_string()),
            ..HerdQuery::default()
        };
        assert!(list(&herd(), &query, today()).unwrap().is_empty());
    }
}
