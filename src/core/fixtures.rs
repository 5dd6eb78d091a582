use crate::domain::model::{Animal, AnimalId, Fertility, Gender, HealthStatus, OwnerId};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

pub fn animal(id: &str, gender: Gender, age_months: f64) -> Animal {
    let prefix = match gender {
        Gender::Female => "F",
        Gender::Male => "M",
    };
    let days = (age_months * 30.0).round() as i64;
    Animal {
        id: AnimalId::from(id),
        owner: OwnerId::from("owner-1"),
        tag_number: format!("{}-{}", prefix, id),
        gender,
        birth_date: today().date_naive() - Duration::days(days),
        mother: None,
        father: None,
        weight: 60.0,
        breed: "Assaf".to_string(),
        fertility: Some(Fertility::BPlus),
        is_pregnant: false,
        pregnancy_start_date: None,
        health_status: HealthStatus::Healthy,
        notes: String::new(),
    }
}

pub fn ewe(id: &str, age_months: f64) -> Animal {
    animal(id, Gender::Female, age_months)
}

pub fn ram(id: &str, age_months: f64) -> Animal {
    animal(id, Gender::Male, age_months)
}

pub fn with_fertility(mut animal: Animal, fertility: Option<Fertility>) -> Animal {
    animal.fertility = fertility;
    animal
}
